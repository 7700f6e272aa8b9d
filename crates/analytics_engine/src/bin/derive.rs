use anyhow::{Context, Result};
use analytics_engine::derive_views;
use models::{ExpenseRecord, FilterState};
use std::env;
use std::fs;
use std::path::PathBuf;

fn arg(name: &str) -> Option<String> {
    env::args()
        .position(|a| a == name)
        .and_then(|i| env::args().nth(i + 1))
}

fn main() -> Result<()> {
    let records = arg("--records").unwrap_or("records.json".to_string());
    let owner = arg("--owner");
    let out = arg("--out");
    let pretty = env::args().any(|a| a == "--pretty");

    let records_path = PathBuf::from(&records);

    let raw = fs::read_to_string(&records_path)
        .with_context(|| format!("Reading {}", records_path.display()))?;
    let mut records: Vec<ExpenseRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("Parsing JSON in {}", records_path.display()))?;

    if let Some(owner) = &owner {
        records.retain(|r| r.owner_email == *owner);
    }

    let output = derive_views(&records, &FilterState::default());

    let json = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    match out {
        Some(path) => {
            let out_path = PathBuf::from(&path);
            if let Some(parent) = out_path.parent() {
                if !parent.exists() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("Creating output dir: {}", parent.display()))?;
                }
            }
            fs::write(&out_path, json)
                .with_context(|| format!("Writing {}", out_path.display()))?;
            println!(
                "Done. {} records in, {} categories, {} series points -> {}",
                output.record_count,
                output.category_totals.len(),
                output.time_series.len(),
                out_path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
