use models::{AggregatedBucket, DateBucket, MonthlyChangePoint, TimeSeriesPoint};

/// Derives the running-total series from date buckets.
///
/// Owns the chronological sort: buckets arrive in first-seen order and are
/// sorted ascending by calendar date before the order-dependent pass.
/// `cumulative_percent` is 0.0 throughout when the grand total is 0.
pub fn cumulative_series(mut buckets: Vec<DateBucket>) -> Vec<TimeSeriesPoint> {
    buckets.sort_by_key(|bucket| bucket.date);

    let grand_total: f64 = buckets.iter().map(|bucket| bucket.total).sum();
    let mut cumulative = 0.0;
    buckets
        .into_iter()
        .map(|bucket| {
            cumulative += bucket.total;
            let cumulative_percent = if grand_total == 0.0 {
                0.0
            } else {
                cumulative / grand_total * 100.0
            };
            TimeSeriesPoint {
                date: bucket.date.format("%d/%m/%Y").to_string(),
                amount: bucket.total,
                cumulative,
                cumulative_percent,
            }
        })
        .collect()
}

/// Derives month-over-month percentage change from `YYYY-MM` buckets.
///
/// Sorts ascending by period key (lexicographic order is chronological for
/// `YYYY-MM`). The first period and any period following a zero total get
/// a change of 0.0, never NaN.
pub fn monthly_change(mut buckets: Vec<AggregatedBucket>) -> Vec<MonthlyChangePoint> {
    buckets.sort_by(|a, b| a.key.cmp(&b.key));

    let mut previous: Option<f64> = None;
    buckets
        .into_iter()
        .map(|bucket| {
            let pct_change = match previous {
                Some(prev) if prev != 0.0 => (bucket.total - prev) / prev * 100.0,
                _ => 0.0,
            };
            previous = Some(bucket.total);
            MonthlyChangePoint {
                period: bucket.key,
                amount: bucket.total,
                pct_change,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bucket(year: i32, month: u32, day: u32, total: f64) -> DateBucket {
        DateBucket {
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            total,
        }
    }

    fn period(key: &str, total: f64) -> AggregatedBucket {
        AggregatedBucket {
            key: key.to_string(),
            total,
        }
    }

    #[test]
    fn test_cumulative_series_sorts_and_accumulates() {
        let points = cumulative_series(vec![
            bucket(2024, 1, 3, 30.0),
            bucket(2024, 1, 1, 100.0),
            bucket(2024, 1, 2, 70.0),
        ]);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].date, "01/01/2024");
        assert_eq!(points[0].cumulative, 100.0);
        assert_eq!(points[1].cumulative, 170.0);
        assert_eq!(points[2].cumulative, 200.0);
        assert_eq!(points[2].cumulative_percent, 100.0);
    }

    #[test]
    fn test_cumulative_is_monotonic_for_nonnegative_amounts() {
        let points = cumulative_series(vec![
            bucket(2024, 1, 1, 5.0),
            bucket(2024, 1, 2, 0.0),
            bucket(2024, 1, 3, 12.0),
        ]);
        for pair in points.windows(2) {
            assert!(pair[1].cumulative >= pair[0].cumulative);
        }
    }

    #[test]
    fn test_cumulative_percent_zero_when_grand_total_zero() {
        let points = cumulative_series(vec![
            bucket(2024, 1, 1, 0.0),
            bucket(2024, 1, 2, 0.0),
        ]);
        assert_eq!(points.len(), 2);
        for point in &points {
            assert_eq!(point.cumulative_percent, 0.0);
        }
    }

    #[test]
    fn test_cumulative_percent_last_point_is_100() {
        let points = cumulative_series(vec![
            bucket(2024, 1, 1, 40.0),
            bucket(2024, 1, 2, 60.0),
        ]);
        assert_eq!(points.last().unwrap().cumulative_percent, 100.0);
    }

    #[test]
    fn test_monthly_change_first_period_is_zero() {
        let points = monthly_change(vec![period("2024-01", 100.0)]);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].pct_change, 0.0);
    }

    #[test]
    fn test_monthly_change_percentages() {
        let points = monthly_change(vec![
            period("2024-02", 150.0),
            period("2024-01", 100.0),
            period("2024-03", 75.0),
        ]);
        assert_eq!(points[0].period, "2024-01");
        assert_eq!(points[0].pct_change, 0.0);
        assert_eq!(points[1].pct_change, 50.0);
        assert_eq!(points[2].pct_change, -50.0);
    }

    #[test]
    fn test_monthly_change_zero_previous_total() {
        let points = monthly_change(vec![
            period("2024-01", 0.0),
            period("2024-02", 80.0),
        ]);
        assert_eq!(points[1].pct_change, 0.0);
        assert_eq!(points[1].amount, 80.0);
    }

    #[test]
    fn test_empty_input_yields_empty_series() {
        assert!(cumulative_series(Vec::new()).is_empty());
        assert!(monthly_change(Vec::new()).is_empty());
    }
}
