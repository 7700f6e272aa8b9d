pub mod error;
pub mod source;

pub use error::{Result, StoreError};
pub use source::{FileRecordSource, InMemoryRecordSource, RecordSource};
