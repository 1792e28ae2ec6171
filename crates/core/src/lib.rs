pub mod filter;
pub mod model;
pub mod summary;

pub use filter::{apply, FilterSelection};
pub use model::{LogEntry, TagValue};
pub use summary::{distinct_files, distinct_tags, summarize, SummaryRow};
