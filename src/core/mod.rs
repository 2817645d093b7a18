// Public modules
pub mod client;
pub mod defaults;
pub mod error;
pub mod lead;
pub mod output;
pub mod paths;
pub mod preview;
pub mod slugify;
pub mod store;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use output::{BulkResult, BulkSummary, ItemOutcome};
pub use store::Store;
