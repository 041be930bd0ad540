mod record;
mod store;

pub use record::{ProgressRecord, SCHEMA_VERSION};
pub use store::ProgressStore;
