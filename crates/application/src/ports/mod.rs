mod record_set_provider;

pub use record_set_provider::{PageCursor, RecordSetPage, RecordSetProvider};
