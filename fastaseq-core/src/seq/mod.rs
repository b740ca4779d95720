pub mod record;

pub use record::{SeqRecord, DEFAULT_LINE_WIDTH};
