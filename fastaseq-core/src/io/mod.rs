pub mod fasta;

pub use fasta::{is_valid_fasta, validate_reader, FastaRecords};
