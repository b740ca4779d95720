//! Sequence alphabet classification.
//!
//! Rules (deterministic, evaluated in this order):
//! - Empty → Unknown
//! - Every character in the nucleotide set (ACGTUN-) → Nucleotide
//! - Every character in the protein set → Protein
//! - Otherwise → Unknown
//!
//! The nucleotide test always runs first, so a sequence made only of
//! A/C/G/T/N is Nucleotide even though each of those is also an amino acid.

use crate::alphabets::{nucleotide, protein};
use crate::seq::record::SeqRecord;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeqType {
    Nucleotide,
    Protein,
    Unknown,
}

impl SeqType {
    pub fn as_str(self) -> &'static str {
        match self {
            SeqType::Nucleotide => "nucleotide",
            SeqType::Protein => "protein",
            SeqType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SeqType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify raw residue bytes.
pub fn detect_seq_type(bytes: &[u8]) -> SeqType {
    if bytes.is_empty() {
        return SeqType::Unknown;
    }
    if nucleotide::alphabet().is_word(bytes) {
        return SeqType::Nucleotide;
    }
    if protein::alphabet().is_word(bytes) {
        return SeqType::Protein;
    }
    SeqType::Unknown
}

/// Classify a batch of already-parsed records, in input order.
pub fn classify_records(records: &[SeqRecord]) -> Vec<SeqType> {
    par_map!(records, |record: &SeqRecord| record.seq_type())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_nucleotide() {
        assert_eq!(detect_seq_type(b"ACGTN"), SeqType::Nucleotide);
        assert_eq!(detect_seq_type(b"acgu-n"), SeqType::Nucleotide);
    }

    #[test]
    fn nucleotide_wins_over_protein() {
        // every byte here is also a valid amino acid code
        assert_eq!(detect_seq_type(b"ACGT"), SeqType::Nucleotide);
        assert_eq!(detect_seq_type(b"NNNN"), SeqType::Nucleotide);
        assert_eq!(detect_seq_type(b"----"), SeqType::Nucleotide);
    }

    #[test]
    fn detect_protein() {
        assert_eq!(detect_seq_type(b"MKLVQ"), SeqType::Protein);
        assert_eq!(detect_seq_type(b"mfvflvllplvss*"), SeqType::Protein);
        assert_eq!(detect_seq_type(b"ACGTX"), SeqType::Protein);
    }

    #[test]
    fn detect_unknown() {
        assert_eq!(detect_seq_type(b"ACGTX!"), SeqType::Unknown);
        assert_eq!(detect_seq_type(b"MKLB"), SeqType::Unknown);
        assert_eq!(detect_seq_type(b"AC GT"), SeqType::Unknown);
    }

    #[test]
    fn detect_empty() {
        assert_eq!(detect_seq_type(b""), SeqType::Unknown);
    }

    #[test]
    fn display_names() {
        assert_eq!(SeqType::Nucleotide.to_string(), "nucleotide");
        assert_eq!(SeqType::Protein.to_string(), "protein");
        assert_eq!(SeqType::Unknown.to_string(), "unknown");
    }

    #[test]
    fn classify_records_keeps_order() {
        let records = vec![
            SeqRecord::new("a", "ACGT"),
            SeqRecord::new("b", "MKLVQ"),
            SeqRecord::new("c", ""),
            SeqRecord::new("d", "ACGTX!"),
        ];
        assert_eq!(
            classify_records(&records),
            vec![
                SeqType::Nucleotide,
                SeqType::Protein,
                SeqType::Unknown,
                SeqType::Unknown
            ]
        );
    }
}
