pub mod detect;
pub mod nucleotide;
pub mod protein;

pub use detect::{classify_records, detect_seq_type, SeqType};

use bit_set::BitSet;
use std::borrow::Borrow;

/// A set of byte symbols backed by a bitset.
#[derive(Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Alphabet {
    pub symbols: BitSet,
}

impl Alphabet {
    pub fn new<C, T>(symbols: T) -> Self
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        let mut s = BitSet::new();
        s.extend(symbols.into_iter().map(|c| *c.borrow() as usize));

        Alphabet { symbols: s }
    }

    /// Builds an alphabet containing both the upper- and lowercase form of
    /// every given symbol.
    pub fn case_insensitive<C, T>(symbols: T) -> Self
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        let mut alphabet = Alphabet::default();
        for c in symbols {
            let c = *c.borrow();
            alphabet.insert(c.to_ascii_uppercase());
            alphabet.insert(c.to_ascii_lowercase());
        }
        alphabet
    }

    pub fn insert(&mut self, a: u8) {
        self.symbols.insert(a as usize);
    }

    #[inline]
    pub fn contains(&self, a: u8) -> bool {
        self.symbols.contains(a as usize)
    }

    /// True if every symbol of `text` belongs to the alphabet. Vacuously true
    /// for empty text.
    pub fn is_word<C, T>(&self, text: T) -> bool
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        text.into_iter().all(|c| self.contains(*c.borrow()))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn union(&self, others: &Alphabet) -> Self {
        Alphabet {
            symbols: self.symbols.union(&others.symbols).collect(),
        }
    }

    pub fn difference(&self, others: &Alphabet) -> Self {
        Alphabet {
            symbols: self.symbols.difference(&others.symbols).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_eq() {
        assert_eq!(Alphabet::new(b"ATCG"), Alphabet::new(b"ATCG"));
        assert_eq!(Alphabet::new(b"ATCG"), Alphabet::new(b"TAGC"));
        assert_ne!(Alphabet::new(b"ATCG"), Alphabet::new(b"ATC"));
    }

    #[test]
    fn case_insensitive_adds_both_cases() {
        let alphabet = Alphabet::case_insensitive(b"Ac-");
        assert_eq!(alphabet, Alphabet::new(b"AaCc-"));
        assert_eq!(alphabet.len(), 5);
    }

    #[test]
    fn empty_text_is_word() {
        assert!(Alphabet::new(b"ACGT").is_word(b""));
        assert!(Alphabet::default().is_empty());
    }

    #[test]
    fn set_operations() {
        let a = Alphabet::new(b"ACG");
        let b = Alphabet::new(b"GT");
        assert_eq!(a.union(&b), Alphabet::new(b"ACGT"));
        assert_eq!(a.difference(&b), Alphabet::new(b"AC"));
    }
}
