use crate::alphabets::Alphabet;
use std::sync::LazyLock;

static NUCLEOTIDE: LazyLock<Alphabet> = LazyLock::new(|| Alphabet::case_insensitive(b"ACGTUN-"));

/// Nucleotide symbols accepted by classification: `ACGTUN-` in either case.
pub fn alphabet() -> &'static Alphabet {
    &NUCLEOTIDE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_word() {
        assert!(alphabet().is_word(b"GATTACA"));
        assert!(alphabet().is_word(b"gauuaca"));
        assert!(alphabet().is_word(b"NN--acgt"));
    }

    #[test]
    fn protein_letter_is_no_word() {
        assert!(!alphabet().is_word(b"ACGTM"));
    }

    #[test]
    fn symbol_is_no_word() {
        assert!(!alphabet().is_word(b"#"));
        assert!(!alphabet().is_word(b"*"));
    }

    #[test]
    fn number_is_no_word() {
        assert!(!alphabet().is_word(b"42"));
    }
}
