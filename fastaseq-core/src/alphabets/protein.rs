use crate::alphabets::Alphabet;
use std::sync::LazyLock;

static PROTEIN: LazyLock<Alphabet> =
    LazyLock::new(|| Alphabet::case_insensitive(b"ACDEFGHIKLMNPQRSTVWYX*-"));

/// The 20 standard amino acids plus `X`, stop `*` and gap `-`, in either case.
pub fn alphabet() -> &'static Alphabet {
    &PROTEIN
}
