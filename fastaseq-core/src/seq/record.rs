use crate::alphabets::{detect_seq_type, SeqType};
use std::fmt;

/// Column width commonly used when wrapping residues for display.
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// One parsed FASTA record.
///
/// The header never carries outer whitespace and the residues never contain
/// any whitespace at all; both are normalized once in [`SeqRecord::new`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SeqRecord {
    header: Box<str>,
    residues: Box<str>,
}

impl SeqRecord {
    /// `header` is the header line with its `>` already removed; `body` is
    /// the raw sequence text and may still contain line breaks and spaces.
    pub fn new(header: impl AsRef<str>, body: impl AsRef<str>) -> Self {
        Self {
            header: header.as_ref().trim().into(),
            residues: normalize_residues(body.as_ref()).into_boxed_str(),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn residues(&self) -> &str {
        &self.residues
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.residues.as_bytes()
    }

    /// Header text up to the first whitespace.
    pub fn id(&self) -> &str {
        match self.header.find(char::is_whitespace) {
            Some(idx) => &self.header[..idx],
            None => self.header(),
        }
    }

    /// Header text after the id, if any.
    pub fn desc(&self) -> Option<&str> {
        let idx = self.header.find(char::is_whitespace)?;
        let desc = self.header[idx..].trim();
        if desc.is_empty() {
            None
        } else {
            Some(desc)
        }
    }

    /// Number of residues.
    pub fn len(&self) -> usize {
        self.residues.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn seq_type(&self) -> SeqType {
        detect_seq_type(self.as_bytes())
    }

    /// Canonical text with residues wrapped every `width` characters. A
    /// width of 0 leaves the residues on one line, same as `Display`.
    pub fn to_fasta_string(&self, width: usize) -> String {
        let mut out = String::with_capacity(self.header.len() + self.residues.len() + 2);
        out.push('>');
        out.push_str(&self.header);
        out.push('\n');
        if width == 0 {
            out.push_str(&self.residues);
            return out;
        }
        for (i, c) in self.residues.chars().enumerate() {
            if i > 0 && i % width == 0 {
                out.push('\n');
            }
            out.push(c);
        }
        out
    }
}

impl fmt::Display for SeqRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">{}\n{}", self.header, self.residues)
    }
}

pub fn normalize_residues(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}
