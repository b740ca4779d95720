use crate::error::{BioError, BioResult};
use crate::seq::record::SeqRecord;
use log::{debug, trace, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::iter::FusedIterator;
use std::mem;
use std::path::Path;

const MARKER: char = '>';

#[derive(Debug)]
enum ReaderState {
    BeforeFirstRecord,
    Accumulating { header: String, body: String },
    Exhausted,
    Failed,
}

/// Forward-only pull iterator over the records of one FASTA source.
///
/// The source is owned for a single pass and dropped as soon as the pass
/// ends, whether it ran to the end of input or stopped on a read error.
/// Dropping the iterator early releases it as well.
pub struct FastaRecords<R> {
    reader: Option<R>,
    state: ReaderState,
    line_no: usize,
    buf_line: String,
}

impl<R: BufRead> FastaRecords<R> {
    /// Wraps `reader` without the structural pre-check. Non-empty lines
    /// before the first header are skipped.
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
            state: ReaderState::BeforeFirstRecord,
            line_no: 0,
            buf_line: String::new(),
        }
    }

    /// Checks that the first non-empty line is a header, then returns an
    /// iterator positioned on that header.
    ///
    /// Any failure during the check, including a read error or bytes that
    /// are not UTF-8, is reported as [`BioError::MalformedSource`].
    pub fn from_reader(reader: R) -> BioResult<Self> {
        Self::with_origin(reader, "input")
    }

    fn with_origin(mut reader: R, origin: &str) -> BioResult<Self> {
        let mut buf_line = String::new();
        let mut line_no = 0;
        let header = match next_nonempty_line(&mut reader, &mut buf_line, &mut line_no) {
            Ok(true) => buf_line.trim().strip_prefix(MARKER).map(str::to_owned),
            Ok(false) => None,
            Err(err) => {
                debug!("{origin}: read failed during format check: {err}");
                None
            }
        };

        let Some(header) = header else {
            debug!("{origin}: first non-empty line is not a '{MARKER}' header");
            return Err(BioError::MalformedSource {
                origin: origin.to_owned(),
            });
        };

        debug!("{origin}: first header at line {line_no}");
        Ok(Self {
            reader: Some(reader),
            state: ReaderState::Accumulating {
                header,
                body: String::new(),
            },
            line_no,
            buf_line,
        })
    }

    /// Number of lines consumed from the source so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    fn release(&mut self) {
        self.reader = None;
    }

    fn emit(&self, header: String, body: String) -> SeqRecord {
        let record = SeqRecord::new(header, body);
        trace!(
            "record '{}' ({} residues) ending at line {}",
            record.id(),
            record.len(),
            self.line_no
        );
        record
    }
}

impl FastaRecords<BufReader<File>> {
    /// Opens `path` and runs the structural pre-check. A file that cannot be
    /// opened is [`BioError::SourceIo`].
    pub fn from_path(path: impl AsRef<Path>) -> BioResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Self::with_origin(BufReader::new(file), &path.display().to_string())
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = BioResult<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if matches!(self.state, ReaderState::Exhausted | ReaderState::Failed) {
                return None;
            }
            let reader = self.reader.as_mut()?;

            self.buf_line.clear();
            match reader.read_line(&mut self.buf_line) {
                Ok(0) => {
                    let state = mem::replace(&mut self.state, ReaderState::Exhausted);
                    self.release();
                    debug!("end of source after {} lines", self.line_no);
                    return match state {
                        ReaderState::Accumulating { header, body } => {
                            Some(Ok(self.emit(header, body)))
                        }
                        _ => None,
                    };
                }
                Ok(_) => {
                    self.line_no += 1;
                    let line = self.buf_line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if let Some(header) = line.strip_prefix(MARKER) {
                        let next = ReaderState::Accumulating {
                            header: header.to_owned(),
                            body: String::new(),
                        };
                        if let ReaderState::Accumulating { header, body } =
                            mem::replace(&mut self.state, next)
                        {
                            return Some(Ok(self.emit(header, body)));
                        }
                        continue;
                    }

                    match &mut self.state {
                        ReaderState::Accumulating { body, .. } => body.push_str(line),
                        _ => warn!("skipping line {} before the first header", self.line_no),
                    }
                }
                Err(err) => {
                    self.state = ReaderState::Failed;
                    self.release();
                    debug!("read failed after line {}: {err}", self.line_no);
                    return Some(Err(BioError::SourceIo(err)));
                }
            }
        }
    }
}

impl<R: BufRead> FusedIterator for FastaRecords<R> {}

/// Reads lines into `buf` until one is non-blank. Returns `Ok(false)` at end
/// of input.
fn next_nonempty_line<R: BufRead>(
    reader: &mut R,
    buf: &mut String,
    line_no: &mut usize,
) -> std::io::Result<bool> {
    loop {
        buf.clear();
        if reader.read_line(buf)? == 0 {
            return Ok(false);
        }
        *line_no += 1;
        if !buf.trim().is_empty() {
            return Ok(true);
        }
    }
}

/// Cheap structural check: true iff the first non-empty line starts with
/// `>`. Empty, unreadable or non-UTF-8 input is reported as `false`.
pub fn validate_reader<R: BufRead>(reader: &mut R) -> bool {
    let mut buf = String::new();
    let mut line_no = 0;
    match next_nonempty_line(reader, &mut buf, &mut line_no) {
        Ok(true) => buf.trim_start().starts_with(MARKER),
        Ok(false) => false,
        Err(err) => {
            debug!("format check read failed: {err}");
            false
        }
    }
}

pub fn is_valid_fasta(path: impl AsRef<Path>) -> bool {
    match File::open(path.as_ref()) {
        Ok(file) => validate_reader(&mut BufReader::new(file)),
        Err(err) => {
            debug!("{}: cannot open: {err}", path.as_ref().display());
            false
        }
    }
}

pub fn fasta_records_from_reader<R: BufRead>(reader: R) -> BioResult<FastaRecords<R>> {
    FastaRecords::from_reader(reader)
}

pub fn fasta_records_from_path(
    path: impl AsRef<Path>,
) -> BioResult<FastaRecords<BufReader<File>>> {
    FastaRecords::from_path(path)
}

pub fn read_fasta_records_from_reader<R: BufRead>(reader: R) -> BioResult<Vec<SeqRecord>> {
    fasta_records_from_reader(reader)?.collect()
}

pub fn read_fasta_records_from_path(path: impl AsRef<Path>) -> BioResult<Vec<SeqRecord>> {
    fasta_records_from_path(path)?.collect()
}

pub fn read_fasta_records_from_bytes(data: &[u8]) -> BioResult<Vec<SeqRecord>> {
    read_fasta_records_from_reader(Cursor::new(data))
}
