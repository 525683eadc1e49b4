use crate::artifacts::objects::commit::Commit;
use derive_new::new;
use std::io::BufRead;

/// Lazy iterator over log records read from `reader`
///
/// Records are parsed as they are pulled. Lines that do not parse are logged
/// and skipped; a read error ends the stream.
#[derive(new)]
pub struct CommitReader<R: BufRead> {
    reader: R,
    #[new(default)]
    buffer: Vec<u8>,
    #[new(default)]
    skipped: usize,
}

impl<R: BufRead> CommitReader<R> {
    /// Number of malformed records skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<R: BufRead> Iterator for CommitReader<R> {
    type Item = Commit;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();

            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(%err, "failed to read commit history");
                    return None;
                }
            }

            // subjects are not guaranteed to be UTF-8
            let line = String::from_utf8_lossy(&self.buffer);
            let line = line.trim_end_matches(['\n', '\r']);
            if line.is_empty() {
                continue;
            }

            match Commit::parse_record(line) {
                Ok(commit) => return Some(commit),
                Err(err) => {
                    self.skipped += 1;
                    tracing::debug!(line, err = %format!("{err:#}"), "skipping log record");
                }
            }
        }
    }
}
