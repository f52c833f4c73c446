use std::io::{self, BufRead};

/// Helper to read line-oriented input.
pub struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    pub fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Read the next line with surrounding whitespace trimmed. Returns `None` at the
    /// end of input.
    pub fn next_line(&mut self) -> io::Result<Option<&str>> {
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.buf.trim()))
    }

    /// Read the next line that is not blank.
    pub fn next_nonblank_line(&mut self) -> io::Result<Option<&str>> {
        loop {
            self.buf.clear();
            if self.read.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            if !self.buf.trim().is_empty() {
                return Ok(Some(self.buf.trim()));
            }
        }
    }
}
