//! Character-at-a-time access to source text.

use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor},
    path::Path,
};

use crate::errors::errors::SourceError;

/// What the scanner needs from its input.
///
/// `line` and `column` describe the character most recently returned by
/// `read`. Lines are 1-based, columns 0-based.
pub trait CharacterSource {
    fn read(&mut self) -> Result<char, SourceError>;
    fn line(&self) -> usize;
    fn column(&self) -> usize;
    fn close(&mut self);
}

/// A [`CharacterSource`] that buffers one line of its reader at a time.
///
/// The `\n` ending a line is reported on that line; the line counter moves
/// when the first character of the following line is read.
pub struct SourceReader<R: BufRead> {
    reader: Option<R>,
    buffer: Vec<char>,
    line_number: usize,
    position: Option<usize>,
}

impl SourceReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let file = File::open(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "opened source file");
        Ok(SourceReader::new(BufReader::new(file)))
    }
}

impl SourceReader<Cursor<Vec<u8>>> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Self {
        SourceReader::new(Cursor::new(text.as_bytes().to_vec()))
    }
}

impl<R: BufRead> SourceReader<R> {
    pub fn new(reader: R) -> Self {
        SourceReader {
            reader: Some(reader),
            buffer: vec![],
            line_number: 0,
            position: None,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }

    fn next_in_buffer(&self) -> Option<usize> {
        let next = self.position.map_or(0, |pos| pos + 1);
        (next < self.buffer.len()).then_some(next)
    }

    fn fill_buffer(&mut self) -> Result<(), SourceError> {
        let reader = self.reader.as_mut().ok_or(SourceError::EndOfInput)?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(SourceError::EndOfInput);
        }

        self.buffer = line.chars().collect();
        self.line_number += 1;
        self.position = None;
        Ok(())
    }
}

impl<R: BufRead> CharacterSource for SourceReader<R> {
    fn read(&mut self) -> Result<char, SourceError> {
        loop {
            if let Some(next) = self.next_in_buffer() {
                self.position = Some(next);
                return Ok(self.buffer[next]);
            }

            self.fill_buffer()?;
        }
    }

    fn line(&self) -> usize {
        self.line_number
    }

    fn column(&self) -> usize {
        self.position.unwrap_or(0)
    }

    fn close(&mut self) {
        if self.reader.take().is_some() {
            tracing::debug!(lines = self.line_number, "closed source");
        }
    }
}
