use std::{
    fs::File,
    io::{BufReader, ErrorKind, Read},
    path::Path,
    rc::Rc,
};

use tracing::debug;

use crate::{errors::errors::Error, Position};

/// Byte-at-a-time view over an input with one byte of push-back.
///
/// The pending slot holds at most one byte. Putting back twice without an
/// intervening [`CharSource::next`] keeps only the second byte.
///
/// The underlying reader is owned by the source, so a file opened with
/// [`CharSource::open`] is closed whenever the source is dropped.
pub struct CharSource<R: Read> {
    reader: BufReader<R>,
    pending: Option<u8>,
    line: u32,
    name: Rc<String>,
}

impl CharSource<File> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let name = path.to_string_lossy().into_owned();

        let file = File::open(path).map_err(|e| Error::open_failed(name.clone(), e))?;
        debug!(target: "arith_scanner::lexer", file = %name, "opened input");

        Ok(CharSource::from_reader(file, name))
    }
}

impl<R: Read> CharSource<R> {
    pub fn from_reader(reader: R, name: impl Into<String>) -> Self {
        let mut source = CharSource {
            reader: BufReader::new(reader),
            pending: None,
            line: 1,
            name: Rc::new(name.into()),
        };
        source.reset();
        source
    }

    /// Back to line 1, with a newline primed so the first read looks like
    /// the start of a line. The primed newline is not counted.
    pub fn reset(&mut self) {
        self.line = 1;
        self.pending = Some(b'\n');
    }

    /// Returns the next byte, or `None` at end of input.
    pub fn next(&mut self) -> Result<Option<u8>, Error> {
        // Already counted when it was first read
        if let Some(c) = self.pending.take() {
            return Ok(Some(c));
        }

        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => break,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::read_failed(self.name.as_str(), e)),
            }
        }

        if buf[0] == b'\n' {
            self.line += 1;
        }
        Ok(Some(buf[0]))
    }

    pub fn put_back(&mut self, c: u8) {
        self.pending = Some(c);
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn position(&self) -> Position {
        Position(self.line, Rc::clone(&self.name))
    }
}
