use std::io::Read;

use tracing::{debug, trace};

use crate::errors::errors::Error;

use super::{
    source::CharSource,
    tokens::{Token, OPERATOR_LOOKUP},
};

/// Pulls tokens out of a [`CharSource`] one at a time.
///
/// The scanner borrows the source exclusively for its whole lifetime and
/// keeps nothing between calls except the last token it produced.
pub struct Scanner<'a, R: Read> {
    source: &'a mut CharSource<R>,
    token: Option<Token>,
}

impl<'a, R: Read> Scanner<'a, R> {
    pub fn new(source: &'a mut CharSource<R>) -> Self {
        Scanner {
            source,
            token: None,
        }
    }

    pub fn init(&mut self) {
        self.source.reset();
        self.token = None;
    }

    pub fn get_token(&self) -> Option<Token> {
        self.token
    }

    pub fn get_line(&self) -> u32 {
        self.source.line()
    }

    /// Scans one token into the current-token slot.
    ///
    /// Returns `Ok(false)` once the input holds nothing but whitespace.
    pub fn scan(&mut self) -> Result<bool, Error> {
        let c = match self.skip_whitespace()? {
            Some(c) => c,
            None => {
                debug!(target: "arith_scanner::lexer", line = self.get_line(), "end of input");
                return Ok(false);
            }
        };

        let token = if let Some(token) = OPERATOR_LOOKUP.get(&c) {
            *token
        } else if c.is_ascii_digit() {
            Token::IntLit(self.scan_int(c)?)
        } else {
            return Err(Error::unrecognised(c, self.source.position()));
        };

        trace!(target: "arith_scanner::lexer", line = self.get_line(), token = %token, "scanned");
        self.token = Some(token);
        Ok(true)
    }

    fn skip_whitespace(&mut self) -> Result<Option<u8>, Error> {
        while let Some(c) = self.source.next()? {
            if !is_space(c) {
                return Ok(Some(c));
            }
        }
        Ok(None)
    }

    fn scan_int(&mut self, first: u8) -> Result<i64, Error> {
        let mut value = i64::from(first - b'0');

        loop {
            match self.source.next()? {
                Some(c) if c.is_ascii_digit() => {
                    value = value.wrapping_mul(10).wrapping_add(i64::from(c - b'0'));
                }
                Some(c) => {
                    // Starts the next token
                    self.source.put_back(c);
                    break;
                }
                // An exhausted reader reports end of input again on the next read
                None => break,
            }
        }

        Ok(value)
    }
}

/// Same set as C `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Lazy token sequence over a [`Scanner`]. Ends after end of input or
/// after the first error.
pub struct Tokens<'a, R: Read> {
    scanner: Scanner<'a, R>,
    done: bool,
}

impl<'a, R: Read> Tokens<'a, R> {
    pub fn new(source: &'a mut CharSource<R>) -> Self {
        Tokens {
            scanner: Scanner::new(source),
            done: false,
        }
    }
}

impl<R: Read> Iterator for Tokens<'_, R> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.scanner.scan() {
            Ok(true) => self.scanner.get_token().map(Ok),
            Ok(false) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> std::iter::FusedIterator for Tokens<'_, R> {}

/// Scans every token in `source`. The first error aborts the whole scan.
pub fn tokenize<R: Read>(source: &mut CharSource<R>) -> Result<Vec<Token>, Error> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();

    while scanner.scan()? {
        tokens.extend(scanner.get_token());
    }

    Ok(tokens)
}
