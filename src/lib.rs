#![allow(clippy::module_inception)]

use std::{io::Write, path::Path, rc::Rc, sync::Once};

use crate::{
    errors::errors::Error,
    lexer::{lexer::Scanner, source::CharSource},
};

pub mod config;
pub mod errors;
pub mod lexer;

/// Line number and input name for a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

static TRACING_INIT: Once = Once::new();

/// Installs the log subscriber, writing to stderr.
///
/// Only does anything when `RUST_LOG` is set, e.g.
/// `RUST_LOG=arith_scanner::lexer=trace`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}

/// Scans the file at `path`, writing one line per token to `out`.
///
/// Returns the number of tokens written. The file is closed on every
/// return path, including errors.
pub fn scan_file<P: AsRef<Path>, W: Write>(path: P, out: &mut W) -> Result<usize, Error> {
    let mut source = CharSource::open(path)?;
    let mut scanner = Scanner::new(&mut source);
    scanner.init();

    let mut count = 0;
    while scanner.scan()? {
        if let Some(token) = scanner.get_token() {
            writeln!(out, "{}", token).map_err(Error::write_failed)?;
            count += 1;
        }
    }

    out.flush().map_err(Error::write_failed)?;
    tracing::debug!(target: "arith_scanner", count, "scan finished");
    Ok(count)
}
