//! Command-line configuration.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
}

impl Config {
    /// Builds the configuration from the full argument vector, program name
    /// included. Anything but exactly one input file gives the usage line.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Config, String> {
        let args: Vec<String> = args.into_iter().collect();
        if args.len() != 2 {
            let program = args.first().map(String::as_str).unwrap_or("arith_scanner");
            return Err(usage(program));
        }

        Ok(Config {
            input: PathBuf::from(&args[1]),
        })
    }
}

pub fn usage(program: &str) -> String {
    format!("Usage: {} infile", program)
}
