use std::{env, io, process};

use arith_scanner::{config::Config, init_tracing, scan_file};

fn main() {
    init_tracing();

    let config = match Config::from_args(env::args()) {
        Ok(config) => config,
        Err(usage) => {
            eprintln!("{}", usage);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(error) = scan_file(&config.input, &mut out) {
        tracing::debug!(kind = error.get_error_name(), "scan aborted");
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}
