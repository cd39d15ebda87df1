//! Error types for the scanner.
//!
//! Two classes of failure exist and both halt scanning:
//!
//! - I/O errors (the input cannot be opened or read, the output cannot be written)
//! - Lexical errors, raised on the first character that cannot start a token

pub mod errors;
