//! Lexical analysis for integer arithmetic.
//!
//! This module turns raw input into `+ - * /` operator tokens and decimal
//! integer literals. It handles:
//!
//! - Reading input one byte at a time with a single byte of look-ahead
//! - Whitespace skipping and greedy integer accumulation
//! - Line tracking for error reporting

pub mod lexer;
pub mod source;
pub mod tokens;
