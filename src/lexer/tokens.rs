use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref OPERATOR_LOOKUP: HashMap<u8, Token> = {
        let mut map = HashMap::new();
        map.insert(b'+', Token::Plus);
        map.insert(b'-', Token::Minus);
        map.insert(b'*', Token::Star);
        map.insert(b'/', Token::Slash);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Plus,
    Minus,
    Star,
    Slash,
    IntLit,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single lexical unit. Only integer literals carry a payload.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Token {
    Plus,
    Minus,
    Star,
    Slash,
    IntLit(i64),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Plus => TokenKind::Plus,
            Token::Minus => TokenKind::Minus,
            Token::Star => TokenKind::Star,
            Token::Slash => TokenKind::Slash,
            Token::IntLit(_) => TokenKind::IntLit,
        }
    }

    pub fn int_value(&self) -> Option<i64> {
        match self {
            Token::IntLit(value) => Some(*value),
            _ => None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::IntLit(value) => write!(f, "Token {}, value {}", self.kind(), value),
            _ => write!(f, "Token {}", self.kind()),
        }
    }
}
