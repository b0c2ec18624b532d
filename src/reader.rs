use crate::atoms;
use crate::tokens::{is_close, is_open, tokenize, Token};
use crate::types::Value;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedEOF,
    UnexpectedCloseParen,
    TrailingTokens(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnexpectedEOF => write!(f, "unexpected EOF while reading"),
            Error::UnexpectedCloseParen => write!(f, "unexpected )"),
            Error::TrailingTokens(n) => {
                write!(f, "{} unexpected token(s) after a complete expression", n)
            }
        }
    }
}

pub type Result<T = Value> = std::result::Result<T, Error>;

/// Read one expression from the front of `tokens`, returning it along with the
/// tokens left over.
pub fn read<'t, 'a>(tokens: &'t [Token<'a>]) -> Result<(Value, &'t [Token<'a>])> {
    match tokens.split_first() {
        None => Err(Error::UnexpectedEOF),
        Some((&token, rest)) if is_open(token) => read_list(rest),
        Some((&token, _)) if is_close(token) => Err(Error::UnexpectedCloseParen),
        Some((&token, rest)) => Ok((atoms::classify(token), rest)),
    }
}

// Enclosing lists wait on `open` rather than on the call stack.
fn read_list<'t, 'a>(mut tokens: &'t [Token<'a>]) -> Result<(Value, &'t [Token<'a>])> {
    let mut open: Vec<Vec<Value>> = Vec::new();
    let mut elements = Vec::new();
    loop {
        let (&token, rest) = tokens.split_first().ok_or(Error::UnexpectedEOF)?;
        tokens = rest;
        if is_open(token) {
            open.push(std::mem::take(&mut elements));
        } else if is_close(token) {
            let finished = Value::wrap_list(std::mem::take(&mut elements));
            match open.pop() {
                Some(enclosing) => {
                    elements = enclosing;
                    elements.push(finished);
                }
                None => return Ok((finished, tokens)),
            }
        } else {
            elements.push(atoms::classify(token));
        }
    }
}

pub fn read_str(input: &str) -> Result {
    let tokens = tokenize(input);
    let (value, rest) = read(&tokens)?;
    match rest.len() {
        0 => Ok(value),
        n => Err(Error::TrailingTokens(n)),
    }
}
