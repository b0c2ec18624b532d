// Classification of a single non-parenthesis token into a scalar value.
//
// The order matters: booleans, then integers, then floats, then symbols. A token
// only counts as a number if the numeric parse consumes all of it, so `x1` and
// `1+` stay symbols.

use crate::tokens::Token;
use crate::types::{Int, Value};

pub fn classify(token: Token) -> Value {
    if let Some(b) = parse_bool(token) {
        return Value::Bool(b);
    }
    if let Some(i) = parse_integer(token) {
        return Value::Integer(i);
    }
    if let Some(x) = parse_float(token) {
        return Value::Float(x);
    }
    Value::new_symbol(token)
}

fn parse_bool(token: Token) -> Option<bool> {
    match token {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn parse_integer(token: Token) -> Option<Int> {
    let (negative, unsigned) = match token.as_bytes().first()? {
        b'-' => (true, &token[1..]),
        b'+' => (false, &token[1..]),
        _ => (false, token),
    };
    let (radix, digits, prefixed) = split_radix(unsigned);
    let digits = strip_separators(digits, prefixed)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    let signed = match negative {
        true => format!("-{}", digits),
        false => digits,
    };
    Int::from_str_radix(&signed, radix).ok()
}

fn split_radix(unsigned: &str) -> (u32, &str, bool) {
    match unsigned.as_bytes() {
        [b'0', b'x', ..] | [b'0', b'X', ..] => (16, &unsigned[2..], true),
        [b'0', b'o', ..] | [b'0', b'O', ..] => (8, &unsigned[2..], true),
        [b'0', b'b', ..] | [b'0', b'B', ..] => (2, &unsigned[2..], true),
        [b'0', _, ..] => (8, &unsigned[1..], true),
        _ => (10, unsigned, false),
    }
}

// `_` may separate digits, or follow a base prefix, but never trail or repeat.
fn strip_separators(digits: &str, prefixed: bool) -> Option<String> {
    if digits.ends_with('_') || digits.contains("__") || (!prefixed && digits.starts_with('_')) {
        return None;
    }
    Some(digits.replace('_', ""))
}

// `inf` and `nan` parse as floats in Rust; requiring a digit keeps them symbols.
// Out-of-range literals such as `1e400` are not numbers either.
fn parse_float(token: Token) -> Option<f64> {
    if !token.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok().filter(|x: &f64| x.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(name: &str) -> Value {
        Value::new_symbol(name)
    }

    #[test]
    fn booleans_are_exact() {
        assert_eq!(classify("true"), Value::Bool(true));
        assert_eq!(classify("false"), Value::Bool(false));
        assert_eq!(classify("True"), symbol("True"));
        assert_eq!(classify("t"), symbol("t"));
    }

    #[test]
    fn decimal_integers() {
        assert_eq!(classify("42"), Value::Integer(42));
        assert_eq!(classify("-5"), Value::Integer(-5));
        assert_eq!(classify("+7"), Value::Integer(7));
        assert_eq!(classify("0"), Value::Integer(0));
        assert_eq!(classify("1_000"), Value::Integer(1000));
        assert_eq!(classify("-9223372036854775808"), Value::Integer(i64::MIN));
    }

    #[test]
    fn prefixed_integers() {
        assert_eq!(classify("0x1F"), Value::Integer(31));
        assert_eq!(classify("-0xff"), Value::Integer(-255));
        assert_eq!(classify("0o17"), Value::Integer(15));
        assert_eq!(classify("017"), Value::Integer(15));
        assert_eq!(classify("0b101"), Value::Integer(5));
        assert_eq!(classify("0x_ff"), Value::Integer(255));
    }

    #[test]
    fn integers_out_of_range_fall_through_to_float() {
        assert_eq!(
            classify("9223372036854775808"),
            Value::Float(9223372036854775808.0)
        );
    }

    #[test]
    fn floats() {
        assert_eq!(classify("2.5"), Value::Float(2.5));
        assert_eq!(classify("-0.25"), Value::Float(-0.25));
        assert_eq!(classify("1e3"), Value::Float(1000.0));
        assert_eq!(classify(".5"), Value::Float(0.5));
        assert_eq!(classify("09"), Value::Float(9.0));
    }

    #[test]
    fn everything_else_is_a_symbol() {
        for name in &[
            "+", "-", "*", "<=", "x1", "1+", "set!", "inf", "nan", "NaN", "0x", "_", "1__0", "--1",
            "1e400", "-1e400",
        ] {
            assert_eq!(classify(name), symbol(name), "token {:?}", name);
        }
    }
}
