use regex::Regex;

pub type Token<'a> = &'a str;

pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    lazy_static! {
        static ref TOKEN_RE: Regex = Regex::new(
            r#"(?x)               # ignore whitespace in this pattern & allow comments
                [()]              # a single parenthesis
                |[^\s()]+         # or a run of anything but whitespace and parentheses
            "#
        )
        .unwrap();
    }
    TOKEN_RE.find_iter(input).map(|m| m.as_str()).collect()
}

pub(crate) fn is_open(token: Token) -> bool {
    token == "("
}

pub(crate) fn is_close(token: Token) -> bool {
    token == ")"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_simple_application() {
        assert_eq!(tokenize("(+ 1 2)"), vec!["(", "+", "1", "2", ")"]);
    }

    #[test]
    fn parentheses_need_no_surrounding_space() {
        assert_eq!(
            tokenize("((lambda(x)x)3)"),
            vec!["(", "(", "lambda", "(", "x", ")", "x", ")", "3", ")"]
        );
    }

    #[test]
    fn whitespace_is_insignificant() {
        assert_eq!(tokenize("  \t(<=   1\n2 ) "), vec!["(", "<=", "1", "2", ")"]);
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn atoms_keep_punctuation() {
        assert_eq!(tokenize("set! x1 -3.5e2"), vec!["set!", "x1", "-3.5e2"]);
    }
}
