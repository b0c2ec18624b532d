use crate::environment::Environment;
use crate::{evaluator, printer, reader, Value};
use std::fmt;
use std::rc::Rc;

pub type Result<T = Value> = std::result::Result<T, Error>;
#[derive(Debug, PartialEq)]
pub enum Error {
    Read(reader::Error),
    Eval(evaluator::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Read(e) => write!(f, "read error: {}", e),
            Error::Eval(e) => write!(f, "eval error: {}", e),
        }
    }
}

pub fn read(line: &str) -> Result {
    reader::read_str(line).map_err(Error::Read)
}

pub fn eval(obj: &Value, env: &Rc<Environment>) -> Result {
    evaluator::eval(obj, env).map_err(Error::Eval)
}

pub fn rep(line: &str, env: &Rc<Environment>) -> Result<String> {
    let result = read(line).and_then(|obj| eval(&obj, env));
    log::debug!("rep {:?} produced {:?}", line, result);
    result.map(|obj| printer::pr_str(&obj))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::make_root_environment;

    #[test]
    fn session_shares_one_environment() {
        let env = make_root_environment();
        assert_eq!(rep("(define sq (lambda (x) (* x x)))", &env), Ok("()".into()));
        assert_eq!(rep("(sq 12)", &env), Ok("144".into()));
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let env = make_root_environment();
        rep("(define x 1)", &env).unwrap();
        assert_eq!(
            rep("(+ 1", &env),
            Err(Error::Read(reader::Error::UnexpectedEOF))
        );
        assert!(matches!(rep("(x)", &env), Err(Error::Eval(_))));
        assert_eq!(rep("x", &env), Ok("1".into()));
    }

    #[test]
    fn error_messages() {
        let env = make_root_environment();
        assert_eq!(
            rep(")", &env).unwrap_err().to_string(),
            "read error: unexpected )"
        );
        assert_eq!(
            rep("y", &env).unwrap_err().to_string(),
            "eval error: 'y' not found"
        );
        assert_eq!(
            rep("(if 1 2 3)", &env).unwrap_err().to_string(),
            "eval error: type mismatch: expected a boolean"
        );
    }
}
