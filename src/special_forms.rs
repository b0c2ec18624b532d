use crate::environment::Environment;
use crate::evaluator::{eval, Error, Result};
use crate::types::{Arity, Symbol, Value};
use std::fmt;
use std::rc::Rc;

pub fn apply_quote(args: &[Value]) -> Result {
    Arity::exactly(1)
        .validate_for(args.len(), "quote")
        .map_err(Error::BadArgCount)?;
    Ok(args[0].clone())
}

pub fn apply_if(args: &[Value], env: &Rc<Environment>) -> Result {
    Arity::exactly(3)
        .validate_for(args.len(), "if")
        .map_err(Error::BadArgCount)?;
    let condition = eval(&args[0], env)?.as_bool()?;
    match condition {
        true => eval(&args[1], env),
        false => eval(&args[2], env),
    }
}

#[derive(Debug, PartialEq)]
pub enum DefError {
    KeyNotASymbol(Value),
}

impl fmt::Display for DefError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefError::KeyNotASymbol(key) => write!(f, "cannot bind to non-symbol {}", key),
        }
    }
}

fn binding_target(key: &Value) -> std::result::Result<&Symbol, DefError> {
    key.as_symbol()
        .map_err(|_| DefError::KeyNotASymbol(key.clone()))
}

pub fn apply_def(args: &[Value], env: &Rc<Environment>) -> Result {
    Arity::exactly(2)
        .validate_for(args.len(), "define")
        .map_err(Error::BadArgCount)?;
    let key = binding_target(&args[0]).map_err(Error::Def)?;
    let value = eval(&args[1], env)?;
    env.define(key.clone(), value);
    Ok(Value::new_list())
}

pub fn apply_set(args: &[Value], env: &Rc<Environment>) -> Result {
    Arity::exactly(2)
        .validate_for(args.len(), "set!")
        .map_err(Error::BadArgCount)?;
    let key = binding_target(&args[0]).map_err(Error::Set)?;
    let value = eval(&args[1], env)?;
    env.set(key, value)?;
    Ok(Value::new_list())
}

#[derive(Debug, PartialEq)]
pub enum FnError {
    ParametersNotGivenAsList(Value),
    ParameterNotASymbol(Value),
}

impl fmt::Display for FnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FnError::ParametersNotGivenAsList(obj) => {
                write!(f, "parameters must be a list, not {}", obj)
            }
            FnError::ParameterNotASymbol(obj) => write!(f, "parameter {} is not a symbol", obj),
        }
    }
}

pub fn apply_fn(args: &[Value], env: &Rc<Environment>) -> Result {
    // Exactly two operands: a list of parameter symbols and a single body
    // expression. Longer bodies need wrapping in `begin`.
    Arity::exactly(2)
        .validate_for(args.len(), "lambda")
        .map_err(Error::BadArgCount)?;
    let (parameters, body) = (&args[0], &args[1]);
    let parameters = parameters
        .as_list()
        .map_err(|_| FnError::ParametersNotGivenAsList(parameters.clone()))
        .map_err(Error::Fn)?;
    let extract_symbol = |obj: &Value| match obj {
        Value::Symbol(s) => Ok(s.clone()),
        _ => Err(FnError::ParameterNotASymbol(obj.clone())),
    };
    let parameters: std::result::Result<Vec<Symbol>, _> =
        parameters.iter().map(extract_symbol).collect();

    let parameters = parameters.map_err(Error::Fn)?;
    Ok(Value::new_closure(parameters, body.clone(), env.clone()))
}

pub fn apply_begin(args: &[Value], env: &Rc<Environment>) -> Result {
    let mut result = Value::new_list();
    for obj in args {
        result = eval(obj, env)?;
    }
    Ok(result)
}
