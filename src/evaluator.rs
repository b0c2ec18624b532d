use crate::environment::{Environment, UnboundVariable};
use crate::special_forms;
use crate::types::{BadArgCount, Closure, PrimitiveFn, Procedure, TypeMismatch, Value};
use itertools::Itertools;

use std::fmt;
use std::rc::Rc;

pub type Result<T = Value> = std::result::Result<T, Error>;
#[derive(Debug, PartialEq)]
pub enum Error {
    UnboundVariable(UnboundVariable),
    TypeMismatch(TypeMismatch),
    NotCallable(Value),
    BadArgCount(BadArgCount),
    Def(special_forms::DefError),
    Set(special_forms::DefError),
    Fn(special_forms::FnError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnboundVariable(e) => write!(f, "{}", e),
            Error::TypeMismatch(e) => write!(f, "type mismatch: {}", e),
            Error::NotCallable(obj) => write!(f, "{} is not callable", obj),
            Error::BadArgCount(e) => write!(f, "{}", e),
            Error::Def(e) => write!(f, "define: {}", e),
            Error::Set(e) => write!(f, "set!: {}", e),
            Error::Fn(e) => write!(f, "lambda: {}", e),
        }
    }
}

impl From<TypeMismatch> for Error {
    fn from(t: TypeMismatch) -> Self {
        Self::TypeMismatch(t)
    }
}

impl From<UnboundVariable> for Error {
    fn from(e: UnboundVariable) -> Self {
        Self::UnboundVariable(e)
    }
}

pub fn eval(ast: &Value, env: &Rc<Environment>) -> Result {
    log::trace!("eval {}", ast);
    match ast {
        Value::Symbol(s) => Ok(env.lookup(s)?),
        Value::Bool(_) | Value::Integer(_) | Value::Float(_) | Value::Procedure(_) => {
            Ok(ast.clone())
        }
        Value::List(list) => match list.split_first() {
            None => Ok(ast.clone()),
            Some((head, args)) => eval_form(head, args, env),
        },
    }
}

fn eval_form(head: &Value, args: &[Value], env: &Rc<Environment>) -> Result {
    if let Value::Symbol(name) = head {
        match name.as_str() {
            "quote" => return special_forms::apply_quote(args),
            "if" => return special_forms::apply_if(args, env),
            "set!" => return special_forms::apply_set(args, env),
            "define" | "def" => {
                let result = special_forms::apply_def(args, env);
                if result.is_ok() {
                    log::debug!("define {}", args[0]);
                }
                return result;
            }
            "lambda" | "fn" => return special_forms::apply_fn(args, env),
            "begin" => return special_forms::apply_begin(args, env),
            // Any other initial symbol will be interpreted as a function call and
            // handled below
            _ => (),
        };
    };
    let callable = eval(head, env)?;
    let args = evaluate_sequence_elementwise(args, env)?;
    apply(&callable, &args)
}

pub fn evaluate_sequence_elementwise(seq: &[Value], env: &Rc<Environment>) -> Result<Vec<Value>> {
    seq.iter().map(|obj| eval(obj, env)).collect()
}

pub fn apply(callable: &Value, args: &[Value]) -> Result {
    match callable {
        Value::Procedure(Procedure::Primitive(f)) => call_primitive(f, args),
        Value::Procedure(Procedure::Closure(f)) => call_closure(f, args),
        Value::Bool(_) | Value::Integer(_) | Value::Float(_) | Value::Symbol(_) | Value::List(_) => {
            Err(Error::NotCallable(callable.clone()))
        }
    }
}

pub(crate) fn pretty_print_args(args: &[Value]) -> String {
    match args.len() {
        0 => "no args".into(),
        1 => args[0].to_string(),
        _ => format!("\n\t{}", args.iter().join("\n\t")),
    }
}

fn call_primitive(func: &PrimitiveFn, args: &[Value]) -> Result {
    log::trace!("Call {} with {}", func.name, pretty_print_args(args));
    let result = (func.fn_ptr)(args);
    match &result {
        Ok(val) => log::trace!("Call to {} resulted in {}", func.name, val),
        Err(e) => log::trace!("Call to {} failed: {}", func.name, e),
    }
    result
}

fn call_closure(func: &Closure, args: &[Value]) -> Result {
    log::trace!("Call {:?} with {}", func, pretty_print_args(args));
    let env = Environment::call_frame(&func.parent, &func.parameters, args);
    let result = eval(&func.body, &env);
    Environment::release(env);
    result
}
