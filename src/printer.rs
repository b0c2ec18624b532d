use crate::types::{Procedure, Value};
use itertools::Itertools;
use std::fmt;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            // Debug formatting keeps a fractional part, so `3.0` never prints as `3`.
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Symbol(name) => write!(f, "{}", name),
            Value::List(elements) => write!(f, "({})", elements.iter().join(" ")),
            Value::Procedure(Procedure::Primitive(func)) => write!(f, "#<builtin {}>", func.name),
            Value::Procedure(Procedure::Closure(closure)) => {
                write!(f, "#<closure ({})>", closure.parameters.iter().join(" "))
            }
        }
    }
}

pub fn pr_str(object: &Value) -> String {
    object.to_string()
}
