extern crate derive_more;
use crate::environment::Environment;
use crate::evaluator;
use derive_more::Deref;
use std::fmt;
use std::fmt::Formatter;
use std::rc::Rc;

#[derive(Deref, Debug, PartialEq)]
pub struct List(pub Vec<Value>);

pub type Int = i64;

#[derive(Deref, Debug, PartialEq, Eq, Hash, Clone)]
pub struct Symbol(pub String);

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol(name.into())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Arity(usize);

#[derive(Debug, PartialEq)]
pub struct BadArgCount {
    pub name: &'static str,
    pub expected: Arity,
    pub got: usize,
}

impl fmt::Display for BadArgCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "When evaluating {} expected {} arguments, but received {} arguments",
            self.name, self.expected, self.got
        )
    }
}

impl Arity {
    pub(crate) const fn exactly(n: usize) -> Self {
        Self(n)
    }

    pub(crate) fn validate_for(&self, n: usize, name: &'static str) -> Result<(), BadArgCount> {
        match self.0 == n {
            true => Ok(()),
            false => Err(BadArgCount {
                name,
                expected: self.clone(),
                got: n,
            }),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "exactly {}", self.0)
    }
}

pub struct PrimitiveFn {
    pub name: &'static str,
    pub fn_ptr: fn(&[Value]) -> evaluator::Result,
}

impl fmt::Debug for PrimitiveFn {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "primitive function #<{}>", self.name)
    }
}

pub struct Closure {
    pub parameters: Vec<Symbol>,
    pub body: Value,
    pub parent: Rc<Environment>,
}

impl fmt::Debug for Closure {
    // Not derived because we want to skip the parent: the parent may well contain this Closure!
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Closure{{parameters: {:?}, body: {:?}}}",
            self.parameters, self.body
        )
    }
}

#[derive(Debug, Clone)]
pub enum Procedure {
    Primitive(&'static PrimitiveFn),
    Closure(Rc<Closure>),
}

impl PartialEq for Procedure {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Procedure::Primitive(x), Procedure::Primitive(y)) => x.name == y.name,
            (Procedure::Closure(x), Procedure::Closure(y)) => Rc::ptr_eq(x, y),
            (_, _) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Integer(Int),
    Float(f64),
    Symbol(Symbol),
    List(Rc<List>),
    Procedure(Procedure),
}

#[derive(Debug, PartialEq)]
pub enum TypeMismatch {
    NotAnInt,
    NotABool,
    NotAList,
    NotASymbol,
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let expected = match self {
            TypeMismatch::NotAnInt => "an integer",
            TypeMismatch::NotABool => "a boolean",
            TypeMismatch::NotAList => "a list",
            TypeMismatch::NotASymbol => "a symbol",
        };
        write!(f, "expected {}", expected)
    }
}

impl Value {
    pub(crate) fn as_int(&self) -> Result<Int, TypeMismatch> {
        match self {
            Value::Integer(x) => Ok(*x),
            _ => Err(TypeMismatch::NotAnInt),
        }
    }

    pub(crate) fn as_bool(&self) -> Result<bool, TypeMismatch> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(TypeMismatch::NotABool),
        }
    }

    pub(crate) fn as_list(&self) -> Result<&List, TypeMismatch> {
        match self {
            Value::List(x) => Ok(x),
            _ => Err(TypeMismatch::NotAList),
        }
    }

    pub(crate) fn as_symbol(&self) -> Result<&Symbol, TypeMismatch> {
        match self {
            Value::Symbol(s) => Ok(s),
            _ => Err(TypeMismatch::NotASymbol),
        }
    }
}

impl Value {
    pub fn new_list() -> Self {
        Self::List(Rc::new(List(Vec::new())))
    }
    pub fn wrap_list(elements: Vec<Value>) -> Self {
        Self::List(Rc::new(List(elements)))
    }
    pub fn new_symbol(name: &str) -> Self {
        Self::Symbol(Symbol(name.into()))
    }
    pub(crate) fn new_closure(parameters: Vec<Symbol>, body: Value, parent: Rc<Environment>) -> Self {
        Self::Procedure(Procedure::Closure(Rc::new(Closure {
            parameters,
            body,
            parent,
        })))
    }
}
