use crate::core;
use crate::types::{Procedure, Symbol, Value};
use itertools::Itertools;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, PartialEq)]
pub struct UnboundVariable(pub Symbol);

impl fmt::Display for UnboundVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' not found", self.0)
    }
}

pub struct Environment {
    bindings: RefCell<HashMap<Symbol, Value>>,
    parent: Option<Rc<Environment>>,
}

impl Environment {
    pub fn empty() -> Self {
        Self {
            bindings: RefCell::new(HashMap::new()),
            parent: None,
        }
    }

    pub fn spawn_from(parent: &Rc<Environment>) -> Rc<Self> {
        Rc::new(Self {
            bindings: RefCell::new(HashMap::new()),
            parent: Some(parent.clone()),
        })
    }

    /// Bind `parameters` to `args` positionally in a new child of `parent`.
    /// Surplus parameters stay unbound in the new frame; surplus args are ignored.
    pub fn call_frame(parent: &Rc<Environment>, parameters: &[Symbol], args: &[Value]) -> Rc<Self> {
        let frame = Self::spawn_from(parent);
        for (key, value) in parameters.iter().zip(args) {
            frame.define(key.clone(), value.clone());
        }
        frame
    }

    pub fn find(&self, key: &Symbol) -> Option<&Environment> {
        if self.bindings.borrow().contains_key(key) {
            return Some(self);
        }
        self.parent.as_deref()?.find(key)
    }

    // This frame only; use `find` or `lookup` to search the chain.
    pub fn get(&self, key: &Symbol) -> Option<Value> {
        self.bindings.borrow().get(key).cloned()
    }

    pub fn lookup(&self, key: &Symbol) -> Result<Value, UnboundVariable> {
        self.find(key)
            .and_then(|frame| frame.get(key))
            .ok_or_else(|| UnboundVariable(key.clone()))
    }

    pub fn define(&self, key: Symbol, value: Value) {
        self.bindings.borrow_mut().insert(key, value);
    }

    pub fn set(&self, key: &Symbol, value: Value) -> Result<(), UnboundVariable> {
        let frame = self.find(key).ok_or_else(|| UnboundVariable(key.clone()))?;
        frame.bindings.borrow_mut().insert(key.clone(), value);
        Ok(())
    }

    // Clears `frame` if the only other owners are closures bound in it that
    // capture it and are referenced nowhere else; dropping those breaks the cycle.
    pub(crate) fn release(frame: Rc<Environment>) {
        let self_held = frame
            .bindings
            .borrow()
            .values()
            .filter(|value| match value {
                Value::Procedure(Procedure::Closure(c)) => {
                    Rc::strong_count(c) == 1 && Rc::ptr_eq(&c.parent, &frame)
                }
                _ => false,
            })
            .count();
        if Rc::strong_count(&frame) == 1 + self_held {
            let bindings = std::mem::take(&mut *frame.bindings.borrow_mut());
            drop(bindings);
        }
    }

    pub fn depth(&self) -> usize {
        match &self.parent {
            None => 0,
            Some(parent) => 1 + parent.depth(),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        let env = Self::empty();
        for (&name, &func) in core::CORE.iter() {
            env.define(name.into(), Value::Procedure(Procedure::Primitive(func)));
        }
        env
    }
}

pub fn make_root_environment() -> Rc<Environment> {
    Rc::new(Environment::default())
}

impl fmt::Debug for Environment {
    // Values may be closures capturing this frame, so only print the keys.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Environment{{depth: {}, keys: [{}]}}",
            self.depth(),
            self.bindings.borrow().keys().map(|k| k.as_str()).sorted().join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(name: &str) -> Symbol {
        Symbol::from(name)
    }

    #[test]
    fn root_has_builtins() {
        let env = make_root_environment();
        for name in &["+", "-", "*", "<="] {
            assert!(env.find(&sym(name)).is_some(), "missing {}", name);
        }
        assert_eq!(env.depth(), 0);
    }

    #[test]
    fn find_walks_the_parent_chain() {
        let root = Rc::new(Environment::empty());
        root.define(sym("x"), Value::Integer(1));
        let child = Environment::spawn_from(&root);
        let grandchild = Environment::spawn_from(&child);

        let frame = grandchild.find(&sym("x")).unwrap();
        assert!(std::ptr::eq(frame, &*root));
        assert_eq!(frame.get(&sym("x")), Some(Value::Integer(1)));
        assert!(grandchild.find(&sym("y")).is_none());
        assert_eq!(grandchild.depth(), 2);
    }

    #[test]
    fn get_is_local_only() {
        let root = Rc::new(Environment::empty());
        root.define(sym("x"), Value::Integer(1));
        let child = Environment::spawn_from(&root);
        assert_eq!(child.get(&sym("x")), None);
        assert_eq!(child.lookup(&sym("x")), Ok(Value::Integer(1)));
    }

    #[test]
    fn define_shadows_without_touching_parent() {
        let root = Rc::new(Environment::empty());
        root.define(sym("x"), Value::Integer(1));
        let child = Environment::spawn_from(&root);
        child.define(sym("x"), Value::Integer(2));

        assert_eq!(child.lookup(&sym("x")), Ok(Value::Integer(2)));
        assert_eq!(root.lookup(&sym("x")), Ok(Value::Integer(1)));
    }

    #[test]
    fn set_mutates_the_binding_frame() {
        let root = Rc::new(Environment::empty());
        root.define(sym("x"), Value::Integer(1));
        let child = Environment::spawn_from(&root);

        child.set(&sym("x"), Value::Integer(5)).unwrap();
        assert_eq!(root.get(&sym("x")), Some(Value::Integer(5)));
        assert_eq!(child.get(&sym("x")), None);
    }

    #[test]
    fn set_on_unbound_fails() {
        let env = Rc::new(Environment::empty());
        assert_eq!(
            env.set(&sym("nope"), Value::Integer(0)),
            Err(UnboundVariable(sym("nope")))
        );
        assert!(env.find(&sym("nope")).is_none());
    }

    #[test]
    fn release_breaks_self_capture() {
        let root = Rc::new(Environment::empty());
        let frame = Environment::spawn_from(&root);
        let inner = Value::new_closure(vec![], Value::Integer(1), frame.clone());
        frame.define(sym("g"), inner);
        assert_eq!(Rc::strong_count(&root), 2);

        Environment::release(frame);
        assert_eq!(Rc::strong_count(&root), 1);
    }

    #[test]
    fn release_keeps_frames_that_escape() {
        let root = Rc::new(Environment::empty());
        let frame = Environment::spawn_from(&root);
        frame.define(sym("x"), Value::Integer(7));
        let escaped = Value::new_closure(vec![], Value::Integer(1), frame.clone());
        frame.define(sym("g"), escaped.clone());

        Environment::release(frame);
        match escaped {
            Value::Procedure(Procedure::Closure(c)) => {
                assert_eq!(c.parent.get(&sym("x")), Some(Value::Integer(7)));
            }
            other => panic!("expected a closure, got {:?}", other),
        }
    }

    #[test]
    fn call_frame_zips_positionally() {
        let root = Rc::new(Environment::empty());
        root.define(sym("b"), Value::Integer(99));
        let params = vec![sym("a"), sym("b")];

        let short = Environment::call_frame(&root, &params, &[Value::Integer(1)]);
        assert_eq!(short.get(&sym("a")), Some(Value::Integer(1)));
        assert_eq!(short.get(&sym("b")), None);
        assert_eq!(short.lookup(&sym("b")), Ok(Value::Integer(99)));

        let long = Environment::call_frame(
            &root,
            &params,
            &[Value::Integer(1), Value::Integer(2), Value::Integer(3)],
        );
        assert_eq!(long.get(&sym("b")), Some(Value::Integer(2)));
    }
}
