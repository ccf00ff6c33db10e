use std::{cell::RefCell, collections::HashMap, rc::Rc};
use crate::Ident;
use super::value::Value;

/// A scope: a local name-to-value table plus a shared link to the scope it
/// nests within. Lookups walk toward the root; writes only ever touch the
/// local table. Parents are shared (a closure and any number of child
/// frames may hang off the same scope), so scopes always live behind `Rc`
/// and mutate their table through `RefCell`.
pub struct Env {
    parent: Option<Rc<Env>>,
    bindings: RefCell<HashMap<Ident, Value>>,
}

impl Env {
    pub fn new(parent: impl Into<Option<Rc<Env>>>) -> Rc<Self> {
        Rc::new(Self {
            parent: parent.into(),
            bindings: RefCell::new(HashMap::new()),
        })
    }

    pub fn parent(&self) -> Option<&Rc<Env>> {
        self.parent.as_ref()
    }

    /// Resolve `name` here or in any enclosing scope. A miss across the
    /// whole chain is `None`, not an error.
    pub fn get(&self, name: Ident) -> Option<Value> {
        let local = self.bindings.borrow().get(&name).cloned();
        local.or_else(|| self.parent.as_ref().and_then(|parent| parent.get(name)))
    }

    /// Insert or overwrite a binding in this scope only. Enclosing scopes
    /// are never written through a child.
    pub fn add(&self, name: Ident, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use internment::Intern;
    use pretty_assertions::assert_eq;

    fn ident(name: &str) -> Ident {
        Intern::new(name.into())
    }

    #[test]
    fn add_then_get() {
        let env = Env::new(None);
        env.add(ident("x"), Value::Num(3.0));
        assert_eq!(env.get(ident("x")), Some(Value::Num(3.0)));
        assert_eq!(env.get(ident("y")), None);
    }

    #[test]
    fn add_overwrites_local() {
        let env = Env::new(None);
        env.add(ident("x"), Value::Num(3.0));
        env.add(ident("x"), Value::Num(4.0));
        assert_eq!(env.get(ident("x")), Some(Value::Num(4.0)));
    }

    #[test]
    fn miss_delegates_to_parent() {
        let parent = Env::new(None);
        parent.add(ident("x"), Value::Num(1.0));
        let child = Env::new(parent.clone());
        assert_eq!(child.get(ident("x")), Some(Value::Num(1.0)));
    }

    #[test]
    fn siblings_do_not_share_tables() {
        let parent = Env::new(None);
        let a = Env::new(parent.clone());
        let b = Env::new(parent);
        a.add(ident("x"), Value::Num(1.0));
        assert_eq!(b.get(ident("x")), None);
    }

    #[test]
    fn shadowing_leaves_parent_untouched() {
        let parent = Env::new(None);
        parent.add(ident("x"), Value::Num(1.0));
        let child = Env::new(parent.clone());
        child.add(ident("x"), Value::Num(2.0));
        assert_eq!(child.get(ident("x")), Some(Value::Num(2.0)));
        assert_eq!(parent.get(ident("x")), Some(Value::Num(1.0)));
    }

    #[test]
    fn parent_link_is_shared_not_copied() {
        let parent = Env::new(None);
        let child = Env::new(parent.clone());
        // Bindings added to the parent after the child exists are visible.
        parent.add(ident("late"), Value::Num(9.0));
        assert_eq!(child.get(ident("late")), Some(Value::Num(9.0)));
        assert!(child.parent().is_some());
    }
}
