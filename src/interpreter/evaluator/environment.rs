use std::collections::HashMap;

use crate::{ast::Identifier, interpreter::evaluator::core::Value};

/// Current state of one declared variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    /// The value the variable holds right now.
    pub value:   Value,
    /// Whether the program has written to the variable, either through an
    /// initializer, an assignment or a `READ`.
    pub written: bool,
}

/// The mutable mapping from declared names to values for one program run.
///
/// The environment is created from the declaration list before the body runs
/// and is owned exclusively by the evaluator for the whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: HashMap<String, Binding>,
    /// Names in first-declaration order, for stable diagnostics.
    order:    Vec<String>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment holding exactly the declared names.
    ///
    /// Uninitialized names start at zero. A name declared twice keeps its
    /// position from the first declaration and the value from the last.
    ///
    /// # Example
    /// ```
    /// use meeny::{ast::Identifier, interpreter::evaluator::environment::Environment};
    ///
    /// let decls = vec![Identifier { name: "a".into(), initial: None, line: 1 },
    ///                  Identifier { name: "b".into(), initial: Some(4), line: 1 }];
    /// let env = Environment::from_declarations(&decls);
    ///
    /// assert_eq!(env.len(), 2);
    /// assert_eq!(env.get("a"), Some(0));
    /// assert_eq!(env.get("b"), Some(4));
    /// ```
    #[must_use]
    pub fn from_declarations(decls: &[Identifier]) -> Self {
        let mut env = Self::new();
        for decl in decls {
            if env.declare(&decl.name, decl.initial) {
                tracing::warn!(name = %decl.name, line = decl.line, "identifier declared twice");
            }
        }
        env
    }

    /// Binds `name` to its initial value. Returns `true` if the name was
    /// already declared; the new binding replaces the old one.
    pub fn declare(&mut self, name: &str, initial: Option<Value>) -> bool {
        let binding = Binding { value:   initial.unwrap_or(0),
                                written: initial.is_some(), };
        let previous = self.bindings.insert(name.to_string(), binding);
        if previous.is_none() {
            self.order.push(name.to_string());
        }
        previous.is_some()
    }

    /// Current value of `name`, or `None` if it was never declared.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).map(|b| b.value)
    }

    /// Overwrites the value of an already-declared name. Returns `false`
    /// (and changes nothing) if the name is unknown.
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        match self.bindings.get_mut(name) {
            Some(binding) => {
                binding.value = value;
                binding.written = true;
                true
            },
            None => false,
        }
    }

    /// Returns `true` if `name` is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of distinct declared names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Declared names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Names that were declared but never written, in declaration order.
    pub fn unused(&self) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .filter(|name| self.bindings.get(*name).is_some_and(|b| !b.written))
            .map(String::as_str)
    }
}
