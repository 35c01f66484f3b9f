use std::collections::HashMap;

/// Stores the variable bindings consulted during evaluation.
///
/// ## Usage
///
/// An `Environment` is created once by the caller and mutated with
/// [`Environment::set`] and [`Environment::clear`] between evaluations. The
/// evaluator only ever borrows it immutably, so bindings cannot change while a
/// tree is being evaluated, and independent environments never leak bindings
/// into each other.
///
/// Names and values are unconstrained: any string is a valid name and NaN or
/// infinities are valid values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, overwriting any previous binding.
    ///
    /// # Example
    /// ```
    /// use arithtree::interpreter::environment::Environment;
    ///
    /// let mut environment = Environment::new();
    ///
    /// environment.set("x", 3.0);
    /// environment.set("x", 9.0);
    /// assert_eq!(environment.get("x"), Some(9.0));
    /// ```
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.variables.insert(name.into(), value);
    }

    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Removes a single binding, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.variables.remove(name)
    }

    /// Removes every binding, returning the environment to its initial state.
    pub fn clear(&mut self) {
        self.variables.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all bindings in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<K: Into<String>> Extend<(K, f64)> for Environment {
    fn extend<I: IntoIterator<Item = (K, f64)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut environment = Self::new();
        environment.extend(iter);
        environment
    }
}
