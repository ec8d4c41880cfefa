use super::object::Value;

use std::collections::HashMap;

/// Global name to value store. Bindings are created and overwritten only by
/// assignment; declarations never touch it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Environment {
    values: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            values: HashMap::new(),
        }
    }

    /// Add or replace a binding.
    pub fn assign(&mut self, name: String, value: Value) {
        self.values.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bindings ordered by name, for display.
    pub fn sorted_bindings(&self) -> Vec<(&str, Value)> {
        let mut bindings: Vec<_> = self
            .values
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        bindings.sort_by(|a, b| a.0.cmp(b.0));
        bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_overwrites() {
        let mut env = Environment::new();
        assert!(env.is_empty());

        env.assign("A".to_owned(), Value::Integer(1));
        env.assign("A".to_owned(), Value::Float(2.5));

        assert_eq!(env.len(), 1);
        assert!(env.contains("A"));
        assert_eq!(env.get("A"), Some(Value::Float(2.5)));
        assert_eq!(env.get("B"), None);
    }

    #[test]
    fn test_sorted_bindings() {
        let mut env = Environment::new();
        env.assign("Z".to_owned(), Value::Integer(26));
        env.assign("A".to_owned(), Value::Integer(1));
        env.assign("M".to_owned(), Value::Float(0.5));

        assert_eq!(
            env.sorted_bindings(),
            vec![
                ("A", Value::Integer(1)),
                ("M", Value::Float(0.5)),
                ("Z", Value::Integer(26)),
            ]
        );
    }
}
