//! Scoped registry guarding primitive variable names against reuse.

use crate::dual::dual::Dual;
use crate::error::AdError;
use indexmap::set::IndexSet;

/// An opt-in differentiation scope that rejects duplicate primitive names.
///
/// Constructing primitives directly with [Dual::new] performs no collision
/// checking; two primitives built with the same name are treated as the same
/// variable wherever they meet. An `Episode` tracks every name declared
/// through it and errors on reuse, which surfaces accidental aliasing early.
///
/// # Examples
///
/// ```rust
/// # use automin::dual::Episode;
/// let mut ep = Episode::new();
/// let x = ep.var("x", 2.0).unwrap();
/// assert!(ep.var("x", 3.0).is_err());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Episode {
    names: IndexSet<String>,
}

impl Episode {
    /// Create an empty episode with no declared names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a fresh primitive variable within this episode.
    ///
    /// # Errors
    ///
    /// If `name` was already declared through this episode.
    pub fn var(&mut self, name: &str, value: f64) -> Result<Dual, AdError> {
        if !self.names.insert(name.to_string()) {
            return Err(AdError::NameCollision(name.to_string()));
        }
        Ok(Dual::new(value, vec![name.to_string()]))
    }

    /// The names declared so far, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dual::Gradient1;

    #[test]
    fn var_declares_primitive() {
        let mut ep = Episode::new();
        let x = ep.var("x", 2.5).unwrap();
        assert_eq!(x.real(), 2.5);
        assert_eq!(x.dual(), &ndarray::Array1::from_vec(vec![1.0]));
    }

    #[test]
    fn var_rejects_collision() {
        let mut ep = Episode::new();
        let _ = ep.var("x", 2.5).unwrap();
        let result = ep.var("x", 3.0);
        assert_eq!(result, Err(AdError::NameCollision("x".to_string())));
    }

    #[test]
    fn names_in_order() {
        let mut ep = Episode::new();
        let _ = ep.var("b", 1.0).unwrap();
        let _ = ep.var("a", 2.0).unwrap();
        assert_eq!(ep.names().collect::<Vec<_>>(), vec!["b", "a"]);
    }
}
