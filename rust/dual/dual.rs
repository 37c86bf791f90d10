pub use crate::dual::dual_ops::numeric_ops::NumberOps;
use crate::error::AdError;
use indexmap::map::IndexMap;
use indexmap::set::IndexSet;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A dual number data type supporting first order derivatives to named variables.
#[derive(Clone, Default, Debug, Deserialize, Serialize)]
pub struct Dual {
    pub(crate) real: f64,
    pub(crate) vars: Arc<IndexSet<String>>,
    pub(crate) dual: Array1<f64>,
}

/// Container for the two core numeric types; [f64] and [Dual].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Number {
    Dual(Dual),
    F64(f64),
}

impl Number {
    /// Get the real component value, whichever variant carries it.
    pub fn value(&self) -> f64 {
        match self {
            Number::Dual(d) => d.real,
            Number::F64(f) => *f,
        }
    }

    /// Return `true` if the variant carries tracked derivatives.
    pub fn is_dual(&self) -> bool {
        matches!(self, Number::Dual(_))
    }
}

/// The state of the `vars` measured between two dual numbers; a LHS relative to a RHS.
#[derive(Clone, Debug, PartialEq)]
pub enum VarsRelationship {
    /// The two structs share the same Arc pointer for their `vars`.
    ArcEquivalent,
    /// The structs have the same `vars` in the same order but not a shared Arc pointer.
    ValueEquivalent,
    /// The `vars` of the compared RHS is contained within those of the LHS.
    Superset,
    /// The `vars` of the calling LHS are contained within those of the RHS.
    Subset,
    /// Both the LHS and RHS have different `vars`.
    Difference,
}

/// Manages the `vars` of the manifold associated with a dual number.
pub trait Vars
where
    Self: Clone,
{
    /// Get a reference to the Arc pointer for the `IndexSet` containing the struct's variables.
    fn vars(&self) -> &Arc<IndexSet<String>>;

    /// Create a new dual number with `vars` aligned with given new Arc pointer.
    ///
    /// This method compares the existing `vars` with the new and reshuffles gradient
    /// values in memory. For large numbers of variables this is one of the least
    /// efficient operations relating different dual numbers and should be avoided
    /// where possible.
    fn to_new_vars(
        &self,
        arc_vars: &Arc<IndexSet<String>>,
        state: Option<VarsRelationship>,
    ) -> Self;

    /// Compare the `vars` on a `Dual` with a given Arc pointer.
    fn vars_cmp(&self, arc_vars: &Arc<IndexSet<String>>) -> VarsRelationship {
        if Arc::ptr_eq(self.vars(), arc_vars) {
            VarsRelationship::ArcEquivalent
        } else if self.vars().len() == arc_vars.len()
            && self.vars().iter().zip(arc_vars.iter()).all(|(a, b)| a == b)
        {
            VarsRelationship::ValueEquivalent
        } else if self.vars().len() >= arc_vars.len()
            && arc_vars.iter().all(|var| self.vars().contains(var))
        {
            VarsRelationship::Superset
        } else if self.vars().len() < arc_vars.len()
            && self.vars().iter().all(|var| arc_vars.contains(var))
        {
            VarsRelationship::Subset
        } else {
            VarsRelationship::Difference
        }
    }

    /// Construct a tuple of 2 `Self` types whose `vars` are linked by an Arc pointer.
    ///
    /// Gradient values contained in fields may be shuffled in memory if necessary
    /// according to the calculated `VarsRelationship`. Do not use `state` directly
    /// unless you have performed a pre-check.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use automin::dual::{Dual, Vars, VarsRelationship};
    /// let x = Dual::new(1.0, vec!["x".to_string()]);
    /// let y = Dual::new(1.5, vec!["y".to_string()]);
    /// let (a, b) = x.to_union_vars(&y, Some(VarsRelationship::Difference));
    /// // a: <Dual: 1.0, (x, y), [1.0, 0.0]>
    /// // b: <Dual: 1.5, (x, y), [0.0, 1.0]>
    /// ```
    fn to_union_vars(&self, other: &Self, state: Option<VarsRelationship>) -> (Self, Self)
    where
        Self: Sized,
    {
        let state_ = state.unwrap_or_else(|| self.vars_cmp(other.vars()));
        match state_ {
            VarsRelationship::ArcEquivalent => (self.clone(), other.clone()),
            VarsRelationship::ValueEquivalent => {
                (self.clone(), other.to_new_vars(self.vars(), Some(state_)))
            }
            VarsRelationship::Superset => (
                self.clone(),
                other.to_new_vars(self.vars(), Some(VarsRelationship::Subset)),
            ),
            VarsRelationship::Subset => {
                (self.to_new_vars(other.vars(), Some(state_)), other.clone())
            }
            VarsRelationship::Difference => self.to_combined_vars(other),
        }
    }

    /// Construct a tuple of 2 `Self` types whose `vars` are linked by the explicit union
    /// of their own variables.
    ///
    /// Gradient values contained in fields will be shuffled in memory.
    fn to_combined_vars(&self, other: &Self) -> (Self, Self)
    where
        Self: Sized,
    {
        let comb_vars = Arc::new(IndexSet::from_iter(
            self.vars().union(other.vars()).cloned(),
        ));
        (
            self.to_new_vars(&comb_vars, Some(VarsRelationship::Difference)),
            other.to_new_vars(&comb_vars, Some(VarsRelationship::Difference)),
        )
    }

    /// Compare if two `Dual` structs share the same `vars` by Arc pointer equivalence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use automin::dual::{Dual, Vars};
    /// let x1 = Dual::new(1.5, vec!["x".to_string()]);
    /// let x2 = Dual::new(2.5, vec!["x".to_string()]);
    /// assert_eq!(x1.ptr_eq(&x2), false); // Vars are the same but not a shared Arc pointer
    /// ```
    fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self.vars(), other.vars())
    }
}

impl Vars for Dual {
    /// Get a reference to the Arc pointer for the `IndexSet` containing the struct's variables.
    fn vars(&self) -> &Arc<IndexSet<String>> {
        &self.vars
    }

    /// Construct a new `Dual` with `vars` set as the given Arc pointer and gradients
    /// shuffled in memory.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use automin::dual::{Dual, Vars};
    /// let x = Dual::new(1.5, vec!["x".to_string()]);
    /// let xy = Dual::new(2.5, vec!["x".to_string(), "y".to_string()]);
    /// let x_y = x.to_new_vars(xy.vars(), None);
    /// // x_y: <Dual: 1.5, (x, y), [1.0, 0.0]>
    /// assert_eq!(x_y, Dual::try_new(1.5, vec!["x".to_string(), "y".to_string()], vec![1.0, 0.0]).unwrap());
    /// ```
    fn to_new_vars(
        &self,
        arc_vars: &Arc<IndexSet<String>>,
        state: Option<VarsRelationship>,
    ) -> Self {
        let match_val = state.unwrap_or_else(|| self.vars_cmp(arc_vars));
        let dual_: Array1<f64> = match match_val {
            VarsRelationship::ArcEquivalent | VarsRelationship::ValueEquivalent => {
                self.dual.clone()
            }
            _ => {
                let lookup_or_zero = |v| match self.vars.get_index_of(v) {
                    Some(idx) => self.dual[idx],
                    None => 0.0_f64,
                };
                Array1::from_vec(arc_vars.iter().map(lookup_or_zero).collect())
            }
        };
        Self {
            real: self.real,
            vars: Arc::clone(arc_vars),
            dual: dual_,
        }
    }
}

/// Provides calculations of first order gradients to all, or a set of provided, `vars`.
pub trait Gradient1: Vars {
    /// Get a reference to the Array containing the first order gradients.
    fn dual(&self) -> &Array1<f64>;

    /// Return a set of first order gradients ordered by the given vector.
    ///
    /// Duplicate `vars` are dropped before parsing. Names the value does not
    /// depend upon yield exactly zero.
    fn gradient1(&self, vars: Vec<String>) -> Array1<f64> {
        let arc_vars = Arc::new(IndexSet::from_iter(vars));
        let state = self.vars_cmp(&arc_vars);
        match state {
            VarsRelationship::ArcEquivalent | VarsRelationship::ValueEquivalent => {
                self.dual().clone()
            }
            _ => {
                let mut dual_ = Array1::<f64>::zeros(arc_vars.len());
                for (i, index) in arc_vars
                    .iter()
                    .map(|x| self.vars().get_index_of(x))
                    .enumerate()
                {
                    if let Some(value) = index {
                        dual_[i] = self.dual()[value]
                    }
                }
                dual_
            }
        }
    }
}

impl Gradient1 for Dual {
    fn dual(&self) -> &Array1<f64> {
        &self.dual
    }
}

impl Dual {
    /// Constructs a new `Dual` representing a primitive (independent) variable.
    ///
    /// - `vars` should be **unique**; duplicates will be removed by the `IndexSet`.
    ///
    /// Gradient values for each of the provided `vars` is set to 1.0_f64.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use automin::dual::Dual;
    /// let x = Dual::new(2.5, vec!["x".to_string()]);
    /// // x: <Dual: 2.5, (x), [1.0]>
    /// ```
    pub fn new(real: f64, vars: Vec<String>) -> Self {
        let unique_vars_ = Arc::new(IndexSet::from_iter(vars));
        Self {
            real,
            dual: Array1::ones(unique_vars_.len()),
            vars: unique_vars_,
        }
    }

    /// Constructs a new `Dual` with an explicit gradient (a derived value).
    ///
    /// - `vars` should be **unique**; duplicates will be removed by the `IndexSet`.
    /// - `dual` can be empty; if so each gradient with respect to each `vars` is set
    ///   to 1.0_f64.
    ///
    /// `try_new` should be used instead of `new` when gradient values other than
    /// 1.0_f64 are to be initialised.
    ///
    /// # Errors
    ///
    /// If the length of `dual` and of `vars` are not the same after parsing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use automin::dual::Dual;
    /// let x = Dual::try_new(2.5, vec!["x".to_string()], vec![4.2]).unwrap();
    /// // x: <Dual: 2.5, (x), [4.2]>
    /// ```
    pub fn try_new(real: f64, vars: Vec<String>, dual: Vec<f64>) -> Result<Self, AdError> {
        let unique_vars_ = Arc::new(IndexSet::from_iter(vars));
        let dual_ = if dual.is_empty() {
            Array1::ones(unique_vars_.len())
        } else {
            Array1::from_vec(dual)
        };
        if unique_vars_.len() != dual_.len() {
            Err(AdError::LengthMismatch {
                vars: unique_vars_.len(),
                dual: dual_.len(),
            })
        } else {
            Ok(Self {
                real,
                vars: unique_vars_,
                dual: dual_,
            })
        }
    }

    /// Construct a new `Dual` cloning the `vars` Arc pointer from another.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use automin::dual::Dual;
    /// let x = Dual::try_new(2.5, vec!["x".to_string(), "y".to_string()], vec![1.0, 0.0]).unwrap();
    /// let y1 = Dual::new_from(&x, 1.5, vec!["y".to_string()]);
    /// ```
    pub fn new_from<T: Vars>(other: &T, real: f64, vars: Vec<String>) -> Self {
        let new = Self::new(real, vars);
        new.to_new_vars(other.vars(), None)
    }

    /// Construct a new `Dual` with explicit gradients, cloning the `vars` Arc pointer
    /// from another.
    pub fn try_new_from<T: Vars>(
        other: &T,
        real: f64,
        vars: Vec<String>,
        dual: Vec<f64>,
    ) -> Result<Self, AdError> {
        let new = Self::try_new(real, vars, dual)?;
        Ok(new.to_new_vars(other.vars(), None))
    }

    /// Get the real component value of the struct.
    pub fn real(&self) -> f64 {
        self.real
    }

    /// Return the full name to partial derivative mapping, in variable order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use automin::dual::Dual;
    /// let x = Dual::new(5.0, vec!["x".to_string()]);
    /// assert_eq!(x.jacobian().get("x"), Some(&1.0));
    /// ```
    pub fn jacobian(&self) -> IndexMap<String, f64> {
        self.vars
            .iter()
            .cloned()
            .zip(self.dual.iter().copied())
            .collect()
    }

    /// Read a single partial derivative by primitive name.
    ///
    /// Names the value does not depend upon return exactly 0.0; this never errors.
    pub fn partial_derivative(&self, name: &str) -> f64 {
        match self.vars.get_index_of(name) {
            Some(idx) => self.dual[idx],
            None => 0.0_f64,
        }
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let x = Dual::new(1.0, vec!["a".to_string(), "a".to_string()]);
        assert_eq!(x.real, 1.0_f64);
        assert_eq!(*x.vars, IndexSet::<String>::from_iter(vec!["a".to_string()]));
        assert_eq!(x.dual, Array1::from_vec(vec![1.0_f64]));
    }

    #[test]
    fn new_with_dual() {
        let x = Dual::try_new(1.0, vec!["a".to_string(), "a".to_string()], vec![2.5]).unwrap();
        assert_eq!(x.real, 1.0_f64);
        assert_eq!(*x.vars, IndexSet::<String>::from_iter(vec!["a".to_string()]));
        assert_eq!(x.dual, Array1::from_vec(vec![2.5_f64]));
    }

    #[test]
    fn new_len_mismatch() {
        let result =
            Dual::try_new(1.0, vec!["a".to_string(), "a".to_string()], vec![1.0, 2.0]).is_err();
        assert!(result);
    }

    #[test]
    fn ptr_eq() {
        let x = Dual::new(1.0, vec!["a".to_string()]);
        let y = Dual::new(1.0, vec!["a".to_string()]);
        assert!(x.ptr_eq(&y) == false);
    }

    #[test]
    fn to_new_vars() {
        let x = Dual::try_new(1.5, vec!["a".to_string(), "b".to_string()], vec![1., 2.]).unwrap();
        let y = Dual::try_new(2.0, vec!["a".to_string(), "c".to_string()], vec![3., 3.]).unwrap();
        let z = x.to_new_vars(&y.vars, None);
        assert_eq!(z.real, 1.5_f64);
        assert!(y.ptr_eq(&z));
        assert_eq!(z.dual, Array1::from_vec(vec![1.0, 0.0]));
        let u = x.to_new_vars(x.vars(), None);
        assert!(u.ptr_eq(&x))
    }

    #[test]
    fn new_from() {
        let x = Dual::try_new(2.0, vec!["a".to_string(), "b".to_string()], vec![3., 3.]).unwrap();
        let y =
            Dual::try_new_from(&x, 2.0, vec!["a".to_string(), "c".to_string()], vec![3., 3.])
                .unwrap();
        assert_eq!(y.real, 2.0_f64);
        assert!(y.ptr_eq(&x));
        assert_eq!(y.dual, Array1::from_vec(vec![3.0, 0.0]));
    }

    #[test]
    fn vars_cmp() {
        let x = Dual::try_new(2.5, vec!["x".to_string(), "y".to_string()], vec![1.0, 0.0]).unwrap();
        let y = Dual::new(1.5, vec!["y".to_string()]);
        let y2 = Dual::new(1.5, vec!["y".to_string()]);
        let z = x.to_new_vars(y.vars(), None);
        let u = Dual::new(1.5, vec!["u".to_string()]);
        assert_eq!(x.vars_cmp(y.vars()), VarsRelationship::Superset);
        assert_eq!(y.vars_cmp(z.vars()), VarsRelationship::ArcEquivalent);
        assert_eq!(y.vars_cmp(y2.vars()), VarsRelationship::ValueEquivalent);
        assert_eq!(y.vars_cmp(x.vars()), VarsRelationship::Subset);
        assert_eq!(y.vars_cmp(u.vars()), VarsRelationship::Difference);
    }

    #[test]
    fn default() {
        let x = Dual::default();
        assert_eq!(x.real, 0.0_f64);
        assert_eq!(x.vars.len(), 0_usize);
        assert_eq!(x.dual, Array1::<f64>::from_vec(vec![]));
    }

    #[test]
    fn unitialised_derivs_eq_1() {
        let d = Dual::new(2.3, Vec::from([String::from("a"), String::from("b")]));
        for (_, val) in d.dual.indexed_iter() {
            assert!(*val == 1.0)
        }
    }

    #[test]
    fn gradient1_no_equiv() {
        let d1 =
            Dual::try_new(2.5, vec!["x".to_string(), "y".to_string()], vec![1.1, 2.2]).unwrap();
        let result = d1.gradient1(vec!["y".to_string(), "z".to_string(), "x".to_string()]);
        let expected = Array1::from_vec(vec![2.2, 0.0, 1.1]);
        assert_eq!(result, expected)
    }

    #[test]
    fn gradient1_equiv() {
        let d1 =
            Dual::try_new(2.5, vec!["x".to_string(), "y".to_string()], vec![1.1, 2.2]).unwrap();
        let result = d1.gradient1(vec!["x".to_string(), "y".to_string()]);
        let expected = Array1::from_vec(vec![1.1, 2.2]);
        assert_eq!(result, expected)
    }

    #[test]
    fn jacobian_map_ordered() {
        let d1 =
            Dual::try_new(2.5, vec!["x".to_string(), "y".to_string()], vec![1.1, 2.2]).unwrap();
        let jac = d1.jacobian();
        assert_eq!(
            jac.into_iter().collect::<Vec<_>>(),
            vec![("x".to_string(), 1.1), ("y".to_string(), 2.2)]
        );
    }

    #[test]
    fn partial_derivative_defaults_to_zero() {
        let d1 =
            Dual::try_new(2.5, vec!["x".to_string(), "y".to_string()], vec![1.1, 2.2]).unwrap();
        assert_eq!(d1.partial_derivative("y"), 2.2);
        assert_eq!(d1.partial_derivative("q"), 0.0);
    }

    #[test]
    fn number_value() {
        let d = Number::Dual(Dual::new(3.0, vec!["x".to_string()]));
        let f = Number::F64(2.5);
        assert_eq!(d.value(), 3.0);
        assert_eq!(f.value(), 2.5);
        assert!(d.is_dual());
        assert!(!f.is_dual());
    }
}
