//! Vector valued dual numbers and the [vectorize] adapter.

use crate::dual::dual::{Dual, Gradient1, Number, Vars, VarsRelationship};
use crate::error::AdError;
use auto_ops::{impl_op_ex, impl_op_ex_commutative};
use indexmap::set::IndexSet;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::ops::Neg;
use std::sync::Arc;

/// An ordered aggregate of [Dual] coordinates exposing a consolidated Jacobian.
///
/// All coordinates are re-aligned at construction to share a single Arc
/// pointer over the union of their variables, so that row-wise reads of the
/// Jacobian need no further shuffling.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DualVector {
    pub(crate) values: Vec<Dual>,
    pub(crate) vars: Arc<IndexSet<String>>,
}

/// Container for the two vector result types; a plain numeric vector or a [DualVector].
#[derive(Clone, Debug)]
pub enum NumberVec {
    Dual(DualVector),
    F64(Vec<f64>),
}

/// Align a sequence of duals to one shared Arc over the union of their vars.
fn align(values: Vec<Dual>) -> (Vec<Dual>, Arc<IndexSet<String>>) {
    let union: IndexSet<String> = values
        .iter()
        .flat_map(|d| d.vars().iter().cloned())
        .collect();
    let arc = Arc::new(union);
    let aligned = values.iter().map(|d| d.to_new_vars(&arc, None)).collect();
    (aligned, arc)
}

impl DualVector {
    /// Construct from coordinate results which must all carry derivatives.
    ///
    /// # Errors
    ///
    /// If any coordinate is a plain [f64] rather than a [Dual].
    pub fn try_new(values: Vec<Number>) -> Result<Self, AdError> {
        let mut duals = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            match value {
                Number::Dual(d) => duals.push(d),
                Number::F64(_) => return Err(AdError::NotDifferentiable { index }),
            }
        }
        Ok(Self::from_duals(duals))
    }

    /// Construct directly from [Dual] coordinates, aligning their variables.
    pub fn from_duals(values: Vec<Dual>) -> Self {
        let (values, vars) = align(values);
        Self { values, vars }
    }

    /// Construct a vector of derivative-free coordinates from plain values.
    ///
    /// Used when combining a [DualVector] with a plain numeric vector.
    pub fn constants(values: &[f64]) -> Self {
        let arc: Arc<IndexSet<String>> = Arc::new(IndexSet::new());
        Self {
            values: values
                .iter()
                .map(|v| Dual {
                    real: *v,
                    vars: Arc::clone(&arc),
                    dual: Array1::zeros(0),
                })
                .collect(),
            vars: arc,
        }
    }

    /// The number of output coordinates.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Return `true` if the vector has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A reference to the aligned coordinate duals.
    pub fn values(&self) -> &[Dual] {
        &self.values
    }

    /// Get a reference to the Arc pointer of the aligned variable names.
    pub fn vars(&self) -> &Arc<IndexSet<String>> {
        &self.vars
    }

    /// The element-wise real component values.
    pub fn value(&self) -> Array1<f64> {
        Array1::from_vec(self.values.iter().map(|d| d.real()).collect())
    }

    /// The full Jacobian; one row per coordinate, one column per variable.
    ///
    /// Column order follows the union of the coordinates' variables in first
    /// appearance order. Cells for names a coordinate does not depend on are
    /// exactly zero.
    pub fn jacobian(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.values.len(), self.vars.len()), |(i, j)| {
            self.values[i].dual()[j]
        })
    }

    /// One Jacobian column as a vector; one entry per output coordinate.
    ///
    /// A name no coordinate depends upon yields a zero vector, never an error.
    pub fn partial_derivative(&self, name: &str) -> Array1<f64> {
        match self.vars.get_index_of(name) {
            Some(j) => Array1::from_vec(self.values.iter().map(|d| d.dual()[j]).collect()),
            None => Array1::zeros(self.values.len()),
        }
    }

    fn try_zip<F>(&self, other: &Self, op: F) -> Result<Self, AdError>
    where
        F: Fn(&Dual, &Dual) -> Dual,
    {
        if self.len() != other.len() {
            return Err(AdError::ShapeMismatch {
                lhs: self.len(),
                rhs: other.len(),
            });
        }
        let state = self.vars_cmp(other);
        let (lhs, rhs) = match state {
            VarsRelationship::ArcEquivalent => (self.clone(), other.clone()),
            _ => {
                let union: IndexSet<String> =
                    self.vars.union(&other.vars).cloned().collect();
                let arc = Arc::new(union);
                (self.realign(&arc), other.realign(&arc))
            }
        };
        let values = lhs
            .values
            .iter()
            .zip(rhs.values.iter())
            .map(|(a, b)| op(a, b))
            .collect();
        Ok(Self {
            values,
            vars: Arc::clone(&lhs.vars),
        })
    }

    fn vars_cmp(&self, other: &Self) -> VarsRelationship {
        if Arc::ptr_eq(&self.vars, &other.vars) {
            VarsRelationship::ArcEquivalent
        } else {
            VarsRelationship::Difference
        }
    }

    fn realign(&self, arc: &Arc<IndexSet<String>>) -> Self {
        Self {
            values: self.values.iter().map(|d| d.to_new_vars(arc, None)).collect(),
            vars: Arc::clone(arc),
        }
    }

    /// Element-wise addition. Errors on unequal lengths.
    pub fn try_add(&self, other: &Self) -> Result<Self, AdError> {
        self.try_zip(other, |a, b| a + b)
    }

    /// Element-wise subtraction. Errors on unequal lengths.
    pub fn try_sub(&self, other: &Self) -> Result<Self, AdError> {
        self.try_zip(other, |a, b| a - b)
    }

    /// Element-wise multiplication. Errors on unequal lengths.
    pub fn try_mul(&self, other: &Self) -> Result<Self, AdError> {
        self.try_zip(other, |a, b| a * b)
    }

    /// Element-wise division. Errors on unequal lengths.
    pub fn try_div(&self, other: &Self) -> Result<Self, AdError> {
        self.try_zip(other, |a, b| a / b)
    }
}

// scalar broadcast
impl_op_ex_commutative!(*|a: &DualVector, b: &f64| -> DualVector {
    DualVector {
        values: a.values.iter().map(|d| d * b).collect(),
        vars: Arc::clone(&a.vars),
    }
});
impl_op_ex!(/ |a: &DualVector, b: &f64| -> DualVector {
    DualVector {
        values: a.values.iter().map(|d| d / b).collect(),
        vars: Arc::clone(&a.vars),
    }
});

impl Neg for &DualVector {
    type Output = DualVector;
    fn neg(self) -> DualVector {
        DualVector {
            values: self.values.iter().map(|d| -d).collect(),
            vars: Arc::clone(&self.vars),
        }
    }
}

impl Neg for DualVector {
    type Output = DualVector;
    fn neg(self) -> DualVector {
        -&self
    }
}

/// Wrap a multi-output function so callers receive a [NumberVec].
///
/// The wrapped function's coordinate results must be homogeneous; all [Dual]
/// yields a [DualVector], all plain [f64] collapses to a numeric vector, and a
/// mixture is an error naming the first offending coordinate.
pub fn vectorize<F>(f: F) -> impl Fn(&[Dual]) -> Result<NumberVec, AdError>
where
    F: Fn(&[Dual]) -> Vec<Number>,
{
    move |args: &[Dual]| {
        let results = f(args);
        let any_dual = results.iter().any(|n| n.is_dual());
        if any_dual {
            Ok(NumberVec::Dual(DualVector::try_new(results)?))
        } else {
            Ok(NumberVec::F64(
                results.into_iter().map(|n| n.value()).collect(),
            ))
        }
    }
}
