//! Toolset for forward mode automatic differentiation (AD).
//!
//! # AD Architecture
//!
//! The library is built around two core numeric types: [f64] and [Dual].
//! [f64] allows for traditional computation, while a [Dual] additionally
//! carries the first order partial derivatives of the value with respect to a
//! set of **named** independent variables. Derivatives are calculated with
//! forward mode AD: every arithmetic operation and elementary function
//! produces a brand new [Dual] whose gradient is assembled by the chain rule,
//! and operands are never mutated.
//!
//! Names absent from a value's variable set have partial derivative exactly
//! zero; reading them defaults rather than errors. The [Number] enum is the
//! tagged union of the two numeric types used wherever an operand may be
//! either one.

mod dual;
mod dual_ops;
mod episode;
mod vector;

pub use crate::dual::dual::{
    Dual, Gradient1, Number, NumberOps, Vars, VarsRelationship,
};
pub use crate::dual::episode::Episode;
pub use crate::dual::vector::{vectorize, DualVector, NumberVec};

/// Utility for creating an ordered list of variable tags from a string and enumerator
pub(crate) fn get_variable_tags(name: &str, range: usize) -> Vec<String> {
    Vec::from_iter((0..range).map(|i| name.to_string() + &i.to_string()))
}
