//! This is the documentation for automin
//!
//! *automin* is a forward-mode automatic differentiation (AD) toolkit in which
//! every tracked value carries its partial derivatives with respect to
//! **named** independent variables, plus a small suite of unconstrained
//! minimizers driven by those derivatives.


pub mod dual;
pub use dual::{Dual, DualVector, Episode, Number, NumberVec, Vars};

pub mod error;
pub use error::AdError;

pub mod funcs;

pub mod optimize;
pub use optimize::{gradient, minimize, Method, Minimum, Opts};
