//! Higher order combinators lifting plain numeric functions to [Number].

use crate::dual::{Dual, Number, Vars};
use std::sync::Arc;

/// Lift a univariate function and its derivative to operate on [Number].
///
/// A plain [f64] passes straight through `value_fn`. A [Dual] evaluates
/// `value_fn` at its real component and scales its gradient by
/// `derivative_fn` at the same point (the univariate chain rule).
///
/// # Examples
///
/// ```rust
/// # use automin::dual::{Dual, Number};
/// # use automin::funcs::lift_unary;
/// let cube = lift_unary(|v| v * v * v, |v| 3.0 * v * v);
/// let x = Number::Dual(Dual::new(2.0, vec!["x".to_string()]));
/// match cube(&x) {
///     Number::Dual(d) => {
///         assert_eq!(d.real(), 8.0);
///         assert_eq!(d.partial_derivative("x"), 12.0);
///     }
///     _ => unreachable!(),
/// }
/// ```
pub fn lift_unary<V, D>(value_fn: V, derivative_fn: D) -> impl Fn(&Number) -> Number
where
    V: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    move |x: &Number| match x {
        Number::F64(f) => Number::F64(value_fn(*f)),
        Number::Dual(d) => Number::Dual(Dual {
            real: value_fn(d.real),
            vars: Arc::clone(d.vars()),
            dual: derivative_fn(d.real) * &d.dual,
        }),
    }
}

/// Lift a bivariate function and its two partial derivatives to [Number].
///
/// The Dual by Dual arm aligns both operands on the union of their variables
/// and accumulates `d_dx1 * grad1 + d_dx2 * grad2`; the mixed arms apply the
/// single sided chain rule; two plain numbers evaluate `value_fn` directly.
pub fn lift_binary<V, D1, D2>(
    value_fn: V,
    d_dx1: D1,
    d_dx2: D2,
) -> impl Fn(&Number, &Number) -> Number
where
    V: Fn(f64, f64) -> f64,
    D1: Fn(f64, f64) -> f64,
    D2: Fn(f64, f64) -> f64,
{
    move |a: &Number, b: &Number| match (a, b) {
        (Number::F64(f), Number::F64(g)) => Number::F64(value_fn(*f, *g)),
        (Number::Dual(d), Number::F64(g)) => Number::Dual(Dual {
            real: value_fn(d.real, *g),
            vars: Arc::clone(d.vars()),
            dual: d_dx1(d.real, *g) * &d.dual,
        }),
        (Number::F64(f), Number::Dual(e)) => Number::Dual(Dual {
            real: value_fn(*f, e.real),
            vars: Arc::clone(e.vars()),
            dual: d_dx2(*f, e.real) * &e.dual,
        }),
        (Number::Dual(d), Number::Dual(e)) => {
            let (x, y) = d.to_union_vars(e, None);
            Number::Dual(Dual {
                real: value_fn(x.real, y.real),
                dual: d_dx1(x.real, y.real) * &x.dual + d_dx2(x.real, y.real) * &y.dual,
                vars: Arc::clone(x.vars()),
            })
        }
    }
}
