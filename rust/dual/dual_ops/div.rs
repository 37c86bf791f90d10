use crate::dual::dual::{Dual, Number, Vars};
use auto_ops::impl_op_ex;
use std::sync::Arc;

// Div
impl_op_ex!(/ |a: &Dual, b: &f64| -> Dual { Dual {vars: Arc::clone(&a.vars), real: a.real / b, dual: (1.0 / b) * &a.dual} });
impl_op_ex!(/ |a: &f64, b: &Dual| -> Dual { Dual::new(*a, Vec::new()) / b });

// impl Div for Dual
impl_op_ex!(/ |a: &Dual, b: &Dual| -> Dual {
    let b_ = Dual {real: 1.0 / b.real, vars: Arc::clone(&b.vars), dual: -1.0 / (b.real * b.real) * &b.dual};
    a * b_
});

// Div for Number
impl_op_ex!(/ |a: &Number, b: &Number| -> Number {
    match (a, b) {
        (Number::F64(f), Number::F64(f2)) => Number::F64(f / f2),
        (Number::F64(f), Number::Dual(d2)) => Number::Dual(f / d2),
        (Number::Dual(d), Number::F64(f2)) => Number::Dual(d / f2),
        (Number::Dual(d), Number::Dual(d2)) => Number::Dual(d / d2),
    }
});
