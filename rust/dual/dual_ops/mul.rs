use crate::dual::dual::{Dual, Number, Vars, VarsRelationship};
use auto_ops::{impl_op_ex, impl_op_ex_commutative};
use std::sync::Arc;

// Mul
impl_op_ex_commutative!(*|a: &Dual, b: &f64| -> Dual {
    Dual {
        vars: Arc::clone(&a.vars),
        real: a.real * b,
        dual: *b * &a.dual,
    }
});

// impl Mul for Dual
impl_op_ex!(*|a: &Dual, b: &Dual| -> Dual {
    let state = a.vars_cmp(b.vars());
    match state {
        VarsRelationship::ArcEquivalent | VarsRelationship::ValueEquivalent => Dual {
            real: a.real * b.real,
            dual: &a.dual * b.real + &b.dual * a.real,
            vars: Arc::clone(&a.vars),
        },
        _ => {
            let (x, y) = a.to_union_vars(b, Some(state));
            Dual {
                real: x.real * y.real,
                dual: &x.dual * y.real + &y.dual * x.real,
                vars: Arc::clone(&x.vars),
            }
        }
    }
});

// Mul for Number
impl_op_ex!(*|a: &Number, b: &Number| -> Number {
    match (a, b) {
        (Number::F64(f), Number::F64(f2)) => Number::F64(f * f2),
        (Number::F64(f), Number::Dual(d2)) => Number::Dual(f * d2),
        (Number::Dual(d), Number::F64(f2)) => Number::Dual(d * f2),
        (Number::Dual(d), Number::Dual(d2)) => Number::Dual(d * d2),
    }
});
