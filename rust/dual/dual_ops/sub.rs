use crate::dual::dual::{Dual, Number, Vars, VarsRelationship};
use auto_ops::impl_op_ex;
use std::sync::Arc;

// Sub
impl_op_ex!(- |a: &Dual, b: &f64| -> Dual {
    Dual {
        vars: Arc::clone(&a.vars),
        real: a.real - b,
        dual: a.dual.clone(),
    }
});
impl_op_ex!(- |a: &f64, b: &Dual| -> Dual {
    Dual {
        vars: Arc::clone(&b.vars),
        real: a - b.real,
        dual: &b.dual * -1.0,
    }
});

// impl Sub for Dual
impl_op_ex!(- |a: &Dual, b: &Dual| -> Dual {
    let state = a.vars_cmp(b.vars());
    match state {
        VarsRelationship::ArcEquivalent | VarsRelationship::ValueEquivalent => Dual {
            real: a.real - b.real,
            dual: &a.dual - &b.dual,
            vars: Arc::clone(&a.vars),
        },
        _ => {
            let (x, y) = a.to_union_vars(b, Some(state));
            Dual {
                real: x.real - y.real,
                dual: &x.dual - &y.dual,
                vars: Arc::clone(&x.vars),
            }
        }
    }
});

// Sub for Number
impl_op_ex!(- |a: &Number, b: &Number| -> Number {
    match (a, b) {
        (Number::F64(f), Number::F64(f2)) => Number::F64(f - f2),
        (Number::F64(f), Number::Dual(d2)) => Number::Dual(f - d2),
        (Number::Dual(d), Number::F64(f2)) => Number::Dual(d - f2),
        (Number::Dual(d), Number::Dual(d2)) => Number::Dual(d - d2),
    }
});
