use crate::dual::dual::{Dual, Number};
use auto_ops::impl_op;
use std::sync::Arc;

impl_op!(-|a: Dual| -> Dual {
    Dual {
        vars: a.vars,
        real: -a.real,
        dual: -a.dual,
    }
});

impl_op!(-|a: &Dual| -> Dual {
    Dual {
        vars: Arc::clone(&a.vars),
        real: -a.real,
        dual: &a.dual * -1.0,
    }
});

// Neg for Number
impl_op!(-|a: &Number| -> Number {
    match a {
        Number::F64(f) => Number::F64(-f),
        Number::Dual(d) => Number::Dual(-d),
    }
});

impl_op!(-|a: Number| -> Number {
    match a {
        Number::F64(f) => Number::F64(-f),
        Number::Dual(d) => Number::Dual(-d),
    }
});
