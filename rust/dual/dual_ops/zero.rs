use crate::dual::dual::{Dual, Number};
use num_traits::identities::Zero;

impl Zero for Dual {
    fn zero() -> Dual {
        Dual::new(0.0, Vec::new())
    }

    fn is_zero(&self) -> bool {
        *self == Dual::new(0.0, Vec::new())
    }
}

impl Zero for Number {
    fn zero() -> Number {
        Number::F64(0.0_f64)
    }

    fn is_zero(&self) -> bool {
        match self {
            Number::F64(f) => *f == 0.0_f64,
            Number::Dual(d) => *d == Dual::new(0.0, vec![]),
        }
    }
}
