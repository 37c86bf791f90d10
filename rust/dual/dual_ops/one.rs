use crate::dual::dual::{Dual, Number};
use num_traits::identities::One;

impl One for Dual {
    fn one() -> Dual {
        Dual::new(1.0, Vec::new())
    }
}

impl One for Number {
    fn one() -> Number {
        Number::F64(1.0_f64)
    }
}
