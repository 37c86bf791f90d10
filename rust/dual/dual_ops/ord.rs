use crate::dual::dual::{Dual, Number};
use std::cmp::Ordering;

impl PartialOrd<Dual> for Dual {
    fn partial_cmp(&self, other: &Dual) -> Option<Ordering> {
        self.real.partial_cmp(&other.real)
    }
}

impl PartialOrd<f64> for Dual {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.real.partial_cmp(other)
    }
}

impl PartialOrd<Dual> for f64 {
    fn partial_cmp(&self, other: &Dual) -> Option<Ordering> {
        self.partial_cmp(&other.real)
    }
}

impl PartialOrd<Number> for Number {
    fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
        match (self, other) {
            (Number::F64(f), Number::F64(f2)) => f.partial_cmp(f2),
            (Number::F64(f), Number::Dual(d2)) => f.partial_cmp(d2),
            (Number::Dual(d), Number::F64(f2)) => d.partial_cmp(f2),
            (Number::Dual(d), Number::Dual(d2)) => d.partial_cmp(d2),
        }
    }
}
