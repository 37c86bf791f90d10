use crate::dual::dual::{Dual, Number, Vars, VarsRelationship};

impl PartialEq<Dual> for Dual {
    fn eq(&self, other: &Dual) -> bool {
        if self.real != other.real {
            false
        } else {
            let state = self.vars_cmp(other.vars());
            match state {
                VarsRelationship::ArcEquivalent | VarsRelationship::ValueEquivalent => {
                    self.dual.iter().eq(other.dual.iter())
                }
                _ => {
                    let (x, y) = self.to_union_vars(other, Some(state));
                    x.dual.iter().eq(y.dual.iter())
                }
            }
        }
    }
}

impl PartialEq<f64> for Dual {
    fn eq(&self, other: &f64) -> bool {
        Dual::new(*other, [].to_vec()) == *self
    }
}

impl PartialEq<Dual> for f64 {
    fn eq(&self, other: &Dual) -> bool {
        Dual::new(*self, [].to_vec()) == *other
    }
}

impl PartialEq<Number> for Number {
    fn eq(&self, other: &Number) -> bool {
        match (self, other) {
            (Number::F64(f), Number::F64(f2)) => f == f2,
            (Number::F64(f), Number::Dual(d2)) => f == d2,
            (Number::Dual(d), Number::F64(f2)) => d == f2,
            (Number::Dual(d), Number::Dual(d2)) => d == d2,
        }
    }
}
