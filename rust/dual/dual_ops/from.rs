use crate::dual::dual::{Dual, Number};

impl From<Dual> for f64 {
    fn from(value: Dual) -> Self {
        value.real
    }
}

impl From<&Dual> for f64 {
    fn from(value: &Dual) -> Self {
        value.real
    }
}

impl From<f64> for Dual {
    fn from(value: f64) -> Self {
        Self::new(value, vec![])
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::F64(value)
    }
}

impl From<Dual> for Number {
    fn from(value: Dual) -> Self {
        Number::Dual(value)
    }
}

impl From<&Dual> for Number {
    fn from(value: &Dual) -> Self {
        Number::Dual(value.clone())
    }
}

impl From<Number> for f64 {
    fn from(value: Number) -> Self {
        match value {
            Number::F64(f) => f,
            Number::Dual(d) => d.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_from_dual() {
        let d = Dual::new(2.5, vec!["x".to_string()]);
        let f: f64 = (&d).into();
        assert_eq!(f, 2.5);
    }

    #[test]
    fn dual_from_f64() {
        let d: Dual = 2.5.into();
        assert_eq!(d, Dual::new(2.5, vec![]));
    }

    #[test]
    fn number_from_either() {
        let n: Number = 2.5.into();
        assert_eq!(n, Number::F64(2.5));
        let n: Number = Dual::new(2.5, vec!["x".to_string()]).into();
        assert!(n.is_dual());
    }
}
