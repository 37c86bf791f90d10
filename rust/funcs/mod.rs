//! Elementary function library with domain checked variants.
//!
//! Every function accepts `impl Into<Number>`, so callers may pass a
//! [crate::dual::Dual], a `&Dual` or a plain [f64] interchangeably. Functions with a restricted
//! domain validate the operand's *value* before computing and return
//! `Result`, so out of range inputs surface as [AdError::Domain] rather than
//! silent NaNs. Unrestricted functions return [Number] directly.

mod lift;
pub use lift::{lift_binary, lift_unary};

use crate::dual::Number;
use crate::error::AdError;
use num_traits::Pow;
use statrs::function::logistic::logistic as logistic_f64;

/// Sine.
pub fn sin(x: impl Into<Number>) -> Number {
    lift_unary(f64::sin, f64::cos)(&x.into())
}

/// Cosine.
pub fn cos(x: impl Into<Number>) -> Number {
    lift_unary(f64::cos, |v| -v.sin())(&x.into())
}

/// Tangent.
pub fn tan(x: impl Into<Number>) -> Number {
    lift_unary(f64::tan, |v| 1.0 / (v.cos() * v.cos()))(&x.into())
}

/// Inverse sine. Input value must lie in `[-1, 1]`.
pub fn arcsin(x: impl Into<Number>) -> Result<Number, AdError> {
    let x = x.into();
    let v = x.value();
    if !(-1.0..=1.0).contains(&v) {
        return Err(AdError::Domain {
            func: "arcsin",
            value: v,
            domain: "[-1, 1]",
        });
    }
    Ok(lift_unary(f64::asin, |v| 1.0 / (1.0 - v * v).sqrt())(&x))
}

/// Inverse cosine. Input value must lie in `[-1, 1]`.
pub fn arccos(x: impl Into<Number>) -> Result<Number, AdError> {
    let x = x.into();
    let v = x.value();
    if !(-1.0..=1.0).contains(&v) {
        return Err(AdError::Domain {
            func: "arccos",
            value: v,
            domain: "[-1, 1]",
        });
    }
    Ok(lift_unary(f64::acos, |v| -1.0 / (1.0 - v * v).sqrt())(&x))
}

/// Inverse tangent.
pub fn arctan(x: impl Into<Number>) -> Number {
    lift_unary(f64::atan, |v| 1.0 / (1.0 + v * v))(&x.into())
}

/// Hyperbolic sine.
pub fn sinh(x: impl Into<Number>) -> Number {
    lift_unary(f64::sinh, f64::cosh)(&x.into())
}

/// Hyperbolic cosine.
pub fn cosh(x: impl Into<Number>) -> Number {
    lift_unary(f64::cosh, f64::sinh)(&x.into())
}

/// Hyperbolic tangent.
pub fn tanh(x: impl Into<Number>) -> Number {
    lift_unary(f64::tanh, |v| 1.0 / (v.cosh() * v.cosh()))(&x.into())
}

/// Inverse hyperbolic sine.
pub fn arcsinh(x: impl Into<Number>) -> Number {
    lift_unary(f64::asinh, |v| 1.0 / (v * v + 1.0).sqrt())(&x.into())
}

/// Inverse hyperbolic cosine. Input value must exceed 1.
pub fn arccosh(x: impl Into<Number>) -> Result<Number, AdError> {
    let x = x.into();
    let v = x.value();
    if v <= 1.0 {
        return Err(AdError::Domain {
            func: "arccosh",
            value: v,
            domain: "(1, inf)",
        });
    }
    Ok(lift_unary(f64::acosh, |v| 1.0 / (v * v - 1.0).sqrt())(&x))
}

/// Inverse hyperbolic tangent. Input value must lie strictly in `(-1, 1)`.
pub fn arctanh(x: impl Into<Number>) -> Result<Number, AdError> {
    let x = x.into();
    let v = x.value();
    if v <= -1.0 || v >= 1.0 {
        return Err(AdError::Domain {
            func: "arctanh",
            value: v,
            domain: "(-1, 1)",
        });
    }
    Ok(lift_unary(f64::atanh, |v| 1.0 / (1.0 - v * v))(&x))
}

/// Natural exponential.
pub fn exp(x: impl Into<Number>) -> Number {
    lift_unary(f64::exp, f64::exp)(&x.into())
}

/// Base 2 exponential.
pub fn exp2(x: impl Into<Number>) -> Number {
    lift_unary(f64::exp2, |v| v.exp2() * 2.0_f64.ln())(&x.into())
}

/// Natural logarithm. Input value must be strictly positive.
pub fn log(x: impl Into<Number>) -> Result<Number, AdError> {
    let x = x.into();
    let v = x.value();
    if v <= 0.0 {
        return Err(AdError::Domain {
            func: "log",
            value: v,
            domain: "(0, inf)",
        });
    }
    Ok(lift_unary(f64::ln, |v| 1.0 / v)(&x))
}

/// Logarithm in an arbitrary constant base. `base` must be positive and not 1.
pub fn log_base(x: impl Into<Number>, base: f64) -> Result<Number, AdError> {
    let x = x.into();
    let v = x.value();
    if base <= 0.0 || base == 1.0 {
        return Err(AdError::Domain {
            func: "log_base",
            value: base,
            domain: "(0, 1) or (1, inf)",
        });
    }
    if v <= 0.0 {
        return Err(AdError::Domain {
            func: "log_base",
            value: v,
            domain: "(0, inf)",
        });
    }
    Ok(lift_unary(
        move |v| v.log(base),
        move |v| 1.0 / (v * base.ln()),
    )(&x))
}

/// Base 10 logarithm. Input value must be strictly positive.
pub fn log10(x: impl Into<Number>) -> Result<Number, AdError> {
    let x = x.into();
    let v = x.value();
    if v <= 0.0 {
        return Err(AdError::Domain {
            func: "log10",
            value: v,
            domain: "(0, inf)",
        });
    }
    Ok(lift_unary(f64::log10, |v| 1.0 / (v * 10.0_f64.ln()))(&x))
}

/// Base 2 logarithm. Input value must be strictly positive.
pub fn log2(x: impl Into<Number>) -> Result<Number, AdError> {
    let x = x.into();
    let v = x.value();
    if v <= 0.0 {
        return Err(AdError::Domain {
            func: "log2",
            value: v,
            domain: "(0, inf)",
        });
    }
    Ok(lift_unary(f64::log2, |v| 1.0 / (v * 2.0_f64.ln()))(&x))
}

/// Square root. Input value must be non-negative.
pub fn sqrt(x: impl Into<Number>) -> Result<Number, AdError> {
    let x = x.into();
    let v = x.value();
    if v < 0.0 {
        return Err(AdError::Domain {
            func: "sqrt",
            value: v,
            domain: "[0, inf)",
        });
    }
    Ok(lift_unary(f64::sqrt, |v| 1.0 / (2.0 * v.sqrt()))(&x))
}

/// Standard logistic function `1 / (1 + exp(-x))`.
pub fn logistic(x: impl Into<Number>) -> Number {
    lift_unary(logistic_f64, |v| {
        let l = logistic_f64(v);
        l * (1.0 - l)
    })(&x.into())
}

/// Checked addition.
pub fn add(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    lift_binary(|u, v| u + v, |_, _| 1.0, |_, _| 1.0)(&a.into(), &b.into())
}

/// Checked subtraction.
pub fn sub(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    lift_binary(|u, v| u - v, |_, _| 1.0, |_, _| -1.0)(&a.into(), &b.into())
}

/// Checked multiplication.
pub fn mul(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    lift_binary(|u, v| u * v, |_, v| v, |u, _| u)(&a.into(), &b.into())
}

/// Checked division. A zero denominator value is an error.
pub fn div(a: impl Into<Number>, b: impl Into<Number>) -> Result<Number, AdError> {
    let (a, b) = (a.into(), b.into());
    if b.value() == 0.0 {
        return Err(AdError::DivisionByZero);
    }
    Ok(lift_binary(
        |u, v| u / v,
        |_, v| 1.0 / v,
        |u, v| -u / (v * v),
    )(&a, &b))
}

/// Checked power.
///
/// A zero base with a non-positive exponent value is an error. A non-positive
/// base with a *tracked* exponent is an error too, since the exponent partial
/// requires the logarithm of the base.
pub fn pow(base: impl Into<Number>, exponent: impl Into<Number>) -> Result<Number, AdError> {
    let (b, e) = (base.into(), exponent.into());
    let bv = b.value();
    if bv == 0.0 && e.value() <= 0.0 {
        return Err(AdError::ZeroBasePower { exponent: e.value() });
    }
    if bv <= 0.0 && e.is_dual() {
        return Err(AdError::Domain {
            func: "pow",
            value: bv,
            domain: "(0, inf) when the exponent carries derivatives",
        });
    }
    Ok((&b).pow(&e))
}

/// Checked negation.
pub fn neg(x: impl Into<Number>) -> Number {
    lift_unary(|v| -v, |_| -1.0)(&x.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dual::Dual;

    fn var(name: &str, value: f64) -> Dual {
        Dual::new(value, vec![name.to_string()])
    }

    fn partial(n: &Number, name: &str) -> f64 {
        match n {
            Number::Dual(d) => d.partial_derivative(name),
            Number::F64(_) => panic!("expected dual"),
        }
    }

    #[test]
    fn plain_number_fallback() {
        assert_eq!(add(3.0, 4.0), Number::F64(7.0));
        assert_eq!(sin(0.0), Number::F64(0.0));
    }

    #[test]
    fn trig_derivatives() {
        let f = sin(var("a", 0.5));
        assert_eq!(f.value(), 0.5_f64.sin());
        assert_eq!(partial(&f, "a"), 0.5_f64.cos());

        let f = cos(var("a", 0.5));
        assert_eq!(partial(&f, "a"), -(0.5_f64.sin()));

        let f = tan(var("a", 0.5));
        assert!((partial(&f, "a") - 1.0 / (0.5_f64.cos() * 0.5_f64.cos())).abs() < 1e-12);
    }

    #[test]
    fn inverse_trig_derivatives() {
        let f = arcsin(var("a", 0.3)).unwrap();
        assert_eq!(partial(&f, "a"), 1.0 / (1.0 - 0.09_f64).sqrt());
        let f = arccos(var("a", 0.3)).unwrap();
        assert_eq!(partial(&f, "a"), -1.0 / (1.0 - 0.09_f64).sqrt());
        let f = arctan(var("a", 0.3));
        assert_eq!(partial(&f, "a"), 1.0 / 1.09);
    }

    #[test]
    fn hyperbolic_derivatives() {
        let f = sinh(var("a", 0.7));
        assert_eq!(partial(&f, "a"), 0.7_f64.cosh());
        let f = tanh(var("a", 0.7));
        assert!((partial(&f, "a") - 1.0 / (0.7_f64.cosh() * 0.7_f64.cosh())).abs() < 1e-12);
        let f = arccosh(var("a", 2.0)).unwrap();
        assert_eq!(partial(&f, "a"), 1.0 / 3.0_f64.sqrt());
        let f = arctanh(var("a", 0.5)).unwrap();
        assert_eq!(partial(&f, "a"), 1.0 / 0.75);
    }

    #[test]
    fn exp_log_derivatives() {
        let f = exp(var("a", 1.5));
        assert_eq!(partial(&f, "a"), 1.5_f64.exp());
        let f = log(var("a", 4.0)).unwrap();
        assert_eq!(partial(&f, "a"), 0.25);
        let f = log10(var("a", 4.0)).unwrap();
        assert_eq!(partial(&f, "a"), 1.0 / (4.0 * 10.0_f64.ln()));
        let f = log2(var("a", 4.0)).unwrap();
        assert_eq!(partial(&f, "a"), 1.0 / (4.0 * 2.0_f64.ln()));
        let f = log_base(var("a", 4.0), 3.0).unwrap();
        assert_eq!(partial(&f, "a"), 1.0 / (4.0 * 3.0_f64.ln()));
        let f = exp2(var("a", 3.0));
        assert_eq!(partial(&f, "a"), 8.0 * 2.0_f64.ln());
    }

    #[test]
    fn sqrt_and_logistic() {
        let f = sqrt(var("a", 9.0)).unwrap();
        assert_eq!(f.value(), 3.0);
        assert_eq!(partial(&f, "a"), 1.0 / 6.0);

        let f = logistic(var("a", 0.0));
        assert_eq!(f.value(), 0.5);
        assert_eq!(partial(&f, "a"), 0.25);
    }

    #[test]
    fn domain_violations() {
        assert!(arcsin(var("a", 2.0)).is_err());
        assert!(arcsin(2.0).is_err());
        assert!(arccos(-1.5).is_err());
        assert!(sqrt(var("a", -1.0)).is_err());
        assert!(log(var("a", 0.0)).is_err());
        assert!(arccosh(1.0).is_err());
        assert!(arctanh(1.0).is_err());
        assert!(log_base(4.0, 1.0).is_err());
    }

    #[test]
    fn checked_arithmetic() {
        let x = var("x", 6.0);
        let y = var("y", 2.0);
        let q = div(&x, &y).unwrap();
        assert_eq!(q.value(), 3.0);
        assert_eq!(partial(&q, "x"), 0.5);
        assert_eq!(partial(&q, "y"), -1.5);
        assert_eq!(div(x.clone(), 0.0).unwrap_err(), AdError::DivisionByZero);

        let p = pow(var("x", 2.0), var("y", 3.0)).unwrap();
        assert_eq!(p.value(), 8.0);
        assert_eq!(partial(&p, "x"), 12.0);
        assert_eq!(partial(&p, "y"), 8.0 * 2.0_f64.ln());
        assert_eq!(
            pow(0.0, -1.0).unwrap_err(),
            AdError::ZeroBasePower { exponent: -1.0 }
        );
        assert!(pow(-2.0, var("y", 3.0)).is_err());

        let n = neg(var("x", 2.0));
        assert_eq!(n.value(), -2.0);
        assert_eq!(partial(&n, "x"), -1.0);

        assert_eq!(sub(5.0, 2.0), Number::F64(3.0));
        let m = mul(var("x", 2.0), var("y", 3.0));
        assert_eq!(partial(&m, "x"), 3.0);
    }
}
