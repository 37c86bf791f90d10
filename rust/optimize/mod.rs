//! Unconstrained minimizers driven by forward mode AD gradients.
//!
//! Every algorithm consumes the objective only through [gradient] extraction:
//! at each iterate fresh primitives named `x0..x{n-1}` are constructed at the
//! current point, the objective is evaluated over them, and the gradient is
//! read off the result's derivative map. Objectives are written once over
//! `&[Dual]` and may fail (e.g. a domain guarded elementary function); an
//! error at an accepted iterate aborts the run, while an error at a line
//! search *probe* point only abandons the exact step estimate.

mod linalg;

use crate::dual::{get_variable_tags, Dual, Gradient1, Number};
use crate::error::AdError;
use itertools::izip;
use linalg::{fouter11_, fsolve};
use ndarray::{Array1, Array2};

/// The minimization algorithm to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Quasi-Newton with a rank two approximate Hessian update.
    #[default]
    Bfgs,
    /// Exact line search along the negative gradient (secant step estimate).
    SteepestDescent,
    /// Conjugate directions with automatic restart.
    ConjugateGradient,
    /// Fixed learning rate descent.
    GradientDescent,
}

/// Tuning knobs shared by all methods.
///
/// [Opts::default] carries the line search methods' historical tuning;
/// [Opts::gradient_descent] is the looser preset the fixed step method needs
/// to terminate in reasonable time.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    /// Convergence threshold on the Euclidean norm of the gradient.
    pub precision: f64,
    /// Iteration cap.
    pub max_iter: usize,
    /// Probe distance for secant line searches.
    pub sigma: f64,
    /// Step scale for [Method::GradientDescent] only.
    pub learning_rate: f64,
}

impl Default for Opts {
    fn default() -> Self {
        Opts {
            precision: 1e-3,
            max_iter: 5000,
            sigma: 0.01,
            learning_rate: 1e-3,
        }
    }
}

impl Opts {
    /// Preset matched to [Method::GradientDescent].
    pub fn gradient_descent() -> Self {
        Opts {
            precision: 1e-2,
            max_iter: 30000,
            ..Default::default()
        }
    }
}

/// The outcome of a minimization run.
#[derive(Debug, Clone)]
pub struct Minimum {
    /// Final iterate.
    pub x: Array1<f64>,
    /// Every iterate visited, starting with the initial guess.
    pub path: Vec<Array1<f64>>,
    /// Whether the gradient norm fell under `precision` before `max_iter`.
    pub converged: bool,
    /// Iterations consumed.
    pub iterations: usize,
}

fn norm2(a: &Array1<f64>) -> f64 {
    a.dot(a).sqrt()
}

fn gradient_at<F>(f: &F, x: &Array1<f64>, tags: &[String]) -> Result<Array1<f64>, AdError>
where
    F: Fn(&[Dual]) -> Result<Number, AdError>,
{
    let vars: Vec<Dual> = izip!(tags.iter(), x.iter())
        .map(|(tag, v)| Dual::new(*v, vec![tag.clone()]))
        .collect();
    match f(&vars)? {
        Number::Dual(d) => Ok(d.gradient1(tags.to_vec())),
        Number::F64(_) => Ok(Array1::zeros(x.len())),
    }
}

/// Evaluate the gradient of `f` at `x` by forward mode differentiation.
///
/// An objective which never touches its arguments (a constant) has a zero
/// gradient everywhere.
///
/// # Examples
///
/// ```rust
/// # use automin::optimize::gradient;
/// # use automin::dual::Number;
/// let g = gradient(
///     |v| Ok(Number::Dual(&v[0] * &v[0] + &v[1] * &v[1])),
///     &[3.0, 4.0],
/// )
/// .unwrap();
/// assert_eq!(g.to_vec(), vec![6.0, 8.0]);
/// ```
pub fn gradient<F>(f: F, x: &[f64]) -> Result<Array1<f64>, AdError>
where
    F: Fn(&[Dual]) -> Result<Number, AdError>,
{
    let tags = get_variable_tags("x", x.len());
    gradient_at(&f, &Array1::from_vec(x.to_vec()), &tags)
}

/// Minimize `f` from the initial guess `x0`.
///
/// An objective error at an accepted iterate propagates; exhausting
/// `opts.max_iter` is not an error and is reported through
/// [Minimum::converged].
pub fn minimize<F>(f: F, x0: &[f64], method: Method, opts: &Opts) -> Result<Minimum, AdError>
where
    F: Fn(&[Dual]) -> Result<Number, AdError>,
{
    match method {
        Method::Bfgs => min_bfgs(&f, x0, opts),
        Method::SteepestDescent => min_steepest_descent(&f, x0, opts),
        Method::ConjugateGradient => min_conjugate_gradient(&f, x0, opts),
        Method::GradientDescent => min_gradient_descent(&f, x0, opts),
    }
}

/// Secant step estimate from a probe gradient, or `sigma` itself when the
/// probe failed or the denominator degenerates.
fn secant_step(numerator: f64, denom: Option<f64>, sigma: f64) -> f64 {
    match denom {
        Some(d) if d != 0.0 => numerator / d,
        _ => sigma,
    }
}

fn min_steepest_descent<F>(f: &F, x0: &[f64], opts: &Opts) -> Result<Minimum, AdError>
where
    F: Fn(&[Dual]) -> Result<Number, AdError>,
{
    let tags = get_variable_tags("x", x0.len());
    let mut x = Array1::from_vec(x0.to_vec());
    let mut path = vec![x.clone()];

    for i in 0..opts.max_iter {
        let grad = gradient_at(f, &x, &tags)?;
        if norm2(&grad) <= opts.precision {
            return Ok(Minimum {
                x,
                path,
                converged: true,
                iterations: i,
            });
        }
        let s = -&grad;
        // secant method line search
        let denom = gradient_at(f, &(&x + &(opts.sigma * &s)), &tags)
            .ok()
            .map(|probe| probe.dot(&s) - grad.dot(&s));
        let eta = secant_step(-opts.sigma * grad.dot(&s), denom, opts.sigma);
        x = &x + &(eta * &s);
        path.push(x.clone());
    }
    Ok(Minimum {
        x,
        path,
        converged: false,
        iterations: opts.max_iter,
    })
}

fn min_conjugate_gradient<F>(f: &F, x0: &[f64], opts: &Opts) -> Result<Minimum, AdError>
where
    F: Fn(&[Dual]) -> Result<Number, AdError>,
{
    let tags = get_variable_tags("x", x0.len());
    let mut x = Array1::from_vec(x0.to_vec());
    let mut path = vec![x.clone()];

    // initial step is plain steepest descent
    let mut sgrad0 = -gradient_at(f, &x, &tags)?;
    if norm2(&sgrad0) <= opts.precision {
        return Ok(Minimum {
            x,
            path,
            converged: true,
            iterations: 0,
        });
    }
    let denom = gradient_at(f, &(&x + &(opts.sigma * &sgrad0)), &tags)
        .ok()
        .map(|probe| probe.dot(&sgrad0) - sgrad0.dot(&sgrad0));
    let alpha = secant_step(-opts.sigma * sgrad0.dot(&sgrad0), denom, opts.sigma);
    x = &x + &(alpha * &sgrad0);
    let mut conj = sgrad0.clone();
    path.push(x.clone());

    for i in 0..opts.max_iter.saturating_sub(1) {
        let sgrad1 = -gradient_at(f, &x, &tags)?;
        // restart whenever the correction would not remain a descent direction
        let beta = f64::min(0.0, sgrad1.dot(&(&sgrad0 - &sgrad1)) / sgrad0.dot(&sgrad0));
        conj = &sgrad1 + &(beta * &conj);
        let denom = gradient_at(f, &(&x + &(opts.sigma * &conj)), &tags)
            .ok()
            .map(|probe| probe.dot(&conj) + sgrad1.dot(&conj));
        let alpha = secant_step(opts.sigma * sgrad1.dot(&conj), denom, opts.sigma);
        x = &x + &(alpha * &conj);
        path.push(x.clone());
        sgrad0 = sgrad1;
        if norm2(&sgrad0) <= opts.precision {
            return Ok(Minimum {
                x,
                path,
                converged: true,
                iterations: i + 2,
            });
        }
    }
    Ok(Minimum {
        x,
        path,
        converged: false,
        iterations: opts.max_iter,
    })
}

fn min_bfgs<F>(f: &F, x0: &[f64], opts: &Opts) -> Result<Minimum, AdError>
where
    F: Fn(&[Dual]) -> Result<Number, AdError>,
{
    let n = x0.len();
    let tags = get_variable_tags("x", n);
    let mut h: Array2<f64> = Array2::eye(n);
    let mut x = Array1::from_vec(x0.to_vec());
    let mut path = vec![x.clone()];

    for i in 0..opts.max_iter {
        let grad_now = gradient_at(f, &x, &tags)?;
        let s = fsolve(&h.view(), &(-&grad_now).view());
        x = &x + &s;
        path.push(x.clone());

        // rank two approximate Hessian update
        let grad1 = gradient_at(f, &x, &tags)?;
        let y = &grad1 - &grad_now;
        let hs = h.dot(&s);
        h = h + fouter11_(&y.view(), &y.view()) / y.dot(&s)
            - fouter11_(&hs.view(), &hs.view()) / hs.dot(&s);

        if norm2(&grad1) <= opts.precision {
            return Ok(Minimum {
                x,
                path,
                converged: true,
                iterations: i + 1,
            });
        }
    }
    Ok(Minimum {
        x,
        path,
        converged: false,
        iterations: opts.max_iter,
    })
}

fn min_gradient_descent<F>(f: &F, x0: &[f64], opts: &Opts) -> Result<Minimum, AdError>
where
    F: Fn(&[Dual]) -> Result<Number, AdError>,
{
    let tags = get_variable_tags("x", x0.len());
    let mut x = Array1::from_vec(x0.to_vec());
    let mut path = vec![x.clone()];
    let mut g = gradient_at(f, &x, &tags)?;

    for i in 0..opts.max_iter {
        x = &x - &(opts.learning_rate * &g);
        path.push(x.clone());
        g = gradient_at(f, &x, &tags)?;
        if norm2(&g) <= opts.precision {
            return Ok(Minimum {
                x,
                path,
                converged: true,
                iterations: i + 1,
            });
        }
    }
    Ok(Minimum {
        x,
        path,
        converged: false,
        iterations: opts.max_iter,
    })
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::funcs;

    fn sphere(v: &[Dual]) -> Result<Number, AdError> {
        Ok(Number::Dual(&v[0] * &v[0] + &v[1] * &v[1]))
    }

    fn shifted(v: &[Dual]) -> Result<Number, AdError> {
        let a = &v[0] - 1.0;
        let b = &v[1] + 2.0;
        Ok(Number::Dual(&a * &a + &b * &b))
    }

    #[test]
    fn gradient_of_quadratic() {
        let g = gradient(sphere, &[3.0, 4.0]).unwrap();
        assert_eq!(g, Array1::from_vec(vec![6.0, 8.0]));
    }

    #[test]
    fn gradient_of_constant_is_zero() {
        let g = gradient(|_: &[Dual]| Ok(Number::F64(5.0)), &[3.0, 4.0]).unwrap();
        assert_eq!(g, Array1::<f64>::zeros(2));
    }

    #[test]
    fn gradient_propagates_objective_error() {
        let result = gradient(|v: &[Dual]| funcs::sqrt(&v[0]), &[-1.0]);
        assert!(matches!(result, Err(AdError::Domain { .. })));
    }

    #[test]
    fn bfgs_sphere() {
        let r = minimize(sphere, &[20.0, 12.0], Method::Bfgs, &Opts::default()).unwrap();
        assert!(r.converged);
        assert!(norm2(&r.x) < 1e-3);
        assert_eq!(r.iterations, 2);
        assert_eq!(r.path.len(), 3);
    }

    #[test]
    fn steepest_descent_sphere() {
        let r = minimize(
            sphere,
            &[20.0, 12.0],
            Method::SteepestDescent,
            &Opts::default(),
        )
        .unwrap();
        assert!(r.converged);
        assert!(norm2(&r.x) < 1e-3);
    }

    #[test]
    fn conjugate_gradient_sphere() {
        let r = minimize(
            sphere,
            &[2.0, 1.0],
            Method::ConjugateGradient,
            &Opts::default(),
        )
        .unwrap();
        assert!(r.converged);
        assert!(norm2(&r.x) < 1e-3);
    }

    #[test]
    fn gradient_descent_sphere() {
        let r = minimize(
            sphere,
            &[20.0, 12.0],
            Method::GradientDescent,
            &Opts::gradient_descent(),
        )
        .unwrap();
        assert!(r.converged);
        assert!(norm2(&r.x) < 1e-2);
    }

    #[test]
    fn bfgs_shifted_minimum() {
        let r = minimize(shifted, &[5.0, 5.0], Method::Bfgs, &Opts::default()).unwrap();
        assert!(r.converged);
        assert!((r.x[0] - 1.0).abs() < 1e-3);
        assert!((r.x[1] + 2.0).abs() < 1e-3);
    }

    #[test]
    fn no_minimum_does_not_converge() {
        let linear = |v: &[Dual]| Ok(Number::Dual(&v[0] + &v[1]));
        let opts = Opts {
            max_iter: 50,
            ..Default::default()
        };
        let r = minimize(linear, &[0.0, 0.0], Method::SteepestDescent, &opts).unwrap();
        assert!(!r.converged);
        assert_eq!(r.iterations, 50);
    }

    #[test]
    fn already_at_minimum() {
        let r = minimize(
            sphere,
            &[0.0, 0.0],
            Method::SteepestDescent,
            &Opts::default(),
        )
        .unwrap();
        assert!(r.converged);
        assert_eq!(r.iterations, 0);
        assert_eq!(r.path.len(), 1);
    }

    #[test]
    fn error_at_iterate_aborts() {
        // log is undefined at the start point itself
        let objective = |v: &[Dual]| funcs::log(&v[0]);
        let result = minimize(objective, &[-1.0], Method::Bfgs, &Opts::default());
        assert!(matches!(result, Err(AdError::Domain { .. })));
    }
}
