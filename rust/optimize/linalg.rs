//! Dense f64 linear algebra backing the quasi-Newton step.

use ndarray::prelude::*;

/// Outer product of two 1d-arrays containing f64s.
pub(crate) fn fouter11_(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> Array2<f64> {
    Array2::from_shape_fn((a.len(), b.len()), |(i, j)| a[i] * b[j])
}

/// Index of the entry with the largest absolute value.
///
/// NaN entries never compare greater, so they are passed over rather than
/// poisoning the pivot choice.
fn argabsmax(a: ArrayView1<f64>) -> usize {
    a.iter()
        .enumerate()
        .fold((0_usize, 0.0_f64), |acc, (i, v)| {
            if v.abs() > acc.1 {
                (i, v.abs())
            } else {
                acc
            }
        })
        .0
}

fn row_swap(a: &mut Array2<f64>, j: &usize, k: &usize) {
    let (mut rj, mut rk) = a.multi_slice_mut((s![*j, ..], s![*k, ..]));
    ndarray::Zip::from(&mut rj).and(&mut rk).for_each(std::mem::swap);
}

fn el_swap(b: &mut Array1<f64>, j: &usize, k: &usize) {
    b.swap(*j, *k);
}

fn fsolve_upper21_(u: &ArrayView2<f64>, b: &ArrayView1<f64>) -> Array1<f64> {
    let n: usize = u.len_of(Axis(0));
    let mut x: Array1<f64> = Array::zeros(n);
    for i in (0..n).rev() {
        let tail = u.slice(s![i, (i + 1)..]).dot(&x.slice(s![(i + 1)..]));
        x[i] = (b[i] - tail) / u[[i, i]];
    }
    x
}

/// Solve a linear system, ax = b, using Gaussian elimination and partial pivoting.
pub(crate) fn fsolve(a: &ArrayView2<f64>, b: &ArrayView1<f64>) -> Array1<f64> {
    assert!(a.is_square());
    let n = a.len_of(Axis(0));
    assert_eq!(b.len_of(Axis(0)), n);

    // a_ and b_ will be pivoted and amended throughout the solution
    let mut a_ = a.to_owned();
    let mut b_ = b.to_owned();

    for j in 0..n {
        let k = argabsmax(a_.slice(s![j.., j])) + j;
        if j != k {
            // row swaps j <-> k  (note that k > j by definition)
            row_swap(&mut a_, &j, &k);
            el_swap(&mut b_, &j, &k);
        }
        // reduction on subsequent rows below j
        for l in (j + 1)..n {
            let scl: f64 = a_[[l, j]] / a_[[j, j]];
            a_[[l, j]] = 0.0_f64;
            for m in (j + 1)..n {
                a_[[l, m]] -= scl * a_[[j, m]];
            }
            b_[l] -= scl * b_[j];
        }
    }
    fsolve_upper21_(&a_.view(), &b_.view())
}
