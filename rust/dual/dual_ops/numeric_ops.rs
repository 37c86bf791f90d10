use crate::dual::dual::{Dual, Number};
use std::ops::{Add, Div, Mul, Sub};

pub trait NumberOps<T>:
    Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T> + Sized + Clone
{
}
impl<'a, T: 'a> NumberOps<T> for &'a T where
    &'a T: Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T>
{
}
impl NumberOps<Dual> for Dual {}
impl NumberOps<f64> for f64 {}
impl NumberOps<Number> for Number {}
