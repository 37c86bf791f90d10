mod add;
mod div;
mod eq;
mod from;
mod mul;
mod neg;
pub mod numeric_ops;
mod one;
mod ord;
mod pow;
mod sub;
mod sum;
mod zero;
