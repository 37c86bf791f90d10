use crate::dual::dual::{Dual, Number, Vars};
use num_traits::Pow;
use std::sync::Arc;

impl Pow<f64> for Dual {
    type Output = Dual;
    fn pow(self, power: f64) -> Self::Output {
        Dual {
            real: self.real.pow(power),
            vars: self.vars,
            dual: self.dual * power * self.real.pow(power - 1.0),
        }
    }
}

impl Pow<f64> for &Dual {
    type Output = Dual;
    fn pow(self, power: f64) -> Self::Output {
        Dual {
            real: self.real.pow(power),
            vars: Arc::clone(self.vars()),
            dual: &self.dual * power * self.real.pow(power - 1.0),
        }
    }
}

impl Pow<&Dual> for f64 {
    type Output = Dual;
    fn pow(self, power: &Dual) -> Self::Output {
        Dual {
            real: self.pow(power.real),
            vars: Arc::clone(power.vars()),
            dual: &power.dual * self.pow(power.real) * self.ln(),
        }
    }
}

impl Pow<Dual> for f64 {
    type Output = Dual;
    fn pow(self, power: Dual) -> Self::Output {
        Dual {
            real: self.pow(power.real),
            vars: power.vars,
            dual: power.dual * self.pow(power.real) * self.ln(),
        }
    }
}

impl Pow<&Dual> for &Dual {
    type Output = Dual;
    fn pow(self, power: &Dual) -> Self::Output {
        let (z, p) = self.to_union_vars(power, None);
        Dual {
            real: z.real.pow(p.real),
            vars: Arc::clone(z.vars()),
            dual: p.real * z.real.pow(p.real - 1_f64) * &z.dual
                + z.real.ln() * z.real.pow(p.real) * &p.dual,
        }
    }
}

impl Pow<&Dual> for Dual {
    type Output = Dual;
    fn pow(self, power: &Dual) -> Self::Output {
        (&self).pow(power)
    }
}

impl Pow<Dual> for &Dual {
    type Output = Dual;
    fn pow(self, power: Dual) -> Self::Output {
        self.pow(&power)
    }
}

impl Pow<Dual> for Dual {
    type Output = Dual;
    fn pow(self, power: Dual) -> Self::Output {
        (&self).pow(&power)
    }
}

// Pow for Number
impl Pow<&Number> for &Number {
    type Output = Number;
    fn pow(self, power: &Number) -> Self::Output {
        match (self, power) {
            (Number::F64(f), Number::F64(p)) => Number::F64(f.pow(p)),
            (Number::F64(f), Number::Dual(p)) => Number::Dual((*f).pow(p)),
            (Number::Dual(d), Number::F64(p)) => Number::Dual(d.pow(*p)),
            (Number::Dual(d), Number::Dual(p)) => Number::Dual(d.pow(p)),
        }
    }
}

impl Pow<Number> for Number {
    type Output = Number;
    fn pow(self, power: Number) -> Self::Output {
        (&self).pow(&power)
    }
}

impl Pow<&Number> for Number {
    type Output = Number;
    fn pow(self, power: &Number) -> Self::Output {
        (&self).pow(power)
    }
}

impl Pow<Number> for &Number {
    type Output = Number;
    fn pow(self, power: Number) -> Self::Output {
        self.pow(&power)
    }
}
