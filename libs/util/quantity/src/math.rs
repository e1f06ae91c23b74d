// This file is part of Quanta.
//
// Quanta is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Quanta is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Quanta.  If not, see <http://www.gnu.org/licenses/>.
use crate::{Abs, Real, Rel};
use std::f64::consts::{PI, TAU};
use units::{
    kind::{Angle, Dimensionless, Direction},
    AngleUnit, RelativeKind,
};

// Elementwise functions apply to the stored value and keep the unit.
macro_rules! elementwise {
    ($Type:ident, $Bound:ident; $($f:ident),+) => {
        impl<K: units::$Bound, F: Real> $Type<K, F> {
            $(
                pub fn $f(self) -> Self {
                    self.map(F::$f)
                }
            )+

            pub fn rint(self) -> Self {
                self.map(Real::rint)
            }
        }
    };
}

elementwise!(Rel, RelativeKind; abs, ceil, floor, round, signum, sqrt, cbrt);
elementwise!(Abs, AbsoluteKind; ceil, floor, round);

impl<K: RelativeKind, F: Real> Rel<K, F> {
    pub fn powf(self, n: F) -> Self {
        self.map(|v| v.powf(n))
    }

    pub fn powi(self, n: i32) -> Self {
        self.map(|v| v.powi(n))
    }

    /// The reciprocal of the stored value.
    pub fn inv(self) -> Self {
        self.map(F::recip)
    }
}

// Like the other elementwise functions these act on the stored value, so
// 50 % has a sine of sin(50) %.
macro_rules! dimensionless_elementwise {
    ($($f:ident),+) => {
        impl<F: Real> Rel<Dimensionless, F> {
            $(
                pub fn $f(self) -> Self {
                    self.map(F::$f)
                }
            )+
        }
    };
}

dimensionless_elementwise!(sin, cos, tan, sinh, cosh, tanh, exp, exp_m1, ln, ln_1p, log10, log2);

impl<F: Real> Rel<Dimensionless, F> {
    pub fn asin(self) -> Rel<Angle, F> {
        Rel::new(self.value().asin(), AngleUnit::RADIAN)
    }

    pub fn acos(self) -> Rel<Angle, F> {
        Rel::new(self.value().acos(), AngleUnit::RADIAN)
    }

    pub fn atan(self) -> Rel<Angle, F> {
        Rel::new(self.value().atan(), AngleUnit::RADIAN)
    }

    /// The angle of the point (`x`, `self`) from the positive x axis.
    pub fn atan2(self, x: Self) -> Rel<Angle, F> {
        Rel::new(self.si().atan2(x.si()), AngleUnit::RADIAN)
    }
}

impl<F: Real> Rel<Angle, F> {
    fn radians(&self) -> F {
        self.si()
    }

    pub fn sin(self) -> Rel<Dimensionless, F> {
        Rel::from_si(self.radians().sin())
    }

    pub fn cos(self) -> Rel<Dimensionless, F> {
        Rel::from_si(self.radians().cos())
    }

    pub fn tan(self) -> Rel<Dimensionless, F> {
        Rel::from_si(self.radians().tan())
    }

    /// The same angle within one turn, in [0, 2π), in this unit.
    pub fn normalize(self) -> Self {
        self.with_si(self.radians().as_f64().rem_euclid(TAU))
    }

    /// The same angle within (min, max], stepping by whole multiples of the
    /// width of the range.
    pub fn wrap(self, min: Self, max: Self) -> Self {
        let (lo, hi) = (min.si().as_f64(), max.si().as_f64());
        let width = hi - lo;
        let mut v = lo + (self.si().as_f64() - lo).rem_euclid(width);
        if v <= lo {
            v += width;
        }
        self.with_si(v)
    }

    /// The same angle within (-π, π].
    pub fn wrap_pi(self) -> Self {
        self.wrap(
            Self::new(F::of(-PI), AngleUnit::RADIAN),
            Self::new(F::of(PI), AngleUnit::RADIAN),
        )
    }

    pub fn clamp(self, min: Self, max: Self) -> Self {
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }

    /// Degrees, arcminutes and arcseconds, to the nearest arcsecond.
    pub fn split_degrees_minutes_seconds(&self) -> (i32, i32, i32) {
        let arcseconds = (self.in_unit(AngleUnit::DEGREE).as_f64() * 3_600.0).round() as i64;
        let degrees = arcseconds / 3_600;
        let minutes = (arcseconds - degrees * 3_600) / 60;
        let seconds = arcseconds - degrees * 3_600 - minutes * 60;
        (degrees as i32, minutes as i32, seconds as i32)
    }

    fn with_si(self, si: f64) -> Self {
        let unit = self.unit();
        Self::new(F::of(unit.from_standard(si)), unit)
    }
}

impl<F: Real> Abs<Direction, F> {
    /// The same direction within one turn of the unit's origin.
    pub fn normalize(self) -> Self {
        let unit = self.unit();
        let turn = unit.relative_unit().from_standard(TAU);
        Self::new(F::of(self.value().as_f64().rem_euclid(turn)), unit)
    }
}
