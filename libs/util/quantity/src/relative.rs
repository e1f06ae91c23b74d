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
use crate::{Abs, Real};
use approx::{AbsDiffEq, RelativeEq};
use ordered_float::OrderedFloat;
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use units::{kind::Dimensionless, AbsoluteKind, Kind, RelativeKind, Unit};

/// A difference or magnitude of kind `K`, such as a length or a duration.
/// Relative quantities add freely and scale by plain numbers.
#[derive(Clone, Copy, Debug)]
pub struct Rel<K: RelativeKind, F: Real = f64> {
    v: F,
    unit: Unit<K>,
}

impl<K: RelativeKind, F: Real> Rel<K, F> {
    pub fn new(value: F, unit: Unit<K>) -> Self {
        Self { v: value, unit }
    }

    /// A quantity in the standard unit of `K`, from a value in SI terms.
    pub fn from_si(si: F) -> Self {
        let unit = K::standard_unit();
        Self {
            v: F::of(unit.from_standard(si.as_f64())),
            unit,
        }
    }

    pub fn value(&self) -> F {
        self.v
    }

    pub fn unit(&self) -> Unit<K> {
        self.unit
    }

    /// The value in SI terms.
    pub fn si(&self) -> F {
        F::of(self.unit.to_standard(self.v.as_f64()))
    }

    pub fn in_unit(&self, unit: Unit<K>) -> F {
        if unit == self.unit {
            return self.v;
        }
        F::of(unit.from_standard(self.unit.to_standard(self.v.as_f64())))
    }

    /// The same quantity, expressed in `unit`.
    pub fn to(&self, unit: Unit<K>) -> Self {
        Self::new(self.in_unit(unit), unit)
    }

    /// `zero` at 0, `one` at 1, in the unit of `zero`. Ratios outside [0, 1]
    /// extrapolate.
    pub fn interpolate(zero: Self, one: Self, ratio: F) -> Self {
        Self::new(
            zero.v * (F::one() - ratio) + one.in_unit(zero.unit) * ratio,
            zero.unit,
        )
    }

    pub(crate) fn map(self, f: impl FnOnce(F) -> F) -> Self {
        Self::new(f(self.v), self.unit)
    }
}

impl<K: RelativeKind, F: Real> Add<Rel<K, F>> for Rel<K, F> {
    type Output = Rel<K, F>;

    fn add(self, other: Rel<K, F>) -> Self {
        if self.unit == other.unit {
            Self::new(self.v + other.v, self.unit)
        } else {
            Self::from_si(self.si() + other.si())
        }
    }
}

impl<K: RelativeKind, F: Real> AddAssign<Rel<K, F>> for Rel<K, F> {
    fn add_assign(&mut self, other: Rel<K, F>) {
        *self = *self + other;
    }
}

impl<K: RelativeKind, F: Real> Sub<Rel<K, F>> for Rel<K, F> {
    type Output = Rel<K, F>;

    fn sub(self, other: Rel<K, F>) -> Self {
        if self.unit == other.unit {
            Self::new(self.v - other.v, self.unit)
        } else {
            Self::from_si(self.si() - other.si())
        }
    }
}

impl<K: RelativeKind, F: Real> SubAssign<Rel<K, F>> for Rel<K, F> {
    fn sub_assign(&mut self, other: Rel<K, F>) {
        *self = *self - other;
    }
}

impl<K: RelativeKind, F: Real> Neg for Rel<K, F> {
    type Output = Rel<K, F>;

    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

/// A relative delta moves an absolute quantity: `Rel + Abs -> Abs`.
impl<R, K, F> Add<Abs<K, F>> for Rel<R, F>
where
    R: RelativeKind,
    K: AbsoluteKind<Relative = R>,
    F: Real,
{
    type Output = Abs<K, F>;

    fn add(self, other: Abs<K, F>) -> Abs<K, F> {
        other + self
    }
}

// Scaling by plain numbers is spelled out per storage type, so that these
// impls cannot overlap with the quantity by quantity products.
macro_rules! impl_scalar_ops {
    ($Num:ty) => {
        impl<K: RelativeKind> Mul<$Num> for Rel<K, $Num> {
            type Output = Rel<K, $Num>;

            fn mul(self, s: $Num) -> Self {
                self.map(|v| v * s)
            }
        }

        impl<K: RelativeKind> MulAssign<$Num> for Rel<K, $Num> {
            fn mul_assign(&mut self, s: $Num) {
                self.v *= s;
            }
        }

        impl<K: RelativeKind> Div<$Num> for Rel<K, $Num> {
            type Output = Rel<K, $Num>;

            fn div(self, s: $Num) -> Self {
                self.map(|v| v / s)
            }
        }

        impl<K: RelativeKind> DivAssign<$Num> for Rel<K, $Num> {
            fn div_assign(&mut self, s: $Num) {
                self.v /= s;
            }
        }

        impl<K: RelativeKind> Mul<Rel<K, $Num>> for $Num {
            type Output = Rel<K, $Num>;

            fn mul(self, q: Rel<K, $Num>) -> Rel<K, $Num> {
                q * self
            }
        }
    };
}

impl_scalar_ops!(f64);
impl_scalar_ops!(f32);

/// A pure number scales a quantity of any kind, keeping its unit.
impl<K: RelativeKind, F: Real> Mul<Rel<K, F>> for Rel<Dimensionless, F> {
    type Output = Rel<K, F>;

    fn mul(self, q: Rel<K, F>) -> Rel<K, F> {
        let s = self.si();
        q.map(|v| v * s)
    }
}

/// The ratio of two quantities of one kind is a pure number.
impl<K: RelativeKind, F: Real> Div<Rel<K, F>> for Rel<K, F> {
    type Output = Rel<Dimensionless, F>;

    fn div(self, other: Rel<K, F>) -> Rel<Dimensionless, F> {
        Rel::from_si(self.si() / other.si())
    }
}

impl<K: RelativeKind, F: Real> PartialEq for Rel<K, F> {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.si()) == OrderedFloat(other.si())
    }
}

impl<K: RelativeKind, F: Real> Eq for Rel<K, F> {}

impl<K: RelativeKind, F: Real> PartialOrd for Rel<K, F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: RelativeKind, F: Real> Ord for Rel<K, F> {
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.si()).cmp(&OrderedFloat(other.si()))
    }
}

impl<K: RelativeKind, F: Real> Hash for Rel<K, F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.si()).hash(state);
    }
}

impl<K: RelativeKind, F: Real> AbsDiffEq for Rel<K, F> {
    type Epsilon = F;

    fn default_epsilon() -> Self::Epsilon {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.si().abs_diff_eq(&other.si(), epsilon)
    }
}

impl<K: RelativeKind, F: Real> RelativeEq for Rel<K, F> {
    fn default_max_relative() -> Self::Epsilon {
        F::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.si().relative_eq(&other.si(), epsilon, max_relative)
    }
}

impl<K: RelativeKind, F: Real> fmt::Display for Rel<K, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v, f)?;
        write_suffix(f, self.unit)
    }
}

pub(crate) fn write_suffix<K: Kind>(f: &mut fmt::Formatter, unit: Unit<K>) -> fmt::Result {
    if unit.abbreviation().is_empty() {
        Ok(())
    } else {
        write!(f, " {}", unit.abbreviation())
    }
}

#[cfg(test)]
mod test {
    use crate::{Dimensionless, Length, Money, MoneyPerDuration};
    use approx::assert_relative_eq;
    use units::{DimensionlessUnit, DurationUnit, LengthUnit, MoneyPerDurationUnit, MoneyUnit};

    #[test]
    fn test_same_unit_keeps_the_unit() {
        let a = Length::new(3.0, LengthUnit::KILOMETER);
        let b = Length::new(2.0, LengthUnit::KILOMETER);
        let sum = a + b;
        assert_eq!(sum.unit(), LengthUnit::KILOMETER);
        assert_eq!(sum.value(), 5.0);
        assert_eq!((a - b).value(), 1.0);
    }

    #[test]
    fn test_mixed_units_fall_back_to_standard() {
        let sum = Length::new(1.0, LengthUnit::KILOMETER) + Length::new(1.0, LengthUnit::METER);
        assert_eq!(sum.unit(), LengthUnit::METER);
        assert_eq!(sum.value(), 1001.0);
        let mut total = Length::new(1.0, LengthUnit::FOOT);
        total += Length::new(1.0, LengthUnit::INCH);
        assert_relative_eq!(total.si(), 0.3302, epsilon = 1e-12);
        total -= Length::new(0.3302, LengthUnit::METER);
        assert_relative_eq!(total.si(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_scalar_ops() {
        let a = Length::new(3.0, LengthUnit::MILE);
        assert_eq!((a * 2.0f64).value(), 6.0);
        assert_eq!((2.0f64 * a).unit(), LengthUnit::MILE);
        assert_eq!((a / 2.0f64).value(), 1.5);
        assert_eq!((-a).value(), -3.0);
        let mut b = a;
        b *= 4.0f64;
        b /= 2.0f64;
        assert_eq!(b.value(), 6.0);
        let c = Length::<f32>::new(1.5, LengthUnit::METER) * 2.0f32;
        assert_eq!(c.value(), 3.0f32);
    }

    #[test]
    fn test_ratio_and_pure_number_scaling() {
        let ratio = Length::new(1.0, LengthUnit::KILOMETER) / Length::new(250.0, LengthUnit::METER);
        assert_relative_eq!(ratio.si(), 4.0);
        let percent = Dimensionless::new(50.0, DimensionlessUnit::PERCENT);
        let half = percent * Length::new(3.0, LengthUnit::FOOT);
        assert_eq!(half.unit(), LengthUnit::FOOT);
        assert_relative_eq!(half.value(), 1.5);
    }

    #[test]
    fn test_comparison_uses_si() {
        assert_eq!(
            Length::new(1.0, LengthUnit::KILOMETER),
            Length::new(1000.0, LengthUnit::METER)
        );
        assert!(Length::new(1.0, LengthUnit::MILE) > Length::new(1.0, LengthUnit::KILOMETER));
        let mut lengths = vec![
            Length::new(1.0, LengthUnit::YARD),
            Length::new(1.0, LengthUnit::INCH),
            Length::new(1.0, LengthUnit::FOOT),
        ];
        lengths.sort();
        assert_eq!(lengths[0].unit(), LengthUnit::INCH);
        assert_eq!(lengths[2].unit(), LengthUnit::YARD);
    }

    #[test]
    fn test_conversion_and_interpolation() {
        let a = Length::new(1.0, LengthUnit::KILOMETER);
        assert_relative_eq!(a.in_unit(LengthUnit::METER), 1000.0);
        assert_eq!(a.to(LengthUnit::METER).unit(), LengthUnit::METER);
        let b = Length::new(3000.0, LengthUnit::METER);
        let mid = Length::interpolate(a, b, 0.5);
        assert_eq!(mid.unit(), LengthUnit::KILOMETER);
        assert_relative_eq!(mid.value(), 2.0);
        assert_relative_eq!(Length::interpolate(a, b, 2.0).value(), 5.0);
    }

    #[test]
    fn test_money_rates_use_the_standard_rate_unit() {
        let wage = Money::new(36.0, MoneyUnit::US_DOLLAR)
            / crate::Duration::new(1.0, DurationUnit::HOUR);
        let rate = MoneyPerDuration::new(36.0, MoneyPerDurationUnit::USD_PER_HOUR);
        assert_relative_eq!(wage.si(), rate.si());
        assert_relative_eq!(rate.si(), 0.01);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{:.2}", Length::new(1.5, LengthUnit::KILOMETER)), "1.50 km");
        assert_eq!(Dimensionless::new(0.5, DimensionlessUnit::SI).to_string(), "0.5");
    }
}
