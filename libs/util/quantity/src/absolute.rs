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
use crate::{relative::write_suffix, Real, Rel};
use approx::{AbsDiffEq, RelativeEq};
use ordered_float::OrderedFloat;
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Sub, SubAssign},
};
use units::{AbsoluteKind, Unit};

/// A quantity measured from a fixed origin, such as a position or a
/// temperature. Absolute quantities never add to each other: a relative
/// quantity moves them, and the difference of two is relative.
#[derive(Clone, Copy, Debug)]
pub struct Abs<K: AbsoluteKind, F: Real = f64> {
    v: F,
    unit: Unit<K>,
}

impl<K: AbsoluteKind, F: Real> Abs<K, F> {
    pub fn new(value: F, unit: Unit<K>) -> Self {
        Self { v: value, unit }
    }

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

    pub fn si(&self) -> F {
        F::of(self.unit.to_standard(self.v.as_f64()))
    }

    pub fn in_unit(&self, unit: Unit<K>) -> F {
        if unit == self.unit {
            return self.v;
        }
        F::of(unit.from_standard(self.unit.to_standard(self.v.as_f64())))
    }

    pub fn to(&self, unit: Unit<K>) -> Self {
        Self::new(self.in_unit(unit), unit)
    }

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

impl<K: AbsoluteKind, F: Real> Add<Rel<K::Relative, F>> for Abs<K, F> {
    type Output = Abs<K, F>;

    fn add(self, delta: Rel<K::Relative, F>) -> Self {
        if delta.unit() == self.unit.relative_unit() {
            Self::new(self.v + delta.value(), self.unit)
        } else {
            Self::from_si(self.si() + delta.si())
        }
    }
}

impl<K: AbsoluteKind, F: Real> AddAssign<Rel<K::Relative, F>> for Abs<K, F> {
    fn add_assign(&mut self, delta: Rel<K::Relative, F>) {
        *self = *self + delta;
    }
}

impl<K: AbsoluteKind, F: Real> Sub<Rel<K::Relative, F>> for Abs<K, F> {
    type Output = Abs<K, F>;

    fn sub(self, delta: Rel<K::Relative, F>) -> Self {
        if delta.unit() == self.unit.relative_unit() {
            Self::new(self.v - delta.value(), self.unit)
        } else {
            Self::from_si(self.si() - delta.si())
        }
    }
}

impl<K: AbsoluteKind, F: Real> SubAssign<Rel<K::Relative, F>> for Abs<K, F> {
    fn sub_assign(&mut self, delta: Rel<K::Relative, F>) {
        *self = *self - delta;
    }
}

impl<K: AbsoluteKind, F: Real> Sub<Abs<K, F>> for Abs<K, F> {
    type Output = Rel<K::Relative, F>;

    fn sub(self, other: Abs<K, F>) -> Rel<K::Relative, F> {
        if self.unit == other.unit {
            Rel::new(self.v - other.v, self.unit.relative_unit())
        } else {
            Rel::from_si(self.si() - other.si())
        }
    }
}

impl<K: AbsoluteKind, F: Real> PartialEq for Abs<K, F> {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.si()) == OrderedFloat(other.si())
    }
}

impl<K: AbsoluteKind, F: Real> Eq for Abs<K, F> {}

impl<K: AbsoluteKind, F: Real> PartialOrd for Abs<K, F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: AbsoluteKind, F: Real> Ord for Abs<K, F> {
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.si()).cmp(&OrderedFloat(other.si()))
    }
}

impl<K: AbsoluteKind, F: Real> Hash for Abs<K, F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.si()).hash(state);
    }
}

impl<K: AbsoluteKind, F: Real> AbsDiffEq for Abs<K, F> {
    type Epsilon = F;

    fn default_epsilon() -> Self::Epsilon {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.si().abs_diff_eq(&other.si(), epsilon)
    }
}

impl<K: AbsoluteKind, F: Real> RelativeEq for Abs<K, F> {
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

impl<K: AbsoluteKind, F: Real> fmt::Display for Abs<K, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.v, f)?;
        write_suffix(f, self.unit)
    }
}

#[cfg(test)]
mod test {
    use crate::{AbsoluteTemperature, Angle, Direction, Temperature, Time};
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};
    use units::{
        AbsoluteTemperatureUnit, AngleUnit, DirectionUnit, DurationUnit, TemperatureUnit, TimeUnit,
    };

    #[test]
    fn test_north_degree_is_a_quarter_turn_from_east() {
        let north = Direction::new(0.0, DirectionUnit::NORTH_DEGREE);
        assert_relative_eq!(north.si(), FRAC_PI_2);
        assert_relative_eq!(north.in_unit(DirectionUnit::EAST_DEGREE), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_delta_in_the_paired_unit_keeps_the_unit() {
        let heading = Direction::new(10.0, DirectionUnit::NORTH_DEGREE);
        let turned = heading + Angle::new(20.0, AngleUnit::DEGREE);
        assert_eq!(turned.unit(), DirectionUnit::NORTH_DEGREE);
        assert_eq!(turned.value(), 30.0);
        let back = turned - Angle::new(20.0, AngleUnit::DEGREE);
        assert_eq!(back.value(), 10.0);
    }

    #[test]
    fn test_delta_in_another_unit_falls_back_to_standard() {
        let heading = Direction::new(0.0, DirectionUnit::EAST_DEGREE);
        let turned = heading + Angle::new(PI, AngleUnit::RADIAN);
        assert_eq!(turned.unit(), DirectionUnit::EAST_RADIAN);
        assert_relative_eq!(turned.si(), PI);
        let mut moved = heading;
        moved += Angle::new(90.0, AngleUnit::DEGREE);
        moved -= Angle::new(FRAC_PI_2, AngleUnit::RADIAN);
        assert_relative_eq!(moved.si(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_difference_of_absolutes_is_relative() {
        let freezing = AbsoluteTemperature::new(32.0, AbsoluteTemperatureUnit::DEGREE_FAHRENHEIT);
        let boiling = AbsoluteTemperature::new(212.0, AbsoluteTemperatureUnit::DEGREE_FAHRENHEIT);
        let rise: Temperature = boiling - freezing;
        assert_eq!(rise.unit(), TemperatureUnit::DEGREE_FAHRENHEIT);
        assert_eq!(rise.value(), 180.0);
        assert_relative_eq!(rise.si(), 100.0, epsilon = 1e-9);

        let body = AbsoluteTemperature::new(37.0, AbsoluteTemperatureUnit::DEGREE_CELSIUS);
        let diff = body - freezing;
        assert_eq!(diff.unit(), TemperatureUnit::KELVIN);
        assert_relative_eq!(diff.si(), 37.0, epsilon = 1e-9);
    }

    #[test]
    fn test_relative_plus_absolute() {
        let epoch = Time::new(0.0, TimeUnit::J2000_DAY);
        let later = crate::Duration::new(12.0, DurationUnit::HOUR) + epoch;
        assert_eq!(later.unit(), TimeUnit::BASE_SECOND);
        let next_day = crate::Duration::new(1.0, DurationUnit::DAY) + epoch;
        assert_eq!(next_day.unit(), TimeUnit::J2000_DAY);
        assert_eq!(next_day.value(), 1.0);
        assert_relative_eq!(later.in_unit(TimeUnit::J2000_HOUR), 12.0, epsilon = 1e-6);
    }

    #[test]
    fn test_display() {
        let t = AbsoluteTemperature::new(21.5, AbsoluteTemperatureUnit::DEGREE_CELSIUS);
        assert_eq!(t.to_string(), "21.5 °C");
        assert!(t > AbsoluteTemperature::new(21.5, AbsoluteTemperatureUnit::DEGREE_FAHRENHEIT));
    }
}
