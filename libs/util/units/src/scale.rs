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
use crate::UnitError;
use std::hash::{Hash, Hasher};

/// The transform between a value in some unit and the same value in the
/// standard unit of its kind.
#[derive(Clone, Copy, Debug)]
pub enum Scale {
    /// `standard = value * factor`
    Linear { factor: f64 },

    /// `standard = value * factor + offset`, with `offset` already in
    /// standard-unit terms.
    OffsetLinear { factor: f64, offset: f64 },
}

impl Scale {
    pub const IDENTITY: Scale = Scale::Linear { factor: 1.0 };

    pub const fn linear(factor: f64) -> Self {
        Self::Linear { factor }
    }

    /// The offset is given in the unit's own terms, as in "0 degrees Celsius
    /// is 273.15 kelvin past the origin", and is stored in standard terms.
    pub const fn offset_linear(factor: f64, offset: f64) -> Self {
        Self::OffsetLinear {
            factor,
            offset: offset * factor,
        }
    }

    pub fn try_linear(factor: f64) -> Result<Self, UnitError> {
        match check_factor(factor) {
            None => Ok(Self::linear(factor)),
            Some(reason) => Err(UnitError::configuration("Scale", factor.to_string(), reason)),
        }
    }

    pub fn try_offset_linear(factor: f64, offset: f64) -> Result<Self, UnitError> {
        let reason = match check_factor(factor) {
            None => check_offset(offset),
            reason => reason,
        };
        match reason {
            None => Ok(Self::offset_linear(factor, offset)),
            Some(reason) => Err(UnitError::configuration(
                "Scale",
                format!("{factor}+{offset}"),
                reason,
            )),
        }
    }

    pub const fn factor(&self) -> f64 {
        match self {
            Self::Linear { factor } => *factor,
            Self::OffsetLinear { factor, .. } => *factor,
        }
    }

    /// Offset to the standard origin, in standard-unit terms.
    pub const fn offset(&self) -> f64 {
        match self {
            Self::Linear { .. } => 0.0,
            Self::OffsetLinear { offset, .. } => *offset,
        }
    }

    pub const fn is_offset(&self) -> bool {
        matches!(self, Self::OffsetLinear { .. })
    }

    pub fn to_standard(&self, value: f64) -> f64 {
        match self {
            Self::Linear { factor } => value * factor,
            Self::OffsetLinear { factor, offset } => value * factor + offset,
        }
    }

    pub fn from_standard(&self, value: f64) -> f64 {
        match self {
            Self::Linear { factor } => value / factor,
            Self::OffsetLinear { factor, offset } => (value - offset) / factor,
        }
    }

    pub(crate) const fn check(&self) -> Option<&'static str> {
        match check_factor(self.factor()) {
            None => check_offset(self.offset()),
            reason => reason,
        }
    }
}

// Bitwise, so that equality and hashing agree.
impl PartialEq for Scale {
    fn eq(&self, other: &Self) -> bool {
        self.factor().to_bits() == other.factor().to_bits()
            && self.offset().to_bits() == other.offset().to_bits()
    }
}

impl Eq for Scale {}

impl Hash for Scale {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.factor().to_bits().hash(state);
        self.offset().to_bits().hash(state);
    }
}

#[allow(clippy::eq_op)]
pub(crate) const fn check_factor(factor: f64) -> Option<&'static str> {
    if factor != factor {
        Some("scale factor is NaN")
    } else if factor == 0.0 {
        Some("scale factor is zero")
    } else if factor == f64::INFINITY || factor == f64::NEG_INFINITY {
        Some("scale factor is infinite")
    } else {
        None
    }
}

#[allow(clippy::eq_op)]
const fn check_offset(offset: f64) -> Option<&'static str> {
    if offset != offset || offset == f64::INFINITY || offset == f64::NEG_INFINITY {
        Some("offset is not finite")
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_linear_round_trip() {
        let s = Scale::linear(0.3048);
        assert_relative_eq!(s.to_standard(10.0), 3.048);
        assert_relative_eq!(s.from_standard(s.to_standard(-7.25)), -7.25);
        assert_eq!(s.offset(), 0.0);
        assert!(!s.is_offset());
    }

    #[test]
    fn test_offset_is_stored_in_standard_terms() {
        let celsius = Scale::offset_linear(1.0, 273.15);
        assert_relative_eq!(celsius.to_standard(0.0), 273.15);
        assert_relative_eq!(celsius.from_standard(373.15), 100.0, epsilon = 1e-12);

        let fahrenheit = Scale::offset_linear(5.0 / 9.0, 459.67);
        assert_relative_eq!(fahrenheit.to_standard(32.0), 273.15, epsilon = 1e-12);
        assert_relative_eq!(fahrenheit.offset(), 459.67 * 5.0 / 9.0);

        let north = Scale::offset_linear(std::f64::consts::PI / 180.0, 90.0);
        assert_relative_eq!(north.to_standard(0.0), FRAC_PI_2);
    }

    #[test]
    fn test_reject_bad_factors() {
        assert!(Scale::try_linear(0.0).is_err());
        assert!(Scale::try_linear(f64::NAN).is_err());
        assert!(Scale::try_linear(f64::INFINITY).is_err());
        assert!(Scale::try_offset_linear(1.0, f64::NAN).is_err());
        assert_eq!(Scale::try_linear(2.0), Ok(Scale::linear(2.0)));
    }

    #[test]
    fn test_equality_is_bitwise() {
        assert_eq!(Scale::linear(1.0), Scale::IDENTITY);
        assert_ne!(Scale::linear(1.0), Scale::offset_linear(1.0, 273.15));
        assert_ne!(Scale::linear(1.0), Scale::linear(1.0 + f64::EPSILON));
    }
}
