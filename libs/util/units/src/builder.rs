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
use crate::{
    registry,
    scale::check_factor,
    unit::{AbsoluteKind, Currency, Kind, MonetaryKind, RelativeKind, Unit, UnitDef},
    Scale, UnitError, UnitSystem,
};
use log::debug;
use std::marker::PhantomData;

/// Defines one unit of kind `K`.
///
/// Every unit is given a name, an abbreviation, and a unit system, then
/// exactly one way of finding its scale:
///
///   * `root()`: the unit is the standard unit of its kind.
///   * `scaled(f)`: `f` standard units.
///   * `scaled_from(u, f)`: `f` of the sibling unit `u`.
///   * a composition path of the kind, e.g. `mass_length_duration(kg, m, s)`
///     for power, which multiplies out the constituent scales.
///   * `absolute(f, offset, relative)` for units of absolute kinds.
///
/// Scales are resolved against the standard unit immediately, so no unit
/// ever refers to a chain of other units. Library units are built in `const`
/// context, where a bad definition fails compilation. Units built at runtime
/// go through `build`, which reports the same problems as a `UnitError`.
#[derive(Clone, Copy, Debug)]
pub struct UnitBuilder<K: Kind> {
    name: &'static str,
    abbreviation: &'static str,
    unit_system: UnitSystem,
    scale: Option<Scale>,
    root: bool,
    relative: Option<&'static UnitDef>,
    currency: Option<Currency>,
    error: Option<&'static str>,
    phantom: PhantomData<K>,
}

impl<K: Kind> UnitBuilder<K> {
    /// Names must be `'static`: units are never dropped.
    pub const fn new(
        name: &'static str,
        abbreviation: &'static str,
        unit_system: UnitSystem,
    ) -> Self {
        Self {
            name,
            abbreviation,
            unit_system,
            scale: None,
            root: false,
            relative: None,
            currency: None,
            error: None,
            phantom: PhantomData,
        }
    }

    const fn with_scale(mut self, scale: Scale) -> Self {
        if self.scale.is_some() && self.error.is_none() {
            self.error = Some("scale defined more than once");
        }
        if self.error.is_none() {
            self.error = scale.check();
        }
        self.scale = Some(scale);
        self
    }

    /// Multiplies out `(factor, exponent)` pairs of constituent units.
    pub(crate) const fn derived(mut self, constituents: &[(f64, i32)]) -> Self {
        let mut factor = 1.0;
        let mut i = 0;
        while i < constituents.len() {
            let (f, exponent) = constituents[i];
            if self.error.is_none() {
                self.error = match check_factor(f) {
                    Some(_) => Some("constituent unit has an invalid scale factor"),
                    None => None,
                };
            }
            factor *= powi(f, exponent);
            i += 1;
        }
        self.with_scale(Scale::linear(factor))
    }

    pub(crate) const fn resolved_scale(&self) -> Result<Scale, &'static str> {
        if let Some(reason) = self.error {
            return Err(reason);
        }
        match self.scale {
            Some(scale) => Ok(scale),
            None => Err("no scale was given"),
        }
    }

    /// Evaluates a library unit. Panics, and so fails const evaluation, on a
    /// bad definition.
    pub(crate) const fn definition(self) -> UnitDef {
        let scale = match self.resolved_scale() {
            Ok(scale) => scale,
            Err(reason) => panic!("{}", reason),
        };
        UnitDef {
            name: self.name,
            abbreviation: self.abbreviation,
            unit_system: self.unit_system,
            scale,
            library: true,
            relative: self.relative,
            currency: self.currency,
        }
    }

    /// Defines a unit at runtime. The unit lives for the rest of the process
    /// and is listed by `Unit::all` from now on.
    pub fn build(self) -> Result<Unit<K>, UnitError> {
        let scale = self
            .resolved_scale()
            .map_err(|reason| UnitError::configuration(K::NAME, self.name, reason))?;
        if self.root {
            return Err(UnitError::configuration(
                K::NAME,
                self.name,
                format!(
                    "{} already has the standard unit {}",
                    K::NAME,
                    K::standard_unit().name()
                ),
            ));
        }
        let def: &'static UnitDef = Box::leak(Box::new(UnitDef {
            name: self.name,
            abbreviation: self.abbreviation,
            unit_system: self.unit_system,
            scale,
            library: false,
            relative: self.relative,
            currency: self.currency,
        }));
        let unit = Unit::from_static(def);
        registry::register(unit);
        debug!(
            "defined {} unit {} [{}] = {:?}",
            K::NAME,
            unit.name(),
            unit.abbreviation(),
            unit.scale()
        );
        Ok(unit)
    }
}

impl<K: RelativeKind> UnitBuilder<K> {
    /// The standard unit of the kind.
    pub const fn root(mut self) -> Self {
        self.root = true;
        self.with_scale(Scale::IDENTITY)
    }

    /// `factor` standard units.
    pub const fn scaled(self, factor: f64) -> Self {
        self.with_scale(Scale::linear(factor))
    }

    /// `factor` of `unit`.
    pub const fn scaled_from(self, unit: Unit<K>, factor: f64) -> Self {
        self.with_scale(Scale::linear(unit.scale_factor() * factor))
    }

    /// `factor` of the sibling unit registered under `abbreviation`.
    pub fn scaled_from_abbreviation(
        self,
        abbreviation: &str,
        factor: f64,
    ) -> Result<Self, UnitError> {
        let unit = Unit::<K>::lookup(abbreviation).ok_or_else(|| {
            UnitError::configuration(
                K::NAME,
                self.name,
                format!("no {} unit has the abbreviation '{abbreviation}'", K::NAME),
            )
        })?;
        Ok(self.scaled_from(unit, factor))
    }
}

impl<K: AbsoluteKind> UnitBuilder<K> {
    /// `standard = (value + offset) * factor`, where `offset` is in this unit's
    /// own terms. Differences between values in this unit are measured in
    /// `relative`.
    /// `relative` must share this unit's factor.
    pub const fn absolute(mut self, factor: f64, offset: f64, relative: Unit<K::Relative>) -> Self {
        if self.error.is_none() && relative.scale_factor() != factor {
            self.error = Some("relative unit's scale factor differs from the absolute unit's");
        }
        self.relative = Some(relative.def());
        self.with_scale(Scale::offset_linear(factor, offset))
    }
}

impl<K: MonetaryKind> UnitBuilder<K> {
    pub const fn currency(mut self, code: &'static str, number: u16) -> Self {
        self.currency = Some(Currency::new(code, number));
        self
    }

    /// Carries the currency of `money` into a money-derived unit.
    pub(crate) const fn priced<M: MonetaryKind>(mut self, money: Unit<M>) -> Self {
        self.currency = money.currency();
        self
    }
}

const fn powi(base: f64, exponent: i32) -> f64 {
    let mut out = 1.0;
    let mut i = 0;
    while i < exponent.unsigned_abs() {
        out *= base;
        i += 1;
    }
    if exponent < 0 {
        1.0 / out
    } else {
        out
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        kind::{Direction, Length, Power},
        AngleUnit, DirectionUnit, LengthUnit,
    };
    use anyhow::Result;
    use approx::assert_relative_eq;

    #[test]
    fn test_const_powi() {
        assert_eq!(powi(10.0, 3), 1000.0);
        assert_eq!(powi(2.0, -2), 0.25);
        assert_eq!(powi(7.0, 0), 1.0);
    }

    #[test]
    fn test_build_scaled_from_sibling() -> Result<()> {
        let chain = UnitBuilder::<Length>::new("surveyor's chain", "ch", UnitSystem::Imperial)
            .scaled_from(LengthUnit::FOOT, 66.0)
            .build()?;
        assert_relative_eq!(chain.scale_factor(), 20.1168, epsilon = 1e-12);
        assert!(!chain.is_standard_unit());
        assert_eq!(LengthUnit::lookup("ch"), Some(chain));
        Ok(())
    }

    #[test]
    fn test_build_scaled_from_abbreviation() -> Result<()> {
        let rod = UnitBuilder::<Length>::new("rod", "rd", UnitSystem::Imperial)
            .scaled_from_abbreviation("ft", 16.5)?
            .build()?;
        assert_relative_eq!(rod.scale_factor(), 5.0292, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_unknown_sibling_is_a_configuration_error() {
        let err = UnitBuilder::<Length>::new("pace", "pace", UnitSystem::Other)
            .scaled_from_abbreviation("cubit", 2.0)
            .unwrap_err();
        assert!(matches!(err, UnitError::Configuration { kind: "Length", .. }));
    }

    #[test]
    fn test_zero_factor_is_a_configuration_error() {
        let err = UnitBuilder::<Length>::new("nothing", "0m", UnitSystem::Other)
            .scaled(0.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, UnitError::Configuration { .. }));
        assert!(err.to_string().contains("zero"));
    }

    #[test]
    fn test_zero_constituent_is_a_configuration_error() {
        let err = UnitBuilder::<Power>::new("broken watt", "bW", UnitSystem::Other)
            .derived(&[(1.0, 1), (0.0, 2), (1.0, -3)])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("constituent"));
    }

    #[test]
    fn test_second_standard_unit_is_rejected() {
        let err = UnitBuilder::<Length>::new("other meter", "om", UnitSystem::Other)
            .root()
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("already has the standard unit meter"));
    }

    #[test]
    fn test_missing_scale() {
        assert!(UnitBuilder::<Length>::new("vague", "?", UnitSystem::Other)
            .build()
            .is_err());
    }

    #[test]
    fn test_build_absolute() -> Result<()> {
        let gradian_north = UnitBuilder::<Direction>::new("gradian north", "gN", UnitSystem::Other)
            .absolute(std::f64::consts::PI / 200.0, 100.0, AngleUnit::GRAD)
            .build()?;
        assert_relative_eq!(gradian_north.to_standard(0.0), std::f64::consts::FRAC_PI_2);
        assert_eq!(gradian_north.relative_unit(), AngleUnit::GRAD);
        assert_relative_eq!(
            gradian_north.to_standard(50.0),
            DirectionUnit::NORTH_DEGREE.to_standard(45.0),
            epsilon = 1e-12
        );
        Ok(())
    }

    #[test]
    fn test_absolute_with_mismatched_relative_is_rejected() {
        let err = UnitBuilder::<Direction>::new("skewed north", "sN", UnitSystem::Other)
            .absolute(std::f64::consts::PI / 180.0, 90.0, AngleUnit::RADIAN)
            .build()
            .unwrap_err();
        assert!(matches!(err, UnitError::Configuration { kind: "Direction", .. }));
        assert!(err.to_string().contains("relative unit"));
        assert!(DirectionUnit::lookup("sN").is_none());
    }
}
