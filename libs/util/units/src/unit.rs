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
use crate::{locale, registry, Scale, SiDimensions, UnitError, UnitSystem};
use std::{
    fmt,
    fmt::Debug,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

/// A dimension of physical quantity. Units of the same kind convert into
/// each other; units of different kinds never do.
pub trait Kind: Copy + Debug + Default + Eq + Hash + Ord + Send + Sync + 'static {
    const NAME: &'static str;

    /// Exponents of the SI base dimensions, e.g. `kgm2/s3` for power.
    const SI_SIGNATURE: &'static str;

    /// Units defined by this crate, standard unit first.
    const LIBRARY_UNITS: &'static [Unit<Self>];

    fn standard_unit() -> Unit<Self>;
}

/// Kinds that measure a difference or a magnitude and add freely.
pub trait RelativeKind: Kind {}

/// Kinds that measure from a fixed origin. Their units are offset-linear
/// and each one is paired with a unit of the relative kind.
pub trait AbsoluteKind: Kind {
    type Relative: RelativeKind;
}

/// Kinds whose units carry a currency.
pub trait MonetaryKind: RelativeKind {}

/// ISO 4217 identity of a currency.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Currency {
    code: &'static str,
    number: u16,
}

impl Currency {
    pub const fn new(code: &'static str, number: u16) -> Self {
        Self { code, number }
    }

    pub const fn code(&self) -> &'static str {
        self.code
    }

    pub const fn number(&self) -> u16 {
        self.number
    }
}

/// The resolved definition behind a unit handle. Lives for the whole process.
#[derive(Clone, Copy, Debug)]
pub struct UnitDef {
    pub(crate) name: &'static str,
    pub(crate) abbreviation: &'static str,
    pub(crate) unit_system: UnitSystem,
    pub(crate) scale: Scale,
    pub(crate) library: bool,
    pub(crate) relative: Option<&'static UnitDef>,
    pub(crate) currency: Option<Currency>,
}

/// One unit of kind `K`: a cheap, copyable handle.
#[derive(Clone, Copy)]
pub struct Unit<K: Kind> {
    def: &'static UnitDef,
    phantom: PhantomData<K>,
}

impl<K: Kind> Unit<K> {
    pub(crate) const fn from_static(def: &'static UnitDef) -> Self {
        Self {
            def,
            phantom: PhantomData,
        }
    }

    pub(crate) const fn def(&self) -> &'static UnitDef {
        self.def
    }

    /// The standard unit of this kind.
    pub fn standard() -> Self {
        K::standard_unit()
    }

    /// Every registered unit of this kind: the library units, then any
    /// units built at runtime.
    pub fn all() -> Vec<Self> {
        registry::units::<K>()
    }

    pub fn lookup(abbreviation: &str) -> Option<Self> {
        registry::find::<K>(|unit| unit.abbreviation() == abbreviation)
    }

    pub const fn name(&self) -> &'static str {
        self.def.name
    }

    pub const fn abbreviation(&self) -> &'static str {
        self.def.abbreviation
    }

    pub const fn unit_system(&self) -> UnitSystem {
        self.def.unit_system
    }

    pub const fn scale(&self) -> Scale {
        self.def.scale
    }

    pub const fn scale_factor(&self) -> f64 {
        self.def.scale.factor()
    }

    pub fn to_standard(&self, value: f64) -> f64 {
        self.def.scale.to_standard(value)
    }

    pub fn from_standard(&self, value: f64) -> f64 {
        self.def.scale.from_standard(value)
    }

    pub fn kind_name(&self) -> &'static str {
        K::NAME
    }

    pub fn si_signature(&self) -> &'static str {
        K::SI_SIGNATURE
    }

    pub fn si_dimensions(&self) -> Result<SiDimensions, UnitError> {
        SiDimensions::parse(K::SI_SIGNATURE)
    }

    /// True for units defined by this crate; false for units built at runtime.
    pub const fn is_standard_unit(&self) -> bool {
        self.def.library
    }

    pub fn localized_name(&self) -> Result<String, UnitError> {
        self.localized("name", self.name())
    }

    pub fn localized_abbreviation(&self) -> Result<String, UnitError> {
        self.localized("abbreviation", self.abbreviation())
    }

    fn localized(&self, field: &str, literal: &'static str) -> Result<String, UnitError> {
        if !self.is_standard_unit() {
            return Ok(literal.to_owned());
        }
        let key = format!("{}Unit.{}.{}", K::NAME, self.abbreviation(), field);
        locale::resolve(&key).unwrap_or_else(|| Ok(literal.to_owned()))
    }
}

impl<K: AbsoluteKind> Unit<K> {
    /// Offset of this unit's origin from the standard origin, in standard terms.
    pub const fn offset(&self) -> f64 {
        self.def.scale.offset()
    }

    /// The relative unit that measures differences between values in this unit.
    pub fn relative_unit(&self) -> Unit<K::Relative> {
        self.def
            .relative
            .map(Unit::from_static)
            .unwrap_or_else(Unit::standard)
    }
}

impl<K: MonetaryKind> Unit<K> {
    pub const fn currency(&self) -> Option<Currency> {
        self.def.currency
    }

    /// Compares scale alone, so that e.g. US$ and € are the same unit here.
    pub fn equals_ignore_naming(&self, other: &Self) -> bool {
        self.def.scale == other.def.scale
    }
}

impl<K: Kind> PartialEq for Unit<K> {
    fn eq(&self, other: &Self) -> bool {
        self.def.scale == other.def.scale
            && self.def.currency.map(|c| c.code) == other.def.currency.map(|c| c.code)
    }
}

impl<K: Kind> Eq for Unit<K> {}

impl<K: Kind> Hash for Unit<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.def.scale.hash(state);
        self.def.currency.map(|c| c.code).hash(state);
    }
}

impl<K: Kind> Debug for Unit<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Unit")
            .field("kind", &K::NAME)
            .field("name", &self.def.name)
            .field("abbreviation", &self.def.abbreviation)
            .field("scale", &self.def.scale)
            .finish()
    }
}

impl<K: Kind> fmt::Display for Unit<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.def.abbreviation)
    }
}

#[cfg(test)]
mod test {
    use crate::{
        AngleUnit, AreaUnit, DirectionUnit, DurationUnit, LengthUnit, MoneyUnit, UnitSystem,
    };
    use std::collections::HashSet;

    #[test]
    fn test_equality_ignores_names() {
        assert_eq!(AngleUnit::RADIAN, AngleUnit::RADIAN);
        assert_ne!(AngleUnit::RADIAN, AngleUnit::DEGREE);
        // Same resolved scale, different names.
        assert_eq!(AreaUnit::HECTARE, AreaUnit::SQUARE_HECTOMETER);
        let set = [AreaUnit::HECTARE, AreaUnit::SQUARE_HECTOMETER]
            .into_iter()
            .collect::<HashSet<_>>();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_absolute_equality_includes_offset() {
        assert_eq!(
            DirectionUnit::EAST_DEGREE.scale_factor(),
            DirectionUnit::NORTH_DEGREE.scale_factor()
        );
        assert_ne!(DirectionUnit::EAST_DEGREE, DirectionUnit::NORTH_DEGREE);
        assert_eq!(DirectionUnit::NORTH_DEGREE.relative_unit(), AngleUnit::DEGREE);
    }

    #[test]
    fn test_money_equality_includes_currency() {
        assert_ne!(MoneyUnit::US_DOLLAR, MoneyUnit::EURO);
        assert!(MoneyUnit::US_DOLLAR.equals_ignore_naming(&MoneyUnit::EURO));
        assert_eq!(MoneyUnit::EURO.currency().map(|c| c.number()), Some(978));
    }

    #[test]
    fn test_metadata() {
        assert_eq!(LengthUnit::KILOMETER.name(), "kilometer");
        assert_eq!(LengthUnit::KILOMETER.to_string(), "km");
        assert_eq!(LengthUnit::KILOMETER.unit_system(), UnitSystem::SiBase);
        assert_eq!(LengthUnit::KILOMETER.si_signature(), "m");
        assert_eq!(LengthUnit::KILOMETER.kind_name(), "Length");
        assert!(LengthUnit::KILOMETER.is_standard_unit());
        assert_eq!(LengthUnit::standard(), LengthUnit::METER);
        assert_eq!(DurationUnit::lookup("h"), Some(DurationUnit::HOUR));
        assert_eq!(DurationUnit::lookup("fortnight"), None);
    }
}
