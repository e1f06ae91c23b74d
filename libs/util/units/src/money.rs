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
    builder::UnitBuilder,
    kind::{
        Money, MoneyPerArea, MoneyPerDuration, MoneyPerEnergy, MoneyPerLength, MoneyPerMass,
        MoneyPerVolume,
    },
    registry,
    unit::{Kind, MonetaryKind, Unit},
    AreaUnit, DurationUnit, EnergyUnit, LengthUnit, MassUnit, MoneyPerAreaUnit,
    MoneyPerDurationUnit, MoneyPerEnergyUnit, MoneyPerLengthUnit, MoneyPerMassUnit,
    MoneyPerVolumeUnit, MoneyUnit, UnitError, UnitSystem, VolumeUnit,
};
use log::{info, trace};
use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};

/// The standard units of the money kinds. All of them are replaced at once,
/// so readers never see one currency for money and another for money per hour.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MoneyStandards {
    pub(crate) money: MoneyUnit,
    pub(crate) per_area: MoneyPerAreaUnit,
    pub(crate) per_energy: MoneyPerEnergyUnit,
    pub(crate) per_length: MoneyPerLengthUnit,
    pub(crate) per_mass: MoneyPerMassUnit,
    pub(crate) per_duration: MoneyPerDurationUnit,
    pub(crate) per_volume: MoneyPerVolumeUnit,
}

impl Default for MoneyStandards {
    fn default() -> Self {
        Self {
            money: MoneyUnit::US_DOLLAR,
            per_area: MoneyPerAreaUnit::USD_PER_SQUARE_METER,
            per_energy: MoneyPerEnergyUnit::USD_PER_KILOWATT_HOUR,
            per_length: MoneyPerLengthUnit::USD_PER_METER,
            per_mass: MoneyPerMassUnit::USD_PER_KILOGRAM,
            per_duration: MoneyPerDurationUnit::USD_PER_HOUR,
            per_volume: MoneyPerVolumeUnit::USD_PER_CUBIC_METER,
        }
    }
}

pub(crate) static STANDARDS: Lazy<RwLock<MoneyStandards>> =
    Lazy::new(|| RwLock::new(MoneyStandards::default()));

// Held while a new table is resolved, so that two writers cannot both build
// the same derived unit.
static CASCADE: Mutex<()> = parking_lot::const_mutex(());

impl MoneyStandards {
    /// The table for `money`. Derived standards are denominated in square
    /// meters, kilowatt hours, meters, kilograms, hours, and cubic meters,
    /// reusing any registered unit with the same currency and scale.
    pub(crate) fn resolve(money: MoneyUnit) -> Result<Self, UnitError> {
        if money.currency().is_none() {
            return Err(UnitError::configuration(
                Money::NAME,
                money.name(),
                "a standard money unit needs a currency",
            ));
        }
        Ok(Self {
            money,
            per_area: per_unit(
                money,
                AreaUnit::SQUARE_METER,
                UnitBuilder::<MoneyPerArea>::money_area,
            )?,
            per_energy: per_unit(
                money,
                EnergyUnit::KILOWATT_HOUR,
                UnitBuilder::<MoneyPerEnergy>::money_energy,
            )?,
            per_length: per_unit(
                money,
                LengthUnit::METER,
                UnitBuilder::<MoneyPerLength>::money_length,
            )?,
            per_mass: per_unit(
                money,
                MassUnit::KILOGRAM,
                UnitBuilder::<MoneyPerMass>::money_mass,
            )?,
            per_duration: per_unit(
                money,
                DurationUnit::HOUR,
                UnitBuilder::<MoneyPerDuration>::money_duration,
            )?,
            per_volume: per_unit(
                money,
                VolumeUnit::CUBIC_METER,
                UnitBuilder::<MoneyPerVolume>::money_volume,
            )?,
        })
    }
}

fn per_unit<K: MonetaryKind, D: Kind>(
    money: MoneyUnit,
    per: Unit<D>,
    path: fn(UnitBuilder<K>, MoneyUnit, Unit<D>) -> UnitBuilder<K>,
) -> Result<Unit<K>, UnitError> {
    let abbreviation = format!("{}/{}", money.abbreviation(), per.abbreviation());
    let scale = path(UnitBuilder::new("", "", UnitSystem::Other), money, per)
        .resolved_scale()
        .map_err(|reason| UnitError::configuration(K::NAME, abbreviation.as_str(), reason))?;
    let code = money.currency().map(|c| c.code());
    if let Some(unit) =
        registry::find::<K>(|u| u.scale() == scale && u.currency().map(|c| c.code()) == code)
    {
        trace!("reusing {} unit {} for {}", K::NAME, unit.abbreviation(), money);
        return Ok(unit);
    }
    let name = format!("{} per {}", money.name(), per.name());
    path(
        UnitBuilder::new(leak(name), leak(abbreviation), UnitSystem::Other),
        money,
        per,
    )
    .build()
}

fn leak(s: String) -> &'static str {
    Box::leak(s.into_boxed_str())
}

impl Unit<Money> {
    /// Makes `money` the standard unit of money, and re-derives the standard
    /// units of every money-per-X kind in the same currency. Quantities
    /// created from SI values afterwards are expressed in the new currency.
    pub fn set_standard_unit(money: MoneyUnit) -> Result<(), UnitError> {
        let _cascade = CASCADE.lock();
        let standards = MoneyStandards::resolve(money)?;
        info!(
            "standard money unit is now {}, money per duration is {}",
            money, standards.per_duration
        );
        *STANDARDS.write() = standards;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;
    use approx::assert_relative_eq;

    #[test]
    fn test_resolve_reuses_library_units() -> Result<()> {
        let euro = MoneyStandards::resolve(MoneyUnit::EURO)?;
        assert_eq!(euro.per_duration.abbreviation(), "€/h");
        assert!(euro.per_duration.is_standard_unit());
        assert_eq!(euro.per_energy, MoneyPerEnergyUnit::EUR_PER_KILOWATT_HOUR);
        assert_eq!(euro.per_area, MoneyPerAreaUnit::EUR_PER_SQUARE_METER);
        assert_eq!(euro.per_volume, MoneyPerVolumeUnit::EUR_PER_CUBIC_METER);
        Ok(())
    }

    #[test]
    fn test_resolve_builds_missing_units() -> Result<()> {
        let rand = UnitBuilder::<Money>::new("South African rand", "R", UnitSystem::Other)
            .scaled(1.0)
            .currency("ZAR", 710)
            .build()?;
        let standards = MoneyStandards::resolve(rand)?;
        assert_eq!(standards.per_duration.abbreviation(), "R/h");
        assert_eq!(standards.per_duration.name(), "South African rand per hour");
        assert_eq!(standards.per_duration.currency().map(|c| c.code()), Some("ZAR"));
        assert_relative_eq!(standards.per_duration.scale_factor(), 1.0 / 3600.0);
        assert!(!standards.per_mass.is_standard_unit());

        let again = MoneyStandards::resolve(rand)?;
        assert_eq!(again.per_duration.name(), standards.per_duration.name());
        assert_eq!(
            MoneyPerDurationUnit::all()
                .iter()
                .filter(|u| u.abbreviation() == "R/h")
                .count(),
            1
        );
        Ok(())
    }

    #[test]
    fn test_money_without_currency_is_rejected() -> Result<()> {
        let token = UnitBuilder::<Money>::new("token", "tok", UnitSystem::Other)
            .scaled(1.0)
            .build()?;
        assert!(MoneyStandards::resolve(token).is_err());
        Ok(())
    }
}
