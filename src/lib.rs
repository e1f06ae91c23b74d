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

//! Quanta: strongly typed physical quantities.
//!
//! ```
//! use quanta::{Area, Length, LengthUnit};
//!
//! let side = Length::new(3.0, LengthUnit::METER);
//! let area: Area = side * Length::new(2.0, LengthUnit::METER);
//! assert_eq!(area.si(), 6.0);
//! ```
//!
//! Quantity aliases (`Length`, `Time`, `MoneyPerDuration`) live at the top
//! level; the kind markers they are built on are in `kind`, next to their
//! unit tables.
pub use quantity::*;
pub use units::{
    kind::{
        AbsoluteTemperatureUnit, AccelerationUnit, AmountOfSubstanceUnit, AngleUnit, AreaUnit,
        DensityUnit, DimensionlessUnit, DirectionUnit, DurationUnit, ElectricalChargeUnit,
        ElectricalConductanceUnit, ElectricalCurrentUnit, ElectricalPotentialUnit,
        ElectricalResistanceUnit, EnergyUnit, FlowMassUnit, FlowVolumeUnit, ForceUnit,
        FrequencyUnit, LengthUnit, LinearDensityUnit, LuminousIntensityUnit, MassUnit,
        MoneyPerAreaUnit, MoneyPerDurationUnit, MoneyPerEnergyUnit, MoneyPerLengthUnit,
        MoneyPerMassUnit, MoneyPerVolumeUnit, MoneyUnit, PositionUnit, PowerUnit, PressureUnit,
        SolidAngleUnit, SpeedUnit, TemperatureUnit, TimeUnit, TorqueUnit, VolumeUnit,
    },
    AbsoluteKind, Currency, Kind, MonetaryKind, RelativeKind, Scale, SiDimensions, Unit,
    UnitBuilder, UnitError, UnitSystem, SI_SYMBOLS,
};

pub mod kind {
    pub use units::kind::*;
}

pub mod locale {
    pub use units::locale::*;
}

pub mod si {
    pub use units::si::*;
}
