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
mod angle;
mod base;
mod dimensionless;
mod electrical;
mod length;
mod mass;
mod mechanics;
mod money;
mod temperature;
mod time;

pub use crate::kind::{
    angle::{Angle, AngleUnit, Direction, DirectionUnit, SolidAngle, SolidAngleUnit},
    base::{AmountOfSubstance, AmountOfSubstanceUnit, LuminousIntensity, LuminousIntensityUnit},
    dimensionless::{Dimensionless, DimensionlessUnit},
    electrical::{
        ElectricalCharge, ElectricalChargeUnit, ElectricalConductance, ElectricalConductanceUnit,
        ElectricalCurrent, ElectricalCurrentUnit, ElectricalPotential, ElectricalPotentialUnit,
        ElectricalResistance, ElectricalResistanceUnit,
    },
    length::{
        Area, AreaUnit, Length, LengthUnit, LinearDensity, LinearDensityUnit, Position,
        PositionUnit, Volume, VolumeUnit,
    },
    mass::{Density, DensityUnit, FlowMass, FlowMassUnit, Mass, MassUnit},
    mechanics::{
        Acceleration, AccelerationUnit, Energy, EnergyUnit, FlowVolume, FlowVolumeUnit, Force,
        ForceUnit, Power, PowerUnit, Pressure, PressureUnit, Speed, SpeedUnit, Torque, TorqueUnit,
    },
    money::{
        Money, MoneyPerArea, MoneyPerAreaUnit, MoneyPerDuration, MoneyPerDurationUnit,
        MoneyPerEnergy, MoneyPerEnergyUnit, MoneyPerLength, MoneyPerLengthUnit, MoneyPerMass,
        MoneyPerMassUnit, MoneyPerVolume, MoneyPerVolumeUnit, MoneyUnit,
    },
    temperature::{AbsoluteTemperature, AbsoluteTemperatureUnit, Temperature, TemperatureUnit},
    time::{Duration, DurationUnit, Frequency, FrequencyUnit, Time, TimeUnit},
};
