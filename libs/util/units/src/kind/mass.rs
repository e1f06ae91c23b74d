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
use crate::kind::{Duration, DurationUnit, Length, Volume, VolumeUnit};

define_kind! {
    Mass, MassUnit: relative, "kg", standard = MassUnit::KILOGRAM;
    KILOGRAM: "kilogram", "kg", SiBase => root();
    MICROGRAM: "microgram", "μg", SiBase => scaled(1.0e-9);
    MILLIGRAM: "milligram", "mg", SiBase => scaled(1.0e-6);
    GRAM: "gram", "g", SiBase => scaled(1.0e-3);
    TONNE: "tonne", "t", Mts => scaled(1.0e3);
    POUND: "pound", "lb", Imperial => scaled(0.453_592_37);
    OUNCE: "ounce", "oz", Imperial => scaled_from(MassUnit::POUND, 1.0 / 16.0);
    TON_SHORT: "short ton", "ton(US)", UsCustomary => scaled_from(MassUnit::POUND, 2000.0);
    TON_LONG: "long ton", "ton(UK)", Imperial => scaled_from(MassUnit::POUND, 2240.0);
    DALTON: "dalton", "Da", Other => scaled(1.660_539_066_60e-27);
}

define_kind! {
    /// Mass per unit volume.
    Density, DensityUnit: relative, "kg/m3", standard = DensityUnit::KG_PER_CUBIC_METER;
    KG_PER_CUBIC_METER: "kilogram per cubic meter", "kg/m3", SiDerived => root();
    GRAM_PER_CUBIC_CENTIMETER: "gram per cubic centimeter", "g/cm3", SiDerived =>
        mass_volume(MassUnit::GRAM, VolumeUnit::CUBIC_CENTIMETER);
    GRAM_PER_LITER: "gram per liter", "g/L", SiAccepted =>
        mass_volume(MassUnit::GRAM, VolumeUnit::LITER);
    POUND_PER_CUBIC_FOOT: "pound per cubic foot", "lb/ft3", Imperial =>
        mass_volume(MassUnit::POUND, VolumeUnit::CUBIC_FOOT);
    POUND_PER_GALLON_US: "pound per US gallon", "lb/gal(US)", UsCustomary =>
        mass_volume(MassUnit::POUND, VolumeUnit::GALLON_US);
}

derivations! {
    Density {
        mass_volume(mass: Mass ^ 1, volume: Volume ^ -1);
        mass_length(mass: Mass ^ 1, length: Length ^ -3);
    }
}

define_kind! {
    /// Mass moved per unit time.
    FlowMass, FlowMassUnit: relative, "kg/s", standard = FlowMassUnit::KILOGRAM_PER_SECOND;
    KILOGRAM_PER_SECOND: "kilogram per second", "kg/s", SiDerived => root();
    KILOGRAM_PER_HOUR: "kilogram per hour", "kg/h", SiAccepted =>
        mass_duration(MassUnit::KILOGRAM, DurationUnit::HOUR);
    TONNE_PER_HOUR: "tonne per hour", "t/h", Mts =>
        mass_duration(MassUnit::TONNE, DurationUnit::HOUR);
    POUND_PER_SECOND: "pound per second", "lb/s", Imperial =>
        mass_duration(MassUnit::POUND, DurationUnit::SECOND);
    POUND_PER_HOUR: "pound per hour", "lb/h", Imperial =>
        mass_duration(MassUnit::POUND, DurationUnit::HOUR);
}

derivations! {
    FlowMass {
        mass_duration(mass: Mass ^ 1, duration: Duration ^ -1);
    }
}
