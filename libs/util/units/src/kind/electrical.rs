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
use crate::kind::{Duration, DurationUnit, Length, Mass, Power};

define_kind! {
    ElectricalCurrent, ElectricalCurrentUnit: relative, "A", standard = ElectricalCurrentUnit::AMPERE;
    AMPERE: "ampere", "A", SiBase => root();
    MICROAMPERE: "microampere", "μA", SiBase => scaled(1.0e-6);
    MILLIAMPERE: "milliampere", "mA", SiBase => scaled(1.0e-3);
    KILOAMPERE: "kiloampere", "kA", SiBase => scaled(1.0e3);
    STATAMPERE: "statampere", "statA", CgsEsu => scaled(3.335_641e-10);
    ABAMPERE: "abampere", "abA", CgsEmu => scaled(10.0);
}

define_kind! {
    ElectricalCharge, ElectricalChargeUnit: relative, "sA", standard = ElectricalChargeUnit::COULOMB;
    COULOMB: "coulomb", "C", SiDerived => root();
    MILLIAMPERE_HOUR: "milliampere hour", "mAh", SiDerived =>
        current_duration(ElectricalCurrentUnit::MILLIAMPERE, DurationUnit::HOUR);
    AMPERE_HOUR: "ampere hour", "Ah", SiDerived =>
        current_duration(ElectricalCurrentUnit::AMPERE, DurationUnit::HOUR);
    KILOAMPERE_HOUR: "kiloampere hour", "kAh", SiDerived =>
        current_duration(ElectricalCurrentUnit::KILOAMPERE, DurationUnit::HOUR);
    FARADAY: "faraday", "F", Other => scaled(96_485.332_12);
    ATOMIC_UNIT: "elementary charge", "e", Other => scaled(1.602_176_634e-19);
    STATCOULOMB: "statcoulomb", "statC", CgsEsu =>
        current_duration(ElectricalCurrentUnit::STATAMPERE, DurationUnit::SECOND);
    ABCOULOMB: "abcoulomb", "abC", CgsEmu =>
        current_duration(ElectricalCurrentUnit::ABAMPERE, DurationUnit::SECOND);
}

derivations! {
    ElectricalCharge {
        current_duration(current: ElectricalCurrent ^ 1, duration: Duration ^ 1);
    }
}

define_kind! {
    ElectricalPotential, ElectricalPotentialUnit: relative, "kgm2/s3A", standard = ElectricalPotentialUnit::VOLT;
    VOLT: "volt", "V", SiDerived => root();
    MICROVOLT: "microvolt", "μV", SiDerived => scaled_from(ElectricalPotentialUnit::VOLT, 1.0e-6);
    MILLIVOLT: "millivolt", "mV", SiDerived => scaled_from(ElectricalPotentialUnit::VOLT, 1.0e-3);
    KILOVOLT: "kilovolt", "kV", SiDerived => scaled_from(ElectricalPotentialUnit::VOLT, 1.0e3);
    MEGAVOLT: "megavolt", "MV", SiDerived => scaled_from(ElectricalPotentialUnit::VOLT, 1.0e6);
    STATVOLT: "statvolt", "statV", CgsEsu => scaled(299.792_458);
    ABVOLT: "abvolt", "abV", CgsEmu => scaled(1.0e-8);
}

derivations! {
    ElectricalPotential {
        power_current(power: Power ^ 1, current: ElectricalCurrent ^ -1);
        current_resistance(current: ElectricalCurrent ^ 1, resistance: ElectricalResistance ^ 1);
        mass_length_duration_current(
            mass: Mass ^ 1,
            length: Length ^ 2,
            duration: Duration ^ -3,
            current: ElectricalCurrent ^ -1
        );
    }
}

define_kind! {
    ElectricalResistance, ElectricalResistanceUnit: relative, "kgm2/s3A2", standard = ElectricalResistanceUnit::OHM;
    OHM: "ohm", "Ω", SiDerived => root();
    MILLIOHM: "milliohm", "mΩ", SiDerived => scaled_from(ElectricalResistanceUnit::OHM, 1.0e-3);
    KILOOHM: "kiloohm", "kΩ", SiDerived => scaled_from(ElectricalResistanceUnit::OHM, 1.0e3);
    MEGAOHM: "megaohm", "MΩ", SiDerived => scaled_from(ElectricalResistanceUnit::OHM, 1.0e6);
    ABOHM: "abohm", "abΩ", CgsEmu =>
        potential_current(ElectricalPotentialUnit::ABVOLT, ElectricalCurrentUnit::ABAMPERE);
    STATOHM: "statohm", "statΩ", CgsEsu =>
        potential_current(ElectricalPotentialUnit::STATVOLT, ElectricalCurrentUnit::STATAMPERE);
}

derivations! {
    ElectricalResistance {
        potential_current(potential: ElectricalPotential ^ 1, current: ElectricalCurrent ^ -1);
        mass_length_duration_current(
            mass: Mass ^ 1,
            length: Length ^ 2,
            duration: Duration ^ -3,
            current: ElectricalCurrent ^ -2
        );
    }
}

define_kind! {
    ElectricalConductance, ElectricalConductanceUnit: relative, "s3A2/kgm2", standard = ElectricalConductanceUnit::SIEMENS;
    SIEMENS: "siemens", "S", SiDerived => root();
    MICROSIEMENS: "microsiemens", "μS", SiDerived => scaled_from(ElectricalConductanceUnit::SIEMENS, 1.0e-6);
    MILLISIEMENS: "millisiemens", "mS", SiDerived => scaled_from(ElectricalConductanceUnit::SIEMENS, 1.0e-3);
    KILOSIEMENS: "kilosiemens", "kS", SiDerived => scaled_from(ElectricalConductanceUnit::SIEMENS, 1.0e3);
    ABSIEMENS: "absiemens", "abS", CgsEmu =>
        current_potential(ElectricalCurrentUnit::ABAMPERE, ElectricalPotentialUnit::ABVOLT);
    STATSIEMENS: "statsiemens", "statS", CgsEsu =>
        current_potential(ElectricalCurrentUnit::STATAMPERE, ElectricalPotentialUnit::STATVOLT);
}

derivations! {
    ElectricalConductance {
        current_potential(current: ElectricalCurrent ^ 1, potential: ElectricalPotential ^ -1);
        mass_length_duration_current(
            mass: Mass ^ -1,
            length: Length ^ -2,
            duration: Duration ^ 3,
            current: ElectricalCurrent ^ 2
        );
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        builder::UnitBuilder,
        kind::{LengthUnit, MassUnit, PowerUnit},
        UnitSystem,
    };
    use approx::assert_relative_eq;

    #[test]
    fn test_volt_from_watt_per_ampere() {
        let volt = UnitBuilder::<ElectricalPotential>::new("v", "v", UnitSystem::Other)
            .power_current(PowerUnit::WATT, ElectricalCurrentUnit::AMPERE)
            .definition();
        assert_eq!(volt.scale.factor(), 1.0);
        let kilovolt = UnitBuilder::<ElectricalPotential>::new("kv", "kv", UnitSystem::Other)
            .mass_length_duration_current(
                MassUnit::TONNE,
                LengthUnit::METER,
                DurationUnit::SECOND,
                ElectricalCurrentUnit::AMPERE,
            )
            .definition();
        assert_eq!(kilovolt.scale.factor(), ElectricalPotentialUnit::KILOVOLT.scale_factor());
    }

    #[test]
    fn test_resistance_from_two_derived_kinds() {
        assert_relative_eq!(ElectricalResistanceUnit::ABOHM.scale_factor(), 1.0e-9, max_relative = 1e-12);
        assert_relative_eq!(
            ElectricalResistanceUnit::STATOHM.scale_factor(),
            8.987_551_787e11,
            max_relative = 1e-6
        );
        assert_relative_eq!(ElectricalChargeUnit::AMPERE_HOUR.scale_factor(), 3600.0);
    }

    #[test]
    fn test_conductance_mirrors_resistance() {
        assert_relative_eq!(
            ElectricalConductanceUnit::ABSIEMENS.scale_factor(),
            1.0 / ElectricalResistanceUnit::ABOHM.scale_factor(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            ElectricalConductanceUnit::STATSIEMENS.scale_factor(),
            1.0 / ElectricalResistanceUnit::STATOHM.scale_factor(),
            max_relative = 1e-12
        );
        assert_eq!(ElectricalConductanceUnit::lookup("mS"), Some(ElectricalConductanceUnit::MILLISIEMENS));
    }
}
