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
use crate::kind::{
    Area, AreaUnit, Duration, DurationUnit, ElectricalCurrent, ElectricalPotential, Length,
    LengthUnit, Mass, MassUnit, Volume, VolumeUnit,
};

define_kind! {
    Speed, SpeedUnit: relative, "m/s", standard = SpeedUnit::METER_PER_SECOND;
    METER_PER_SECOND: "meter per second", "m/s", SiDerived => root();
    METER_PER_HOUR: "meter per hour", "m/h", SiAccepted =>
        length_duration(LengthUnit::METER, DurationUnit::HOUR);
    KM_PER_HOUR: "kilometer per hour", "km/h", SiAccepted =>
        length_duration(LengthUnit::KILOMETER, DurationUnit::HOUR);
    FOOT_PER_SECOND: "foot per second", "ft/s", Imperial =>
        length_duration(LengthUnit::FOOT, DurationUnit::SECOND);
    INCH_PER_SECOND: "inch per second", "in/s", Imperial =>
        length_duration(LengthUnit::INCH, DurationUnit::SECOND);
    MILE_PER_HOUR: "mile per hour", "mi/h", Imperial =>
        length_duration(LengthUnit::MILE, DurationUnit::HOUR);
    KNOT: "knot", "kt", Other => length_duration(LengthUnit::NAUTICAL_MILE, DurationUnit::HOUR);
}

derivations! {
    Speed {
        length_duration(length: Length ^ 1, duration: Duration ^ -1);
    }
}

define_kind! {
    Acceleration, AccelerationUnit: relative, "m/s2", standard = AccelerationUnit::METER_PER_SECOND_SQUARED;
    METER_PER_SECOND_SQUARED: "meter per second squared", "m/s2", SiDerived => root();
    KM_PER_HOUR_SQUARED: "kilometer per hour squared", "km/h2", SiAccepted =>
        length_duration(LengthUnit::KILOMETER, DurationUnit::HOUR);
    FOOT_PER_SECOND_SQUARED: "foot per second squared", "ft/s2", Imperial =>
        length_duration(LengthUnit::FOOT, DurationUnit::SECOND);
    INCH_PER_SECOND_SQUARED: "inch per second squared", "in/s2", Imperial =>
        length_duration(LengthUnit::INCH, DurationUnit::SECOND);
    KNOT_PER_SECOND: "knot per second", "kt/s", Other =>
        speed_duration(SpeedUnit::KNOT, DurationUnit::SECOND);
    GAL: "gal", "Gal", Cgs => length_duration(LengthUnit::CENTIMETER, DurationUnit::SECOND);
    STANDARD_GRAVITY: "standard gravity", "g0", Other => scaled(9.806_65);
}

derivations! {
    Acceleration {
        length_duration(length: Length ^ 1, duration: Duration ^ -2);
        speed_duration(speed: Speed ^ 1, duration: Duration ^ -1);
    }
}

define_kind! {
    Force, ForceUnit: relative, "kgm/s2", standard = ForceUnit::NEWTON;
    NEWTON: "newton", "N", SiDerived => root();
    KILONEWTON: "kilonewton", "kN", SiDerived => scaled_from(ForceUnit::NEWTON, 1.0e3);
    DYNE: "dyne", "dyn", Cgs =>
        mass_length_duration(MassUnit::GRAM, LengthUnit::CENTIMETER, DurationUnit::SECOND);
    KILOGRAM_FORCE: "kilogram-force", "kgf", Other =>
        mass_acceleration(MassUnit::KILOGRAM, AccelerationUnit::STANDARD_GRAVITY);
    POUND_FORCE: "pound-force", "lbf", Imperial =>
        mass_acceleration(MassUnit::POUND, AccelerationUnit::STANDARD_GRAVITY);
    OUNCE_FORCE: "ounce-force", "ozf", Imperial =>
        mass_acceleration(MassUnit::OUNCE, AccelerationUnit::STANDARD_GRAVITY);
    KIP: "kip", "kip", Imperial => scaled_from(ForceUnit::POUND_FORCE, 1000.0);
    STHENE: "sthene", "sn", Mts =>
        mass_length_duration(MassUnit::TONNE, LengthUnit::METER, DurationUnit::SECOND);
}

derivations! {
    Force {
        mass_length_duration(mass: Mass ^ 1, length: Length ^ 1, duration: Duration ^ -2);
        mass_acceleration(mass: Mass ^ 1, acceleration: Acceleration ^ 1);
    }
}

define_kind! {
    Energy, EnergyUnit: relative, "kgm2/s2", standard = EnergyUnit::JOULE;
    JOULE: "joule", "J", SiDerived => root();
    KILOJOULE: "kilojoule", "kJ", SiDerived => scaled_from(EnergyUnit::JOULE, 1.0e3);
    MEGAJOULE: "megajoule", "MJ", SiDerived => scaled_from(EnergyUnit::JOULE, 1.0e6);
    WATT_HOUR: "watt-hour", "Wh", SiAccepted => power_duration(PowerUnit::WATT, DurationUnit::HOUR);
    KILOWATT_HOUR: "kilowatt-hour", "kWh", SiAccepted => scaled_from(EnergyUnit::WATT_HOUR, 1.0e3);
    MEGAWATT_HOUR: "megawatt-hour", "MWh", SiAccepted => scaled_from(EnergyUnit::WATT_HOUR, 1.0e6);
    ERG: "erg", "erg", Cgs => force_length(ForceUnit::DYNE, LengthUnit::CENTIMETER);
    FOOT_POUND_FORCE: "foot pound-force", "ft.lbf", Imperial =>
        force_length(ForceUnit::POUND_FORCE, LengthUnit::FOOT);
    CALORIE_IT: "calorie (International Table)", "cal(IT)", Other => scaled(4.1868);
    KILOCALORIE: "kilocalorie", "kcal", Other => scaled_from(EnergyUnit::CALORIE_IT, 1.0e3);
    BTU_IT: "British thermal unit (International Table)", "BTU(IT)", Imperial =>
        scaled(1055.055_852_62);
    ELECTRONVOLT: "electronvolt", "eV", Other => scaled(1.602_176_634e-19);
}

derivations! {
    Energy {
        mass_length_duration(mass: Mass ^ 1, length: Length ^ 2, duration: Duration ^ -2);
        force_length(force: Force ^ 1, length: Length ^ 1);
        power_duration(power: Power ^ 1, duration: Duration ^ 1);
    }
}

// Shares the signature of energy but is a distinct kind: a torque is never
// added to an energy.
define_kind! {
    Torque, TorqueUnit: relative, "kgm2/s2", standard = TorqueUnit::NEWTON_METER;
    NEWTON_METER: "newton meter", "N.m", SiDerived => root();
    KILONEWTON_METER: "kilonewton meter", "kN.m", SiDerived =>
        force_length(ForceUnit::KILONEWTON, LengthUnit::METER);
    METER_KILOGRAM_FORCE: "meter kilogram-force", "m.kgf", Other =>
        force_length(ForceUnit::KILOGRAM_FORCE, LengthUnit::METER);
    DYNE_CENTIMETER: "dyne centimeter", "dyn.cm", Cgs =>
        force_length(ForceUnit::DYNE, LengthUnit::CENTIMETER);
    POUND_FOOT: "pound-force foot", "lbf.ft", Imperial =>
        force_length(ForceUnit::POUND_FORCE, LengthUnit::FOOT);
    POUND_INCH: "pound-force inch", "lbf.in", Imperial =>
        force_length(ForceUnit::POUND_FORCE, LengthUnit::INCH);
}

derivations! {
    Torque {
        force_length(force: Force ^ 1, length: Length ^ 1);
        mass_length_duration(mass: Mass ^ 1, length: Length ^ 2, duration: Duration ^ -2);
    }
}

define_kind! {
    Power, PowerUnit: relative, "kgm2/s3", standard = PowerUnit::WATT;
    WATT: "watt", "W", SiDerived => root();
    MILLIWATT: "milliwatt", "mW", SiDerived => scaled_from(PowerUnit::WATT, 1.0e-3);
    KILOWATT: "kilowatt", "kW", SiDerived => scaled_from(PowerUnit::WATT, 1.0e3);
    MEGAWATT: "megawatt", "MW", SiDerived => scaled_from(PowerUnit::WATT, 1.0e6);
    GIGAWATT: "gigawatt", "GW", SiDerived => scaled_from(PowerUnit::WATT, 1.0e9);
    HORSEPOWER_METRIC: "horsepower (metric)", "hp(M)", Other => scaled(735.498_75);
    ERG_PER_SECOND: "erg per second", "erg/s", Cgs =>
        force_length_duration(ForceUnit::DYNE, LengthUnit::CENTIMETER, DurationUnit::SECOND);
    FOOT_POUND_FORCE_PER_SECOND: "foot pound-force per second", "ft.lbf/s", Imperial =>
        force_length_duration(ForceUnit::POUND_FORCE, LengthUnit::FOOT, DurationUnit::SECOND);
    FOOT_POUND_FORCE_PER_MINUTE: "foot pound-force per minute", "ft.lbf/min", Imperial =>
        force_length_duration(ForceUnit::POUND_FORCE, LengthUnit::FOOT, DurationUnit::MINUTE);
    STHENE_METER_PER_SECOND: "sthene-meter per second", "sn.m/s", Mts =>
        force_length_duration(ForceUnit::STHENE, LengthUnit::METER, DurationUnit::SECOND);
}

derivations! {
    Power {
        mass_length_duration(mass: Mass ^ 1, length: Length ^ 2, duration: Duration ^ -3);
        force_length_duration(force: Force ^ 1, length: Length ^ 1, duration: Duration ^ -1);
        energy_duration(energy: Energy ^ 1, duration: Duration ^ -1);
        force_speed(force: Force ^ 1, speed: Speed ^ 1);
        potential_current(potential: ElectricalPotential ^ 1, current: ElectricalCurrent ^ 1);
    }
}

define_kind! {
    Pressure, PressureUnit: relative, "kg/ms2", standard = PressureUnit::PASCAL;
    PASCAL: "pascal", "Pa", SiDerived => root();
    HECTOPASCAL: "hectopascal", "hPa", SiDerived => scaled_from(PressureUnit::PASCAL, 1.0e2);
    KILOPASCAL: "kilopascal", "kPa", SiDerived => scaled_from(PressureUnit::PASCAL, 1.0e3);
    BAR: "bar", "bar", Other => scaled(1.0e5);
    MILLIBAR: "millibar", "mbar", Other => scaled_from(PressureUnit::BAR, 1.0e-3);
    ATMOSPHERE_STANDARD: "standard atmosphere", "atm", Other => scaled(101_325.0);
    TORR: "torr", "torr", Other => scaled_from(PressureUnit::ATMOSPHERE_STANDARD, 1.0 / 760.0);
    MILLIMETER_MERCURY: "millimeter of mercury", "mmHg", Other => scaled(133.322_387_415);
    POUND_PER_SQUARE_INCH: "pound per square inch", "psi", Imperial =>
        force_area(ForceUnit::POUND_FORCE, AreaUnit::SQUARE_INCH);
    POUND_PER_SQUARE_FOOT: "pound per square foot", "psf", Imperial =>
        force_area(ForceUnit::POUND_FORCE, AreaUnit::SQUARE_FOOT);
    KGF_PER_SQUARE_MILLIMETER: "kilogram-force per square millimeter", "kgf/mm2", Other =>
        force_area(ForceUnit::KILOGRAM_FORCE, AreaUnit::SQUARE_MILLIMETER);
}

derivations! {
    Pressure {
        mass_length_duration(mass: Mass ^ 1, length: Length ^ -1, duration: Duration ^ -2);
        force_area(force: Force ^ 1, area: Area ^ -1);
    }
}

define_kind! {
    /// Volume moved per unit time.
    FlowVolume, FlowVolumeUnit: relative, "m3/s", standard = FlowVolumeUnit::CUBIC_METER_PER_SECOND;
    CUBIC_METER_PER_SECOND: "cubic meter per second", "m3/s", SiDerived => root();
    CUBIC_METER_PER_HOUR: "cubic meter per hour", "m3/h", SiAccepted =>
        volume_duration(VolumeUnit::CUBIC_METER, DurationUnit::HOUR);
    LITER_PER_SECOND: "liter per second", "L/s", SiAccepted =>
        volume_duration(VolumeUnit::LITER, DurationUnit::SECOND);
    LITER_PER_MINUTE: "liter per minute", "L/min", SiAccepted =>
        volume_duration(VolumeUnit::LITER, DurationUnit::MINUTE);
    LITER_PER_HOUR: "liter per hour", "L/h", SiAccepted =>
        volume_duration(VolumeUnit::LITER, DurationUnit::HOUR);
    CUBIC_FOOT_PER_SECOND: "cubic foot per second", "ft3/s", Imperial =>
        volume_duration(VolumeUnit::CUBIC_FOOT, DurationUnit::SECOND);
    GALLON_US_PER_MINUTE: "US gallon per minute", "gal(US)/min", UsCustomary =>
        volume_duration(VolumeUnit::GALLON_US, DurationUnit::MINUTE);
}

derivations! {
    FlowVolume {
        volume_duration(volume: Volume ^ 1, duration: Duration ^ -1);
        length_duration(length: Length ^ 3, duration: Duration ^ -1);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Kind;
    use approx::assert_relative_eq;

    #[test]
    fn test_watt_from_base_units() {
        let watt = crate::builder::UnitBuilder::<Power>::new("w", "w", crate::UnitSystem::Other)
            .mass_length_duration(MassUnit::KILOGRAM, LengthUnit::METER, DurationUnit::SECOND)
            .definition();
        assert_eq!(watt.scale.factor(), PowerUnit::WATT.scale_factor());
    }

    #[test]
    fn test_energy_chain() {
        assert_eq!(EnergyUnit::WATT_HOUR.scale_factor(), 3600.0);
        assert_eq!(EnergyUnit::KILOWATT_HOUR.scale_factor(), 3.6e6);
        assert_relative_eq!(EnergyUnit::ERG.scale_factor(), 1.0e-7, max_relative = 1e-12);
    }

    #[test]
    fn test_torque_is_not_energy() {
        assert_eq!(Torque::SI_SIGNATURE, Energy::SI_SIGNATURE);
        assert_ne!(Torque::NAME, Energy::NAME);
        assert_eq!(TorqueUnit::lookup("N.m"), Some(TorqueUnit::NEWTON_METER));
        assert!(EnergyUnit::lookup("N.m").is_none());
        assert_eq!(
            TorqueUnit::POUND_FOOT.scale_factor(),
            EnergyUnit::FOOT_POUND_FORCE.scale_factor()
        );
        assert_relative_eq!(TorqueUnit::POUND_INCH.scale_factor(), 0.112_984_829_027_616_7, max_relative = 1e-12);
    }

    #[test]
    fn test_imperial_force_and_pressure() {
        assert_relative_eq!(ForceUnit::POUND_FORCE.scale_factor(), 4.448_221_615_260_5, max_relative = 1e-12);
        assert_relative_eq!(PressureUnit::POUND_PER_SQUARE_INCH.scale_factor(), 6894.757_293_168, max_relative = 1e-9);
        assert_relative_eq!(SpeedUnit::KNOT.scale_factor(), 1852.0 / 3600.0, max_relative = 1e-12);
        assert_relative_eq!(PowerUnit::ERG_PER_SECOND.scale_factor(), 1.0e-7, max_relative = 1e-12);
    }
}
