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
use anyhow::Result;
use approx::assert_relative_eq;
use quanta::{
    Area, AreaUnit, Direction, DirectionUnit, Duration, DurationUnit, Energy, EnergyUnit,
    FrequencyUnit, Length, LengthUnit, Power, PowerUnit, Speed, SpeedUnit,
};
use std::f64::consts::FRAC_PI_2;

#[test]
fn test_meters_times_meters() {
    let area: Area = Length::new(3.0, LengthUnit::METER) * Length::new(2.0, LengthUnit::METER);
    assert_eq!(area.si(), 6.0);
    assert_eq!(area.unit(), AreaUnit::SQUARE_METER);
    assert_eq!(area.to_string(), "6 m2");
}

#[test]
fn test_hour_is_3600_seconds() {
    assert_eq!(DurationUnit::HOUR.scale_factor(), 3600.0);
    assert_eq!(Duration::new(1.0, DurationUnit::HOUR).si(), 3600.0);
    assert_relative_eq!(
        Duration::new(90.0, DurationUnit::MINUTE).in_unit(DurationUnit::HOUR),
        1.5
    );
}

#[test]
fn test_north_is_a_quarter_turn_from_east() {
    let north = Direction::new(0.0, DirectionUnit::NORTH_DEGREE);
    assert_relative_eq!(north.si(), FRAC_PI_2);
    assert_relative_eq!(
        north.in_unit(DirectionUnit::EAST_DEGREE),
        90.0,
        epsilon = 1e-12
    );
}

#[test]
fn test_frequency_scales() {
    assert_eq!(FrequencyUnit::HERTZ.scale_factor(), 1.0);
    assert_relative_eq!(FrequencyUnit::PER_MINUTE.scale_factor(), 1.0 / 60.0);
    assert_relative_eq!(FrequencyUnit::PER_HOUR.scale_factor(), 1.0 / 3600.0);
}

#[test]
fn test_kilowatt_hour() {
    assert_eq!(EnergyUnit::KILOWATT_HOUR.scale_factor(), 3.6e6);
    let energy: Energy =
        Power::new(2.0, PowerUnit::KILOWATT) * Duration::new(3.0, DurationUnit::HOUR);
    assert_relative_eq!(energy.in_unit(EnergyUnit::KILOWATT_HOUR), 6.0, max_relative = 1e-12);
    assert_eq!(energy.unit(), EnergyUnit::JOULE);
}

#[test]
fn test_lookup_by_abbreviation() -> Result<()> {
    let unit = SpeedUnit::lookup("km/h").ok_or_else(|| anyhow::anyhow!("no km/h"))?;
    assert_eq!(unit, SpeedUnit::KM_PER_HOUR);
    let speed: Speed =
        Length::new(100.0, LengthUnit::KILOMETER) / Duration::new(1.0, DurationUnit::HOUR);
    assert_relative_eq!(speed.in_unit(unit), 100.0, max_relative = 1e-12);
    Ok(())
}
