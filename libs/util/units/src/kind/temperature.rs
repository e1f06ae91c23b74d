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

// Degrees are the same size in Fahrenheit and Rankine, and in Celsius and
// Kelvin; only the absolute scales differ in their zero points.
const KELVIN_IN_RANKINE: f64 = 5.0 / 9.0;
const KELVIN_IN_REAUMUR: f64 = 1.25;

define_kind! {
    /// A temperature difference.
    Temperature, TemperatureUnit: relative, "K", standard = TemperatureUnit::KELVIN;
    KELVIN: "kelvin", "K", SiBase => root();
    DEGREE_CELSIUS: "degree Celsius", "°C", SiDerived => scaled(1.0);
    DEGREE_FAHRENHEIT: "degree Fahrenheit", "°F", Imperial => scaled(KELVIN_IN_RANKINE);
    DEGREE_RANKINE: "degree Rankine", "°R", Other => scaled(KELVIN_IN_RANKINE);
    DEGREE_REAUMUR: "degree Reaumur", "°Ré", Other => scaled(KELVIN_IN_REAUMUR);
}

define_kind! {
    /// A temperature measured from a zero point.
    AbsoluteTemperature, AbsoluteTemperatureUnit: absolute(Temperature), "K",
        standard = AbsoluteTemperatureUnit::KELVIN;
    KELVIN: "kelvin", "K", SiBase => absolute(1.0, 0.0, TemperatureUnit::KELVIN);
    DEGREE_CELSIUS: "degree Celsius", "°C", SiDerived =>
        absolute(1.0, 273.15, TemperatureUnit::DEGREE_CELSIUS);
    DEGREE_FAHRENHEIT: "degree Fahrenheit", "°F", Imperial =>
        absolute(KELVIN_IN_RANKINE, 459.67, TemperatureUnit::DEGREE_FAHRENHEIT);
    DEGREE_RANKINE: "degree Rankine", "°R", Other =>
        absolute(KELVIN_IN_RANKINE, 0.0, TemperatureUnit::DEGREE_RANKINE);
    DEGREE_REAUMUR: "degree Reaumur", "°Ré", Other =>
        absolute(KELVIN_IN_REAUMUR, 218.52, TemperatureUnit::DEGREE_REAUMUR);
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_points() {
        assert_relative_eq!(AbsoluteTemperatureUnit::DEGREE_CELSIUS.to_standard(0.0), 273.15);
        assert_relative_eq!(
            AbsoluteTemperatureUnit::DEGREE_FAHRENHEIT.to_standard(32.0),
            273.15,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            AbsoluteTemperatureUnit::DEGREE_FAHRENHEIT.to_standard(-40.0),
            AbsoluteTemperatureUnit::DEGREE_CELSIUS.to_standard(-40.0),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            AbsoluteTemperatureUnit::DEGREE_REAUMUR.to_standard(80.0),
            373.15,
            epsilon = 1e-9
        );
        assert_eq!(AbsoluteTemperatureUnit::DEGREE_RANKINE.to_standard(0.0), 0.0);
    }

    #[test]
    fn test_same_size_degrees_are_equal() {
        assert_eq!(TemperatureUnit::KELVIN, TemperatureUnit::DEGREE_CELSIUS);
        assert_eq!(TemperatureUnit::DEGREE_FAHRENHEIT, TemperatureUnit::DEGREE_RANKINE);
        assert_ne!(
            AbsoluteTemperatureUnit::KELVIN,
            AbsoluteTemperatureUnit::DEGREE_CELSIUS
        );
        assert_eq!(
            AbsoluteTemperatureUnit::DEGREE_FAHRENHEIT.relative_unit(),
            TemperatureUnit::DEGREE_FAHRENHEIT
        );
    }
}
