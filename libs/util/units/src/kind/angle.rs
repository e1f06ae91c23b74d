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
use std::f64::consts::{FRAC_PI_2, PI};

const RADIANS_IN_DEGREE: f64 = PI / 180.0;

define_kind! {
    /// A plane angle.
    Angle, AngleUnit: relative, "rad", standard = AngleUnit::RADIAN;
    RADIAN: "radian", "rad", SiDerived => root();
    DEGREE: "degree", "°", SiAccepted => scaled(RADIANS_IN_DEGREE);
    ARCMINUTE: "arcminute", "'", SiAccepted => scaled_from(AngleUnit::DEGREE, 1.0 / 60.0);
    ARCSECOND: "arcsecond", "\"", SiAccepted => scaled_from(AngleUnit::ARCMINUTE, 1.0 / 60.0);
    GRAD: "gradian", "grad", Other => scaled(PI / 200.0);
    CENTESIMAL_ARCMINUTE: "centesimal arcminute", "c'", Other => scaled_from(AngleUnit::GRAD, 1.0 / 100.0);
    CENTESIMAL_ARCSECOND: "centesimal arcsecond", "c\"", Other =>
        scaled_from(AngleUnit::CENTESIMAL_ARCMINUTE, 1.0 / 100.0);
    TURN: "turn", "turn", Other => scaled(2.0 * PI);
}

define_kind! {
    /// A compass direction. The standard origin is east, counting
    /// counterclockwise; the NORTH units put zero at north.
    Direction, DirectionUnit: absolute(Angle), "rad", standard = DirectionUnit::EAST_RADIAN;
    EAST_RADIAN: "radians from east", "rad(E)", SiDerived => absolute(1.0, 0.0, AngleUnit::RADIAN);
    EAST_DEGREE: "degrees from east", "°(E)", SiAccepted =>
        absolute(RADIANS_IN_DEGREE, 0.0, AngleUnit::DEGREE);
    NORTH_RADIAN: "radians from north", "rad(N)", SiDerived =>
        absolute(1.0, FRAC_PI_2, AngleUnit::RADIAN);
    NORTH_DEGREE: "degrees from north", "°(N)", SiAccepted =>
        absolute(RADIANS_IN_DEGREE, 90.0, AngleUnit::DEGREE);
}

define_kind! {
    /// A three dimensional angle.
    SolidAngle, SolidAngleUnit: relative, "sr", standard = SolidAngleUnit::STERADIAN;
    STERADIAN: "steradian", "sr", SiDerived => root();
    SQUARE_DEGREE: "square degree", "°2", SiAccepted => scaled(RADIANS_IN_DEGREE * RADIANS_IN_DEGREE);
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_north_degree_origin() {
        // Zero degrees from north is a quarter turn from east.
        assert_relative_eq!(DirectionUnit::NORTH_DEGREE.to_standard(0.0), FRAC_PI_2);
        assert_relative_eq!(DirectionUnit::NORTH_DEGREE.offset(), FRAC_PI_2);
        assert_relative_eq!(DirectionUnit::NORTH_DEGREE.from_standard(PI), 90.0, epsilon = 1e-12);
        assert_eq!(DirectionUnit::NORTH_DEGREE.relative_unit(), AngleUnit::DEGREE);
        assert_eq!(
            DirectionUnit::NORTH_RADIAN.to_standard(0.0),
            DirectionUnit::EAST_RADIAN.to_standard(FRAC_PI_2)
        );
    }

    #[test]
    fn test_arc_subdivisions() {
        assert_relative_eq!(AngleUnit::ARCSECOND.scale_factor() * 3600.0, AngleUnit::DEGREE.scale_factor());
        assert_relative_eq!(AngleUnit::GRAD.scale_factor() * 400.0, AngleUnit::TURN.scale_factor());
    }
}
