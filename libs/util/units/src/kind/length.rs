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

define_kind! {
    /// Distance between two points.
    Length, LengthUnit: relative, "m", standard = LengthUnit::METER;
    METER: "meter", "m", SiBase => root();
    NANOMETER: "nanometer", "nm", SiBase => scaled(1.0e-9);
    MICROMETER: "micrometer", "μm", SiBase => scaled(1.0e-6);
    MILLIMETER: "millimeter", "mm", SiBase => scaled(1.0e-3);
    CENTIMETER: "centimeter", "cm", SiBase => scaled(1.0e-2);
    DECIMETER: "decimeter", "dm", SiBase => scaled(0.1);
    DECAMETER: "decameter", "dam", SiBase => scaled(10.0);
    HECTOMETER: "hectometer", "hm", SiBase => scaled(100.0);
    KILOMETER: "kilometer", "km", SiBase => scaled_from(LengthUnit::METER, 1000.0);
    FOOT: "foot", "ft", Imperial => scaled(0.3048);
    INCH: "inch", "in", Imperial => scaled_from(LengthUnit::FOOT, 1.0 / 12.0);
    YARD: "yard", "yd", Imperial => scaled_from(LengthUnit::FOOT, 3.0);
    MILE: "mile", "mi", Imperial => scaled_from(LengthUnit::YARD, 1760.0);
    NAUTICAL_MILE: "nautical mile", "NM", Other => scaled(1852.0);
    ANGSTROM: "ångström", "Å", Other => scaled(1.0e-10);
    ASTRONOMICAL_UNIT: "astronomical unit", "AU", Other => scaled(149_597_870_700.0);
    LIGHTYEAR: "lightyear", "ly", Other => scaled(9_460_730_472_580_800.0);
    PARSEC: "parsec", "pc", Other => scaled(3.085_677_581_491_367_3e16);
}

define_kind! {
    /// Location along a line, measured from an origin.
    Position, PositionUnit: absolute(Length), "m", standard = PositionUnit::METER;
    METER: "meter", "m", SiBase => absolute(1.0, 0.0, LengthUnit::METER);
    MILLIMETER: "millimeter", "mm", SiBase => absolute(1.0e-3, 0.0, LengthUnit::MILLIMETER);
    CENTIMETER: "centimeter", "cm", SiBase => absolute(1.0e-2, 0.0, LengthUnit::CENTIMETER);
    KILOMETER: "kilometer", "km", SiBase => absolute(1000.0, 0.0, LengthUnit::KILOMETER);
    FOOT: "foot", "ft", Imperial => absolute(0.3048, 0.0, LengthUnit::FOOT);
    MILE: "mile", "mi", Imperial =>
        absolute(LengthUnit::MILE.scale_factor(), 0.0, LengthUnit::MILE);
    NAUTICAL_MILE: "nautical mile", "NM", Other => absolute(1852.0, 0.0, LengthUnit::NAUTICAL_MILE);
}

define_kind! {
    Area, AreaUnit: relative, "m2", standard = AreaUnit::SQUARE_METER;
    SQUARE_METER: "square meter", "m2", SiDerived => root();
    SQUARE_MILLIMETER: "square millimeter", "mm2", SiDerived => length(LengthUnit::MILLIMETER);
    SQUARE_CENTIMETER: "square centimeter", "cm2", SiDerived => length(LengthUnit::CENTIMETER);
    SQUARE_DECIMETER: "square decimeter", "dm2", SiDerived => length(LengthUnit::DECIMETER);
    SQUARE_HECTOMETER: "square hectometer", "hm2", SiDerived => length(LengthUnit::HECTOMETER);
    SQUARE_KILOMETER: "square kilometer", "km2", SiDerived => length(LengthUnit::KILOMETER);
    ARE: "are", "a", SiAccepted => scaled(100.0);
    HECTARE: "hectare", "ha", SiAccepted => scaled(1.0e4);
    SQUARE_INCH: "square inch", "in2", Imperial => length(LengthUnit::INCH);
    SQUARE_FOOT: "square foot", "ft2", Imperial => length(LengthUnit::FOOT);
    SQUARE_YARD: "square yard", "yd2", Imperial => length(LengthUnit::YARD);
    SQUARE_MILE: "square mile", "mi2", Imperial => length(LengthUnit::MILE);
    ACRE: "acre", "ac", Imperial => scaled_from(AreaUnit::SQUARE_YARD, 4840.0);
}

derivations! {
    Area {
        /// The square of a length.
        length(length: Length ^ 2);
        length_length(first: Length ^ 1, second: Length ^ 1);
        volume_length(volume: Volume ^ 1, length: Length ^ -1);
    }
}

define_kind! {
    Volume, VolumeUnit: relative, "m3", standard = VolumeUnit::CUBIC_METER;
    CUBIC_METER: "cubic meter", "m3", SiDerived => root();
    CUBIC_MILLIMETER: "cubic millimeter", "mm3", SiDerived => length(LengthUnit::MILLIMETER);
    CUBIC_CENTIMETER: "cubic centimeter", "cm3", SiDerived => length(LengthUnit::CENTIMETER);
    CUBIC_DECIMETER: "cubic decimeter", "dm3", SiDerived => length(LengthUnit::DECIMETER);
    CUBIC_KILOMETER: "cubic kilometer", "km3", SiDerived => length(LengthUnit::KILOMETER);
    LITER: "liter", "L", SiAccepted => scaled(1.0e-3);
    MILLILITER: "milliliter", "mL", SiAccepted => scaled_from(VolumeUnit::LITER, 1.0e-3);
    CUBIC_INCH: "cubic inch", "in3", Imperial => length(LengthUnit::INCH);
    CUBIC_FOOT: "cubic foot", "ft3", Imperial => length(LengthUnit::FOOT);
    CUBIC_YARD: "cubic yard", "yd3", Imperial => length(LengthUnit::YARD);
    GALLON_US: "gallon (US)", "gal(US)", UsCustomary => scaled_from(VolumeUnit::CUBIC_INCH, 231.0);
    QUART_US: "quart (US)", "qt(US)", UsCustomary => scaled_from(VolumeUnit::GALLON_US, 0.25);
    GALLON_IMP: "gallon (imp)", "gal(imp)", Imperial => scaled(4.546_09e-3);
}

derivations! {
    Volume {
        /// The cube of a length.
        length(length: Length ^ 3);
        area_length(area: Area ^ 1, length: Length ^ 1);
    }
}

define_kind! {
    /// Count of occurrences per unit length.
    LinearDensity, LinearDensityUnit: relative, "1/m", standard = LinearDensityUnit::PER_METER;
    PER_METER: "per meter", "/m", SiDerived => root();
    PER_MILLIMETER: "per millimeter", "/mm", SiDerived => length(LengthUnit::MILLIMETER);
    PER_CENTIMETER: "per centimeter", "/cm", SiDerived => length(LengthUnit::CENTIMETER);
    PER_KILOMETER: "per kilometer", "/km", SiDerived => length(LengthUnit::KILOMETER);
    PER_INCH: "per inch", "/in", Imperial => length(LengthUnit::INCH);
    PER_FOOT: "per foot", "/ft", Imperial => length(LengthUnit::FOOT);
}

derivations! {
    LinearDensity {
        length(length: Length ^ -1);
        length_area(length: Length ^ 1, area: Area ^ -1);
    }
}
