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

//! Quantities over the unit tables of the `units` crate.
//!
//! `Rel<K>` is a relative quantity (a length, a duration, a price per hour)
//! and `Abs<K>` an absolute one (a position, a point in time, a compass
//! heading). Each kind has an alias here, so `Length` is `Rel<units::Length>`
//! and `Length<f32>` its single precision form. Products and quotients
//! between kinds exist only where `compose` lists them.
mod absolute;
pub mod compose;
mod error;
mod math;
mod matrix;
mod relative;
mod value;
mod vector;

pub use crate::{
    absolute::Abs,
    compose::{Composition, Operator, COMPOSITIONS},
    error::QuantityError,
    matrix::RelMatrix,
    relative::Rel,
    value::Real,
    vector::{AbsVector, RelVector},
};

macro_rules! quantities {
    (relative: $($R:ident),+; absolute: $($A:ident),+;) => {
        $(
            pub type $R<F = f64> = Rel<units::kind::$R, F>;
        )+
        $(
            pub type $A<F = f64> = Abs<units::kind::$A, F>;
        )+

        #[cfg(test)]
        mod quantity_algebra {
            use super::*;
            use approx::assert_relative_eq;
            use units::Kind;

            paste::paste! {
                $(
                    #[test]
                    fn [<$R:snake _algebra>]() {
                        let standard = <units::kind::$R as Kind>::standard_unit();
                        for unit in <units::kind::$R as Kind>::LIBRARY_UNITS {
                            let a = $R::new(2.5, *unit);
                            let b = $R::new(-4.0, standard);
                            assert_relative_eq!((a + b).si(), a.si() + b.si(), epsilon = 1e-9, max_relative = 1e-9);
                            assert_relative_eq!((a - b).si(), a.si() - b.si(), epsilon = 1e-9, max_relative = 1e-9);
                            assert_eq!((a + a).unit(), *unit);
                            assert_relative_eq!(a.to(standard).si(), a.si(), max_relative = 1e-9);
                            assert_relative_eq!($R::from_si(a.si()).si(), a.si(), max_relative = 1e-9);

                            assert_eq!($R::interpolate(a, b, 0.0).si(), a.si());
                            assert_relative_eq!($R::interpolate(a, b, 1.0).si(), b.si(), epsilon = 1e-9, max_relative = 1e-9);
                            assert_relative_eq!(
                                $R::interpolate(a, b, 0.5).si(),
                                (a.si() + b.si()) / 2.0,
                                epsilon = 1e-9,
                                max_relative = 1e-9
                            );

                            let narrow = $R::<f32>::new(2.5, *unit);
                            assert_relative_eq!(f64::from(narrow.si()), a.si(), max_relative = 1e-6);
                        }
                    }
                )+

                $(
                    #[test]
                    fn [<$A:snake _algebra>]() {
                        let standard = <units::kind::$A as Kind>::standard_unit();
                        for unit in <units::kind::$A as Kind>::LIBRARY_UNITS {
                            // Values far from a unit's origin lose precision to its offset.
                            let tolerance = unit.to_standard(0.0).abs().max(1.0) * 1e-12;
                            let a = $A::new(12.5, *unit);
                            let r = Rel::new(3.0, unit.relative_unit());
                            assert_relative_eq!(((a + r) - r).si(), a.si(), epsilon = tolerance, max_relative = 1e-9);
                            assert_eq!((a + r).unit(), *unit);

                            let other = $A::new(-7.0, standard);
                            assert_relative_eq!((a - other).si(), a.si() - other.si(), epsilon = tolerance, max_relative = 1e-9);
                            assert_eq!((a - a).value(), 0.0);
                            assert_eq!((a - a).unit(), unit.relative_unit());

                            assert_eq!($A::interpolate(a, other, 0.0).si(), a.si());
                            assert_relative_eq!($A::interpolate(a, other, 1.0).si(), other.si(), epsilon = tolerance, max_relative = 1e-9);
                        }
                    }
                )+
            }
        }
    };
}

quantities! {
    relative:
        Dimensionless,
        Length, Area, Volume, LinearDensity,
        Mass, Density, FlowMass,
        Duration, Frequency,
        Angle, SolidAngle,
        Speed, Acceleration, Force, Energy, Torque, Power, Pressure, FlowVolume,
        Temperature,
        ElectricalCurrent, ElectricalCharge, ElectricalPotential, ElectricalResistance,
        ElectricalConductance,
        AmountOfSubstance, LuminousIntensity,
        Money, MoneyPerArea, MoneyPerEnergy, MoneyPerLength, MoneyPerMass, MoneyPerDuration,
        MoneyPerVolume;
    absolute:
        Position, Time, Direction, AbsoluteTemperature;
}
