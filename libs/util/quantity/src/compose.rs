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
use crate::{Real, Rel};
use std::{
    fmt,
    ops::{Div, Mul},
};
use units::{kind::*, Kind};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operator {
    Mul,
    Div,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Mul => "*",
            Self::Div => "/",
        })
    }
}

/// One product or quotient of kinds that has an operator impl.
#[derive(Clone, Copy, Debug)]
pub struct Composition {
    pub lhs: &'static str,
    pub op: Operator,
    pub rhs: &'static str,
    pub result: &'static str,
    /// SI signatures of `lhs`, `rhs` and `result`.
    pub signatures: [&'static str; 3],
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.lhs, self.op, self.rhs, self.result)
    }
}

// Each row becomes a `Mul` or `Div` impl between relative quantities. The
// product is taken in SI terms and expressed in the standard unit of the
// result kind.
macro_rules! compose {
    ($($A:ident $op:tt $B:ident = $C:ident;)+) => {
        $(compose!(@impl $A $op $B = $C);)+

        /// Every kind product and quotient the operators support.
        pub const COMPOSITIONS: &[Composition] = &[
            $(Composition {
                lhs: <$A as Kind>::NAME,
                op: compose!(@op $op),
                rhs: <$B as Kind>::NAME,
                result: <$C as Kind>::NAME,
                signatures: [
                    <$A as Kind>::SI_SIGNATURE,
                    <$B as Kind>::SI_SIGNATURE,
                    <$C as Kind>::SI_SIGNATURE,
                ],
            }),+
        ];
    };

    (@op *) => { Operator::Mul };
    (@op /) => { Operator::Div };

    (@impl $A:ident * $B:ident = $C:ident) => {
        impl<F: Real> Mul<Rel<$B, F>> for Rel<$A, F> {
            type Output = Rel<$C, F>;

            fn mul(self, other: Rel<$B, F>) -> Rel<$C, F> {
                Rel::from_si(self.si() * other.si())
            }
        }
    };

    (@impl $A:ident / $B:ident = $C:ident) => {
        impl<F: Real> Div<Rel<$B, F>> for Rel<$A, F> {
            type Output = Rel<$C, F>;

            fn div(self, other: Rel<$B, F>) -> Rel<$C, F> {
                Rel::from_si(self.si() / other.si())
            }
        }
    };
}

compose! {
    // Geometry
    Length * Length = Area;
    Area / Length = Length;
    Area * Length = Volume;
    Length * Area = Volume;
    Volume / Length = Area;
    Volume / Area = Length;
    Length * LinearDensity = Dimensionless;
    LinearDensity * Length = Dimensionless;
    Area * LinearDensity = Length;
    Volume * LinearDensity = Area;
    Area / Volume = LinearDensity;
    Dimensionless / Length = LinearDensity;
    Dimensionless / LinearDensity = Length;

    // Kinematics
    Length / Duration = Speed;
    Speed * Duration = Length;
    Duration * Speed = Length;
    Length / Speed = Duration;
    Speed / Duration = Acceleration;
    Acceleration * Duration = Speed;
    Duration * Acceleration = Speed;
    Speed / Acceleration = Duration;
    Speed * Frequency = Acceleration;
    Frequency * Speed = Acceleration;
    Acceleration / Frequency = Speed;
    Acceleration / Speed = Frequency;
    Length * Frequency = Speed;
    Frequency * Length = Speed;
    Speed / Length = Frequency;
    Speed / Frequency = Length;
    Duration * Frequency = Dimensionless;
    Frequency * Duration = Dimensionless;
    Dimensionless / Duration = Frequency;
    Dimensionless / Frequency = Duration;

    // Dynamics
    Mass * Acceleration = Force;
    Acceleration * Mass = Force;
    Force / Mass = Acceleration;
    Force / Acceleration = Mass;
    Force * Length = Energy;
    Length * Force = Energy;
    Energy / Length = Force;
    Energy / Force = Length;
    Torque / Length = Force;
    Torque / Force = Length;
    Energy / Duration = Power;
    Power * Duration = Energy;
    Duration * Power = Energy;
    Energy / Power = Duration;
    Energy * Frequency = Power;
    Frequency * Energy = Power;
    Power / Frequency = Energy;
    Force * Speed = Power;
    Speed * Force = Power;
    Power / Speed = Force;
    Power / Force = Speed;
    Force / Area = Pressure;
    Pressure * Area = Force;
    Area * Pressure = Force;
    Force / Pressure = Area;
    Pressure * Volume = Energy;
    Volume * Pressure = Energy;
    Energy / Volume = Pressure;
    Energy / Pressure = Volume;

    // Flows and density
    Mass / Volume = Density;
    Density * Volume = Mass;
    Volume * Density = Mass;
    Mass / Density = Volume;
    Mass / Duration = FlowMass;
    FlowMass * Duration = Mass;
    Duration * FlowMass = Mass;
    Mass / FlowMass = Duration;
    Mass * Frequency = FlowMass;
    Frequency * Mass = FlowMass;
    Volume / Duration = FlowVolume;
    FlowVolume * Duration = Volume;
    Duration * FlowVolume = Volume;
    Volume / FlowVolume = Duration;
    Volume * Frequency = FlowVolume;
    Frequency * Volume = FlowVolume;
    FlowVolume * Density = FlowMass;
    Density * FlowVolume = FlowMass;
    FlowMass / Density = FlowVolume;
    FlowMass / FlowVolume = Density;
    Speed * Area = FlowVolume;
    Area * Speed = FlowVolume;
    FlowVolume / Area = Speed;
    FlowVolume / Speed = Area;

    // Electricity
    ElectricalCurrent * Duration = ElectricalCharge;
    Duration * ElectricalCurrent = ElectricalCharge;
    ElectricalCharge / Duration = ElectricalCurrent;
    ElectricalCharge / ElectricalCurrent = Duration;
    ElectricalPotential * ElectricalCurrent = Power;
    ElectricalCurrent * ElectricalPotential = Power;
    Power / ElectricalCurrent = ElectricalPotential;
    Power / ElectricalPotential = ElectricalCurrent;
    ElectricalPotential / ElectricalCurrent = ElectricalResistance;
    ElectricalPotential / ElectricalResistance = ElectricalCurrent;
    ElectricalResistance * ElectricalCurrent = ElectricalPotential;
    ElectricalCurrent * ElectricalResistance = ElectricalPotential;
    ElectricalCurrent / ElectricalPotential = ElectricalConductance;
    ElectricalCurrent / ElectricalConductance = ElectricalPotential;
    ElectricalConductance * ElectricalPotential = ElectricalCurrent;
    ElectricalPotential * ElectricalConductance = ElectricalCurrent;
    ElectricalConductance * ElectricalResistance = Dimensionless;
    ElectricalResistance * ElectricalConductance = Dimensionless;
    Dimensionless / ElectricalResistance = ElectricalConductance;
    Dimensionless / ElectricalConductance = ElectricalResistance;
    ElectricalCharge * ElectricalPotential = Energy;
    ElectricalPotential * ElectricalCharge = Energy;
    Energy / ElectricalCharge = ElectricalPotential;
    Energy / ElectricalPotential = ElectricalCharge;

    // Money
    Money / Area = MoneyPerArea;
    MoneyPerArea * Area = Money;
    Area * MoneyPerArea = Money;
    Money / MoneyPerArea = Area;
    Money / Energy = MoneyPerEnergy;
    MoneyPerEnergy * Energy = Money;
    Energy * MoneyPerEnergy = Money;
    Money / MoneyPerEnergy = Energy;
    Money / Length = MoneyPerLength;
    MoneyPerLength * Length = Money;
    Length * MoneyPerLength = Money;
    Money / MoneyPerLength = Length;
    Money / Mass = MoneyPerMass;
    MoneyPerMass * Mass = Money;
    Mass * MoneyPerMass = Money;
    Money / MoneyPerMass = Mass;
    Money / Duration = MoneyPerDuration;
    MoneyPerDuration * Duration = Money;
    Duration * MoneyPerDuration = Money;
    Money / MoneyPerDuration = Duration;
    Money / Volume = MoneyPerVolume;
    MoneyPerVolume * Volume = Money;
    Volume * MoneyPerVolume = Money;
    Money / MoneyPerVolume = Volume;
    Money * Frequency = MoneyPerDuration;
    Frequency * Money = MoneyPerDuration;
    MoneyPerEnergy * Power = MoneyPerDuration;
    Power * MoneyPerEnergy = MoneyPerDuration;
    MoneyPerMass * FlowMass = MoneyPerDuration;
    FlowMass * MoneyPerMass = MoneyPerDuration;
    MoneyPerVolume * FlowVolume = MoneyPerDuration;
    FlowVolume * MoneyPerVolume = MoneyPerDuration;
}

#[cfg(test)]
mod test {
    use super::*;
    use units::SiDimensions;

    #[test]
    fn test_signatures_compose() {
        for row in COMPOSITIONS {
            let [lhs, rhs, result] = row.signatures.map(|s| SiDimensions::parse(s).expect("signature"));
            let composed = match row.op {
                Operator::Mul => lhs.plus(rhs),
                Operator::Div => lhs.minus(rhs),
            }
            .expect("exponent");
            assert_eq!(composed, result, "{row}");
        }
    }

    #[test]
    fn test_each_row_is_listed_once() {
        for (i, row) in COMPOSITIONS.iter().enumerate() {
            for other in &COMPOSITIONS[i + 1..] {
                assert!(
                    !(row.lhs == other.lhs && row.op == other.op && row.rhs == other.rhs),
                    "{row} is listed twice"
                );
            }
        }
    }
}
