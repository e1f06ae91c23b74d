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
use crate::{relative::write_suffix, Abs, QuantityError, Real, Rel};
use std::{fmt, ops::Mul};
use units::{AbsoluteKind, Kind, RelativeKind, Unit};

fn check_len(expected: usize, actual: usize) -> Result<(), QuantityError> {
    if expected == actual {
        Ok(())
    } else {
        Err(QuantityError::SizeMismatch { expected, actual })
    }
}

// Same unit: combine stored values. Otherwise combine in SI terms and
// express the result in the standard unit.
fn combine<K: Kind, F: Real>(
    (a, a_unit): (&[F], Unit<K>),
    (b, b_unit): (&[F], Unit<K>),
    same_unit: bool,
    op: impl Fn(F, F) -> F,
) -> (Vec<F>, bool) {
    if same_unit {
        (a.iter().zip(b).map(|(x, y)| op(*x, *y)).collect(), true)
    } else {
        let si = |v: &F, unit: Unit<K>| F::of(unit.to_standard(v.as_f64()));
        (
            a.iter()
                .zip(b)
                .map(|(x, y)| op(si(x, a_unit), si(y, b_unit)))
                .collect(),
            false,
        )
    }
}

fn from_si_values<K: Kind, F: Real>(si: Vec<F>) -> Vec<F> {
    let unit = K::standard_unit();
    si.into_iter()
        .map(|v| F::of(unit.from_standard(v.as_f64())))
        .collect()
}

fn write_values<F: Real>(f: &mut fmt::Formatter, values: &[F]) -> fmt::Result {
    f.write_str("[")?;
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(v, f)?;
    }
    f.write_str("]")
}

/// A list of relative quantities sharing one unit.
#[derive(Clone, Debug, PartialEq)]
pub struct RelVector<K: RelativeKind, F: Real = f64> {
    values: Vec<F>,
    unit: Unit<K>,
}

impl<K: RelativeKind, F: Real> RelVector<K, F> {
    pub fn new(values: Vec<F>, unit: Unit<K>) -> Self {
        Self { values, unit }
    }

    pub fn from_si(si: Vec<F>) -> Self {
        Self::new(from_si_values::<K, F>(si), K::standard_unit())
    }

    /// Collects `quantities` into one vector in `unit`.
    pub fn from_quantities(quantities: &[Rel<K, F>], unit: Unit<K>) -> Self {
        Self::new(quantities.iter().map(|q| q.in_unit(unit)).collect(), unit)
    }

    pub fn unit(&self) -> Unit<K> {
        self.unit
    }

    pub fn values(&self) -> &[F] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<Rel<K, F>> {
        self.values.get(i).map(|v| Rel::new(*v, self.unit))
    }

    pub fn iter(&self) -> impl Iterator<Item = Rel<K, F>> + '_ {
        self.values.iter().map(|v| Rel::new(*v, self.unit))
    }

    pub fn si(&self) -> Vec<F> {
        self.iter().map(|q| q.si()).collect()
    }

    pub fn to(&self, unit: Unit<K>) -> Self {
        Self::new(self.iter().map(|q| q.in_unit(unit)).collect(), unit)
    }

    /// Sum of the elements, in this vector's unit.
    pub fn sum(&self) -> Rel<K, F> {
        Rel::new(
            self.values.iter().fold(F::zero(), |acc, v| acc + *v),
            self.unit,
        )
    }

    pub fn plus(&self, other: &Self) -> Result<Self, QuantityError> {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn minus(&self, other: &Self) -> Result<Self, QuantityError> {
        self.zip_with(other, |a, b| a - b)
    }

    fn zip_with(&self, other: &Self, op: impl Fn(F, F) -> F) -> Result<Self, QuantityError> {
        check_len(self.len(), other.len())?;
        let (values, kept) = combine(
            (&self.values, self.unit),
            (&other.values, other.unit),
            self.unit == other.unit,
            op,
        );
        Ok(if kept {
            Self::new(values, self.unit)
        } else {
            Self::from_si(values)
        })
    }

    pub fn scale(&self, s: F) -> Self {
        Self::new(self.values.iter().map(|v| *v * s).collect(), self.unit)
    }

    /// Applies a quantity product or quotient elementwise, e.g. lengths times
    /// lengths into areas.
    pub fn zip_map<K2, K3>(
        &self,
        other: &RelVector<K2, F>,
        op: impl Fn(Rel<K, F>, Rel<K2, F>) -> Rel<K3, F>,
    ) -> Result<RelVector<K3, F>, QuantityError>
    where
        K2: RelativeKind,
        K3: RelativeKind,
    {
        check_len(self.len(), other.len())?;
        let si = self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| op(a, b).si())
            .collect();
        Ok(RelVector::from_si(si))
    }

    /// Elementwise product, for kinds whose scalar product is defined.
    pub fn times<K2, K3>(&self, other: &RelVector<K2, F>) -> Result<RelVector<K3, F>, QuantityError>
    where
        K2: RelativeKind,
        K3: RelativeKind,
        Rel<K, F>: Mul<Rel<K2, F>, Output = Rel<K3, F>>,
    {
        self.zip_map(other, |a, b| a * b)
    }
}

impl<K: RelativeKind, F: Real> Mul<F> for RelVector<K, F> {
    type Output = RelVector<K, F>;

    fn mul(self, s: F) -> Self {
        self.scale(s)
    }
}

impl<K: RelativeKind, F: Real> fmt::Display for RelVector<K, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_values(f, &self.values)?;
        write_suffix(f, self.unit)
    }
}

/// A list of absolute quantities sharing one unit.
#[derive(Clone, Debug, PartialEq)]
pub struct AbsVector<K: AbsoluteKind, F: Real = f64> {
    values: Vec<F>,
    unit: Unit<K>,
}

impl<K: AbsoluteKind, F: Real> AbsVector<K, F> {
    pub fn new(values: Vec<F>, unit: Unit<K>) -> Self {
        Self { values, unit }
    }

    pub fn from_si(si: Vec<F>) -> Self {
        Self::new(from_si_values::<K, F>(si), K::standard_unit())
    }

    pub fn unit(&self) -> Unit<K> {
        self.unit
    }

    pub fn values(&self) -> &[F] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<Abs<K, F>> {
        self.values.get(i).map(|v| Abs::new(*v, self.unit))
    }

    pub fn iter(&self) -> impl Iterator<Item = Abs<K, F>> + '_ {
        self.values.iter().map(|v| Abs::new(*v, self.unit))
    }

    pub fn si(&self) -> Vec<F> {
        self.iter().map(|q| q.si()).collect()
    }

    pub fn to(&self, unit: Unit<K>) -> Self {
        Self::new(self.iter().map(|q| q.in_unit(unit)).collect(), unit)
    }

    /// Moves every element by the matching delta.
    pub fn plus(&self, deltas: &RelVector<K::Relative, F>) -> Result<Self, QuantityError> {
        self.shift(deltas, |a, b| a + b)
    }

    pub fn minus(&self, deltas: &RelVector<K::Relative, F>) -> Result<Self, QuantityError> {
        self.shift(deltas, |a, b| a - b)
    }

    fn shift(
        &self,
        deltas: &RelVector<K::Relative, F>,
        op: impl Fn(F, F) -> F,
    ) -> Result<Self, QuantityError> {
        check_len(self.len(), deltas.len())?;
        if deltas.unit() == self.unit.relative_unit() {
            let values = self.values.iter().zip(deltas.values()).map(|(a, b)| op(*a, *b));
            return Ok(Self::new(values.collect(), self.unit));
        }
        let si = self
            .iter()
            .zip(deltas.iter())
            .map(|(a, b)| op(a.si(), b.si()))
            .collect();
        Ok(Self::from_si(si))
    }

    /// Elementwise differences, as relative quantities.
    pub fn difference(&self, other: &Self) -> Result<RelVector<K::Relative, F>, QuantityError> {
        check_len(self.len(), other.len())?;
        let (values, kept) = combine(
            (&self.values, self.unit),
            (&other.values, other.unit),
            self.unit == other.unit,
            |a, b| a - b,
        );
        Ok(if kept {
            RelVector::new(values, self.unit.relative_unit())
        } else {
            RelVector::from_si(values)
        })
    }
}

impl<K: AbsoluteKind, F: Real> fmt::Display for AbsVector<K, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_values(f, &self.values)?;
        write_suffix(f, self.unit)
    }
}
