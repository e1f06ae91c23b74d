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
use crate::{relative::write_suffix, QuantityError, Real, Rel, RelVector};
use std::fmt;
use units::{RelativeKind, Unit};

/// A row-major matrix of relative quantities sharing one unit.
#[derive(Clone, Debug, PartialEq)]
pub struct RelMatrix<K: RelativeKind, F: Real = f64> {
    rows: usize,
    cols: usize,
    values: Vec<F>,
    unit: Unit<K>,
}

impl<K: RelativeKind, F: Real> RelMatrix<K, F> {
    pub fn new(rows: usize, cols: usize, values: Vec<F>, unit: Unit<K>) -> Result<Self, QuantityError> {
        if rows.checked_mul(cols) != Some(values.len()) {
            return Err(QuantityError::Shape {
                rows,
                cols,
                len: values.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            values,
            unit,
        })
    }

    pub fn from_rows(rows: &[Vec<F>], unit: Unit<K>) -> Result<Self, QuantityError> {
        let cols = rows.first().map(Vec::len).unwrap_or_default();
        if let Some(row) = rows.iter().find(|row| row.len() != cols) {
            return Err(QuantityError::SizeMismatch {
                expected: cols,
                actual: row.len(),
            });
        }
        Self::new(rows.len(), cols, rows.concat(), unit)
    }

    pub fn from_si(rows: usize, cols: usize, si: Vec<F>) -> Result<Self, QuantityError> {
        let unit = K::standard_unit();
        let values = si
            .into_iter()
            .map(|v| F::of(unit.from_standard(v.as_f64())))
            .collect();
        Self::new(rows, cols, values, unit)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn unit(&self) -> Unit<K> {
        self.unit
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Rel<K, F>> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.values
            .get(row * self.cols + col)
            .map(|v| Rel::new(*v, self.unit))
    }

    pub fn row(&self, row: usize) -> Option<RelVector<K, F>> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(RelVector::new(
            self.values[start..start + self.cols].to_vec(),
            self.unit,
        ))
    }

    pub fn column(&self, col: usize) -> Option<RelVector<K, F>> {
        if col >= self.cols {
            return None;
        }
        let values = (0..self.rows).map(|r| self.values[r * self.cols + col]);
        Some(RelVector::new(values.collect(), self.unit))
    }

    pub fn transpose(&self) -> Self {
        let mut values = Vec::with_capacity(self.values.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                values.push(self.values[r * self.cols + c]);
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            values,
            unit: self.unit,
        }
    }

    pub fn to(&self, unit: Unit<K>) -> Self {
        Self {
            values: self
                .values
                .iter()
                .map(|v| Rel::new(*v, self.unit).in_unit(unit))
                .collect(),
            unit,
            ..*self
        }
    }

    pub fn plus(&self, other: &Self) -> Result<Self, QuantityError> {
        self.zip_with(other, RelVector::plus)
    }

    pub fn minus(&self, other: &Self) -> Result<Self, QuantityError> {
        self.zip_with(other, RelVector::minus)
    }

    fn zip_with(
        &self,
        other: &Self,
        op: impl Fn(&RelVector<K, F>, &RelVector<K, F>) -> Result<RelVector<K, F>, QuantityError>,
    ) -> Result<Self, QuantityError> {
        if (self.rows, self.cols) != (other.rows, other.cols) {
            return Err(QuantityError::SizeMismatch {
                expected: self.values.len(),
                actual: other.values.len(),
            });
        }
        let out = op(
            &RelVector::new(self.values.clone(), self.unit),
            &RelVector::new(other.values.clone(), other.unit),
        )?;
        Self::new(self.rows, self.cols, out.values().to_vec(), out.unit())
    }

    pub fn scale(&self, s: F) -> Self {
        Self {
            values: self.values.iter().map(|v| *v * s).collect(),
            unit: self.unit,
            ..*self
        }
    }
}

impl<K: RelativeKind, F: Real> fmt::Display for RelMatrix<K, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for r in 0..self.rows {
            if r > 0 {
                f.write_str("; ")?;
            }
            for c in 0..self.cols {
                if c > 0 {
                    f.write_str(", ")?;
                }
                fmt::Display::fmt(&self.values[r * self.cols + c], f)?;
            }
        }
        f.write_str("]")?;
        write_suffix(f, self.unit)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;
    use units::{kind::Length, LengthUnit};

    #[test]
    fn test_shape_is_checked() {
        let err = RelMatrix::<Length>::new(2, 2, vec![1.0, 2.0, 3.0], LengthUnit::METER).unwrap_err();
        assert_eq!(err, QuantityError::Shape { rows: 2, cols: 2, len: 3 });
        assert!(RelMatrix::<Length>::new(usize::MAX, 2, vec![1.0, 2.0], LengthUnit::METER).is_err());
        assert!(RelMatrix::<Length>::from_rows(&[vec![1.0], vec![1.0, 2.0]], LengthUnit::METER).is_err());
    }

    #[test]
    fn test_rows_columns_and_transpose() -> Result<()> {
        let m = RelMatrix::<Length>::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]], LengthUnit::METER)?;
        assert_eq!(m.get(1, 2).map(|q| q.value()), Some(6.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.row(0).map(|r| r.values().to_vec()), Some(vec![1.0, 2.0, 3.0]));
        assert_eq!(m.column(1).map(|c| c.values().to_vec()), Some(vec![2.0, 5.0]));
        let t = m.transpose();
        assert_eq!((t.rows(), t.cols()), (3, 2));
        assert_eq!(t.get(2, 1).map(|q| q.value()), Some(6.0));
        assert_eq!(m.to_string(), "[1, 2, 3; 4, 5, 6] m");
        Ok(())
    }

    #[test]
    fn test_elementwise_sums() -> Result<()> {
        let a = RelMatrix::<Length>::new(1, 2, vec![1.0, 2.0], LengthUnit::KILOMETER)?;
        let b = RelMatrix::new(1, 2, vec![500.0, 500.0], LengthUnit::METER)?;
        let sum = a.plus(&b)?;
        assert_eq!(sum.unit(), LengthUnit::METER);
        assert_eq!(sum.get(0, 1).map(|q| q.value()), Some(2500.0));
        let same = a.minus(&a)?;
        assert_eq!(same.unit(), LengthUnit::KILOMETER);
        assert_eq!(same.scale(2.0).get(0, 0).map(|q| q.value()), Some(0.0));
        assert_eq!(a.to(LengthUnit::METER).get(0, 0).map(|q| q.value()), Some(1000.0));
        Ok(())
    }
}
