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
use approx::{AbsDiffEq, RelativeEq};
use num_traits::Float;
use std::fmt::{Debug, Display};

/// The storage type of a quantity. Unit scales are always `f64`; values of
/// `f32` quantities are widened for conversion and narrowed again after.
pub trait Real:
    Float
    + AbsDiffEq<Epsilon = Self>
    + RelativeEq
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
{
    fn of(v: f64) -> Self;
    fn as_f64(self) -> f64;

    /// Round half to even.
    fn rint(self) -> Self;
}

impl Real for f64 {
    fn of(v: f64) -> Self {
        v
    }

    fn as_f64(self) -> f64 {
        self
    }

    fn rint(self) -> Self {
        self.round_ties_even()
    }
}

impl Real for f32 {
    fn of(v: f64) -> Self {
        v as f32
    }

    fn as_f64(self) -> f64 {
        f64::from(self)
    }

    fn rint(self) -> Self {
        self.round_ties_even()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rint_rounds_to_even() {
        assert_eq!(Real::rint(2.5f64), 2.0);
        assert_eq!(Real::rint(3.5f64), 4.0);
        assert_eq!(Real::rint(-2.5f32), -2.0);
        assert_eq!(<f32 as Real>::of(0.1).as_f64(), f64::from(0.1f32));
    }
}
