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
use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum QuantityError {
    #[error("expected {expected} elements, found {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("{len} values do not fill a {rows}x{cols} matrix")]
    Shape { rows: usize, cols: usize, len: usize },
}
