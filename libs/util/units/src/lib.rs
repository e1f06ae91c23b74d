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

//! Units of measure. Each kind of quantity (length, power, money per hour,
//! ...) is a zero-sized type implementing `Kind`, and `Unit<K>` is a handle
//! to one unit of that kind. Library units are `const` items such as
//! `LengthUnit::KILOMETER`; further units can be defined at runtime with
//! `UnitBuilder`.
#[macro_use]
mod generic;

mod builder;
mod error;
pub mod kind;
pub mod locale;
mod money;
mod registry;
mod scale;
pub mod si;
mod unit;
mod unit_system;

pub use crate::{
    builder::UnitBuilder,
    error::UnitError,
    kind::*,
    scale::Scale,
    si::{SiDimensions, SI_SYMBOLS},
    unit::{AbsoluteKind, Currency, Kind, MonetaryKind, RelativeKind, Unit},
    unit_system::UnitSystem,
};
