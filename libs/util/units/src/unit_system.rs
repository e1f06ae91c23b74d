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
use std::fmt;

/// Where a unit comes from. Used for display and filtering only.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum UnitSystem {
    SiBase,
    SiDerived,
    SiAccepted,
    Cgs,
    CgsEsu,
    CgsEmu,
    Imperial,
    UsCustomary,
    Mts,
    Other,
}

impl UnitSystem {
    pub const ALL: [UnitSystem; 10] = [
        Self::SiBase,
        Self::SiDerived,
        Self::SiAccepted,
        Self::Cgs,
        Self::CgsEsu,
        Self::CgsEmu,
        Self::Imperial,
        Self::UsCustomary,
        Self::Mts,
        Self::Other,
    ];

    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::SiBase | Self::SiDerived | Self::SiAccepted => "SI",
            Self::Cgs => "CGS",
            Self::CgsEsu => "CGS-ESU",
            Self::CgsEmu => "CGS-EMU",
            Self::Imperial => "Imperial",
            Self::UsCustomary => "US",
            Self::Mts => "MTS",
            Self::Other => "other",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::SiBase => "SI base unit",
            Self::SiDerived => "SI derived unit",
            Self::SiAccepted => "accepted for use with SI",
            Self::Cgs => "centimeter-gram-second",
            Self::CgsEsu => "centimeter-gram-second, electrostatic",
            Self::CgsEmu => "centimeter-gram-second, electromagnetic",
            Self::Imperial => "British imperial",
            Self::UsCustomary => "US customary",
            Self::Mts => "meter-tonne-second",
            Self::Other => "other",
        }
    }

    pub const fn is_si(&self) -> bool {
        matches!(self, Self::SiBase | Self::SiDerived | Self::SiAccepted)
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
