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
    /// A pure number, such as a ratio of two quantities of the same kind.
    Dimensionless, DimensionlessUnit: relative, "1", standard = DimensionlessUnit::SI;
    SI: "", "", SiDerived => root();
    PERCENT: "percent", "%", Other => scaled(1.0e-2);
    PER_MILLE: "per mille", "‰", Other => scaled(1.0e-3);
    PARTS_PER_MILLION: "parts per million", "ppm", Other => scaled(1.0e-6);
}
