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
pub enum UnitError {
    /// A unit definition was rejected when it was built.
    #[error("cannot define {kind} unit '{unit}': {reason}")]
    Configuration {
        kind: &'static str,
        unit: String,
        reason: String,
    },

    #[error("no localized text for key '{key}'")]
    Lookup { key: String },

    #[error("malformed SI signature '{signature}': {reason}")]
    Signature { signature: String, reason: String },
}

impl UnitError {
    pub(crate) fn configuration(
        kind: &'static str,
        unit: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Configuration {
            kind,
            unit: unit.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn signature(signature: &str, reason: impl Into<String>) -> Self {
        Self::Signature {
            signature: signature.to_owned(),
            reason: reason.into(),
        }
    }
}
