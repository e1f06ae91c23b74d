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

//! Hook for translated unit names. Library units look up keys of the form
//! `LengthUnit.km.name` and `LengthUnit.km.abbreviation`; units built at
//! runtime always use the strings they were built with.
use crate::UnitError;
use log::warn;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::{collections::HashMap, sync::Arc};

pub trait Localization: Send + Sync {
    fn resolve(&self, key: &str) -> Option<String>;
}

impl Localization for HashMap<String, String> {
    fn resolve(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

static LOCALIZATION: Lazy<RwLock<Option<Arc<dyn Localization>>>> =
    Lazy::new(|| RwLock::new(None));

pub fn set_localization(localization: Arc<dyn Localization>) {
    *LOCALIZATION.write() = Some(localization);
}

/// Removes the installed hook, returning it.
pub fn clear_localization() -> Option<Arc<dyn Localization>> {
    LOCALIZATION.write().take()
}

/// None when no hook is installed.
pub(crate) fn resolve(key: &str) -> Option<Result<String, UnitError>> {
    let localization = LOCALIZATION.read().clone()?;
    Some(localization.resolve(key).ok_or_else(|| {
        warn!("no localized text for {key}");
        UnitError::Lookup {
            key: key.to_owned(),
        }
    }))
}
