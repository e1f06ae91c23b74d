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
use crate::unit::{Kind, Unit, UnitDef};
use log::debug;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::{any::TypeId, collections::HashMap};

// Every unit ever defined, per kind. Library units are copied in on first
// access to the kind; runtime units are appended by `UnitBuilder::build`.
static REGISTRY: Lazy<RwLock<HashMap<TypeId, Vec<&'static UnitDef>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

fn ensure_library<K: Kind>() {
    let id = TypeId::of::<K>();
    if REGISTRY.read().contains_key(&id) {
        return;
    }
    REGISTRY.write().entry(id).or_insert_with(|| {
        debug!(
            "registering {} library units of {}",
            K::LIBRARY_UNITS.len(),
            K::NAME
        );
        K::LIBRARY_UNITS.iter().map(|unit| unit.def()).collect()
    });
}

pub(crate) fn units<K: Kind>() -> Vec<Unit<K>> {
    ensure_library::<K>();
    REGISTRY
        .read()
        .get(&TypeId::of::<K>())
        .map(|defs| defs.iter().copied().map(Unit::from_static).collect())
        .unwrap_or_default()
}

pub(crate) fn find<K: Kind>(predicate: impl Fn(&Unit<K>) -> bool) -> Option<Unit<K>> {
    ensure_library::<K>();
    REGISTRY
        .read()
        .get(&TypeId::of::<K>())
        .and_then(|defs| {
            defs.iter()
                .copied()
                .map(Unit::from_static)
                .find(|unit| predicate(unit))
        })
}

pub(crate) fn register<K: Kind>(unit: Unit<K>) {
    ensure_library::<K>();
    REGISTRY
        .write()
        .entry(TypeId::of::<K>())
        .or_default()
        .push(unit.def());
}

#[cfg(test)]
mod test {
    use crate::{kind::Mass, Kind, MassUnit};

    #[test]
    fn test_library_units_are_listed_first() {
        let all = MassUnit::all();
        assert!(all.len() >= Mass::LIBRARY_UNITS.len());
        assert_eq!(all[0], MassUnit::KILOGRAM);
        for (listed, library) in all.iter().zip(Mass::LIBRARY_UNITS) {
            assert_eq!(listed.abbreviation(), library.abbreviation());
        }
    }
}
