//! Internal network id → external logger id mapping.
//!
//! A plain lookup table: several internal identifiers may share one
//! external logger (instrumentation groupings), and an id absent from the
//! map passes through unchanged. Mapping is total and never fails.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct IdMap {
    map: BTreeMap<String, String>,
}

impl IdMap {
    pub fn new(map: BTreeMap<String, String>) -> Self {
        Self { map }
    }

    /// External logger id for an internal network id, identity fallback.
    pub fn to_external<'a>(&'a self, internal: &'a str) -> &'a str {
        self.map.get(internal).map_or(internal, String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl FromIterator<(String, String)> for IdMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn mapped_id_is_translated() {
        let map: IdMap = [("J12".to_string(), "L-004".to_string())]
            .into_iter()
            .collect();
        assert_eq!(map.to_external("J12"), "L-004");
    }

    #[test]
    fn many_internal_ids_may_share_one_logger() {
        let map: IdMap = [
            ("J12".to_string(), "L-004".to_string()),
            ("J13".to_string(), "L-004".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.to_external("J12"), map.to_external("J13"));
    }

    proptest! {
        #[test]
        fn unmapped_id_passes_through(id in "[A-Za-z0-9_-]{1,16}") {
            let map = IdMap::default();
            prop_assert_eq!(map.to_external(&id), id.as_str());
        }
    }
}
