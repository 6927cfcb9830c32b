// Licensed to the Apache Software Foundation (ASF) under one or more
// contributor license agreements.  See the NOTICE file distributed with
// this work for additional information regarding copyright ownership.
// The ASF licenses this file to You under the Apache License, Version 2.0
// (the "License"); you may not use this file except in compliance with
// the License.  You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Baggage, the key/value side-channel that travels next to the span
//! identity.

use serde::{Deserialize, Serialize};

/// Ordered, string keyed set of entries. Keys are unique.
///
/// Values are immutable: [`Baggage::with_entry`] returns a new set and leaves
/// the receiver untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Baggage {
    entries: Vec<(String, String)>,
}

impl Baggage {
    /// Empty baggage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Copy with `key` set to `value`. An existing entry keeps its position.
    #[must_use]
    pub fn with_entry(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        let mut entries = self.entries.clone();
        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => entries.push((key, value)),
        }
        Self { entries }
    }

    /// All entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Baggage {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Baggage::new(), |baggage, (k, v)| baggage.with_entry(k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_entry_leaves_original_untouched() {
        let first = Baggage::new().with_entry("user", "alice");
        let second = first.with_entry("tenant", "acme");

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
        assert_eq!(second.get("user"), Some("alice"));
        assert_eq!(second.get("tenant"), Some("acme"));
    }

    #[test]
    fn replace_keeps_position() {
        let baggage: Baggage = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        let baggage = baggage.with_entry("b", "20");

        let entries: Vec<_> = baggage.iter().collect();
        assert_eq!(entries, vec![("a", "1"), ("b", "20"), ("c", "3")]);
    }

    #[test]
    fn missing_key() {
        assert_eq!(Baggage::new().get("Lineage"), None);
        assert!(Baggage::new().is_empty());
    }
}
