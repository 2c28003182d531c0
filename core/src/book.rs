// Entry storage and name-keyed lookup.
//
// A BTreeMap keyed by the composite name gives ordered iteration for free,
// which doubles as the "list by first name" view.

use crate::BookError;
use std::collections::BTreeMap;

/// One contact record. `first_name` is never blank for a stored entry and
/// neither name field contains whitespace after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl Entry {
    /// Canonical composite key: "first last", or just "first" when there is
    /// no last name.
    pub fn key(&self) -> String {
        compose_key(&self.first_name, &self.last_name)
    }
}

/// Strip every whitespace character, internal ones included, so "Jo hn"
/// becomes "John". Keys stay tidy and a blank first name is caught here.
pub fn normalize_name(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

pub(crate) fn compose_key(first_name: &str, last_name: &str) -> String {
    // A first-name-only key must not carry a trailing space.
    if last_name.is_empty() {
        first_name.to_string()
    } else {
        format!("{} {}", first_name, last_name)
    }
}

/// The entry store: an ordered mapping from composite key to `Entry`.
#[derive(Debug, Default)]
pub struct AddressBook {
    entries: BTreeMap<String, Entry>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new entry. Names are normalized first; a blank first name is
    /// `InvalidInput`, an existing key is `DuplicateEntry`. Nothing is
    /// mutated on either failure. Returns the composite key on success.
    pub fn insert(
        &mut self,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
    ) -> Result<String, BookError> {
        let first_name = normalize_name(first_name);
        let last_name = normalize_name(last_name);
        if first_name.is_empty() {
            return Err(BookError::InvalidInput);
        }

        let key = compose_key(&first_name, &last_name);
        if self.entries.contains_key(&key) {
            return Err(BookError::DuplicateEntry);
        }

        self.entries.insert(
            key.clone(),
            Entry {
                first_name,
                last_name,
                phone_number: phone_number.to_string(),
            },
        );
        tracing::debug!("inserted entry {}", key);
        Ok(key)
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Delete by exact key. Returns whether an entry was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            tracing::debug!("removed entry {}", key);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Update the phone number of an existing entry in place.
    pub fn set_phone(&mut self, key: &str, phone_number: &str) -> Result<(), BookError> {
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.phone_number = phone_number.to_string();
                tracing::debug!("updated phone number for {}", key);
                Ok(())
            }
            None => Err(BookError::NoMatch),
        }
    }

    /// Re-key an entry: remove it under its old key and reinsert it with new
    /// names and phone number. Fails with `DuplicateEntry` when the new key
    /// already belongs to a different entry, in which case the store is left
    /// untouched and the pending phone edit is discarded along with the
    /// rename. Returns the new key.
    pub fn rename(
        &mut self,
        key: &str,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
    ) -> Result<String, BookError> {
        let first_name = normalize_name(first_name);
        let last_name = normalize_name(last_name);
        if first_name.is_empty() {
            return Err(BookError::InvalidInput);
        }
        if !self.entries.contains_key(key) {
            return Err(BookError::NoMatch);
        }

        let new_key = compose_key(&first_name, &last_name);
        if new_key != key && self.entries.contains_key(&new_key) {
            return Err(BookError::DuplicateEntry);
        }

        // Checked above, the entry is present.
        if let Some(mut entry) = self.entries.remove(key) {
            entry.first_name = first_name;
            entry.last_name = last_name;
            entry.phone_number = phone_number.to_string();
            self.entries.insert(new_key.clone(), entry);
        }
        tracing::debug!("renamed entry {} to {}", key, new_key);
        Ok(new_key)
    }

    /// Search by name. An exact key hit is returned alone, but only when the
    /// matched entry has a last name: a first-name-only key may share its
    /// first name with other entries that do have last names, and those must
    /// surface too. Everything else falls through to a case-insensitive
    /// prefix match against each entry's first name or (when present) last
    /// name. Plain lowercase + starts_with, so queries with regex
    /// metacharacters cannot misfire.
    pub fn find(&self, query: &str) -> BTreeMap<String, Entry> {
        let mut matches = BTreeMap::new();

        let stripped = normalize_name(query);
        if stripped.is_empty() || self.entries.is_empty() {
            return matches;
        }

        if let Some(entry) = self.entries.get(query) {
            if !entry.last_name.is_empty() {
                matches.insert(entry.key(), entry.clone());
                return matches;
            }
        }

        let prefix = stripped.to_lowercase();
        for entry in self.entries.values() {
            let first_hit = entry.first_name.to_lowercase().starts_with(&prefix);
            let last_hit = !entry.last_name.is_empty()
                && entry.last_name.to_lowercase().starts_with(&prefix);
            if first_hit || last_hit {
                matches.insert(entry.key(), entry.clone());
            }
        }
        matches
    }

    /// All entries in ascending composite-key order, which is already
    /// first-name-first.
    pub fn sorted_by_first_name(&self) -> &BTreeMap<String, Entry> {
        &self.entries
    }

    /// All entries re-keyed as "last first" (or "first" alone when there is
    /// no last name) and ordered by that alternate key. A recomputed view,
    /// the primary store is not touched.
    pub fn sorted_by_last_name(&self) -> BTreeMap<String, Entry> {
        self.entries
            .values()
            .map(|entry| {
                let key = if entry.last_name.is_empty() {
                    entry.first_name.clone()
                } else {
                    format!("{} {}", entry.last_name, entry.first_name)
                };
                (key, entry.clone())
            })
            .collect()
    }
}
