use std::sync::Arc;

/// Known locality names used to resolve free-text addresses
///
/// Entries are kept lowercase, trimmed and unique, in the order they were
/// configured. Cloning is cheap; the entries are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gazetteer {
    entries: Arc<[String]>,
}

impl Gazetteer {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for entry in entries {
            let entry = normalize(entry.as_ref());
            if !entry.is_empty() && !normalized.contains(&entry) {
                normalized.push(entry);
            }
        }

        Self {
            entries: normalized.into(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Extract the gazetteer entries mentioned in an address
    ///
    /// Matching is a case-insensitive substring test. An address that names
    /// no known locality yields an empty list.
    pub fn extract_areas(&self, address: &str) -> Vec<String> {
        let address = normalize(address);
        if address.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|entry| address.contains(entry.as_str()))
            .cloned()
            .collect()
    }

    /// Resolve an address once so it can be scored against many candidates
    pub fn resolve(&self, address: &str) -> ResolvedLocation {
        ResolvedLocation {
            areas: self.extract_areas(address),
            normalized_address: normalize(address),
        }
    }
}

/// Address resolved against the gazetteer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedLocation {
    /// Gazetteer entries found in the address
    pub areas: Vec<String>,
    /// Lowercased, trimmed address text
    pub normalized_address: String,
}

impl ResolvedLocation {
    pub fn has_areas(&self) -> bool {
        !self.areas.is_empty()
    }
}

#[inline]
pub(crate) fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
