//! Jar manifest reading.
//!
//! Only the main section is read, and only as far as needed to look up header
//! values. Header syntax is not validated.

use crate::ManifestError;

/// A parsed `META-INF/MANIFEST.MF`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    main: MainAttributes,
}

/// Headers of the manifest's main section.
///
/// Lookups ignore ASCII case, as jar tooling does. When a header appears more
/// than once the last value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainAttributes {
    entries: Vec<(String, String)>,
}

impl Manifest {
    /// Parse manifest bytes.
    ///
    /// Reading stops at the first blank line; per-entry sections are ignored.
    pub fn parse(bytes: &[u8]) -> Result<Self, ManifestError> {
        let text = std::str::from_utf8(bytes)?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

        let mut main = MainAttributes::default();
        let mut pending: Option<(String, String)> = None;

        for (index, line) in normalized.split('\n').enumerate() {
            let line_no = index + 1;

            if line.is_empty() {
                break;
            }

            if let Some(continued) = line.strip_prefix(' ') {
                match pending.as_mut() {
                    Some((_, value)) => value.push_str(continued),
                    None => return Err(ManifestError::OrphanContinuation { line: line_no }),
                }
                continue;
            }

            let (name, value) = line
                .split_once(':')
                .and_then(|(name, rest)| Some((name, rest.strip_prefix(' ')?)))
                .filter(|(name, _)| !name.is_empty())
                .ok_or(ManifestError::InvalidHeader { line: line_no })?;

            if let Some((name, value)) = pending.take() {
                main.insert(name, value);
            }
            pending = Some((name.to_string(), value.to_string()));
        }

        if let Some((name, value)) = pending {
            main.insert(name, value);
        }

        Ok(Self { main })
    }

    /// The main section's headers.
    #[must_use]
    pub fn main_attributes(&self) -> &MainAttributes {
        &self.main
    }
}

impl MainAttributes {
    fn insert(&mut self, name: String, value: String) {
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Value of a header, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Headers in the order they first appeared.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}
