//! Canonical resource names.
//!
//! Cloud API tags arrive as display strings ("Block Capabilities"), the
//! provider registry exposes slugs ("work_pools"). Both are folded into a
//! single canonical form so the engine can compare them: lowercase,
//! underscore-separated, with the trailing word singularized.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A resource name in canonical form.
///
/// Canonicalization is idempotent: normalizing an already-canonical name
/// returns it unchanged, so values of this type can be compared directly
/// regardless of which inventory they came from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    /// Canonicalize a raw name from either naming convention.
    ///
    /// "Block Capabilities" becomes "block_capability".
    pub fn normalize(raw: &str) -> Self {
        debug_assert!(!raw.is_empty(), "resource names must be non-empty");

        let name = raw.replace(' ', "_").to_lowercase();
        let canonical = match name.rsplit_once('_') {
            Some((head, tail)) => format!("{}_{}", head, singularize(tail)),
            None => singularize(&name),
        };

        Self(canonical)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ResourceName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ResourceName {
    /// Deserializes from a plain string, normalizing on the way in so the
    /// canonical-form invariant holds for names read from policy files.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ResourceName::normalize(&raw))
    }
}

/// Words whose plural and singular forms are identical.
const UNINFLECTED: &[&str] = &["data", "metadata", "media", "news", "series", "species"];

/// Plurals that follow no suffix rule.
const IRREGULAR: &[(&str, &str)] = &[
    ("analyses", "analysis"),
    ("children", "child"),
    ("criteria", "criterion"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("people", "person"),
    ("vertices", "vertex"),
];

/// Words ending in "s" that are already singular; their plurals append "es".
const S_FINAL_SINGULARS: &[&str] = &["alias", "bus", "status", "virus"];

/// Singularize a single lowercase word by standard English suffix rules.
fn singularize(word: &str) -> String {
    if UNINFLECTED.contains(&word) {
        return word.to_string();
    }

    for (plural, singular) in IRREGULAR {
        if word == *plural {
            return (*singular).to_string();
        }
    }

    for singular in S_FINAL_SINGULARS {
        if word == *singular {
            return word.to_string();
        }
        if let Some(stem) = word.strip_suffix("es") {
            if stem.ends_with(singular) {
                return stem.to_string();
            }
        }
    }

    // "capabilities" -> "capability", but "ties" -> "tie" via the plain
    // "s" rule below.
    if word.len() > 4 {
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{stem}y");
        }
    }

    // "boxes" -> "box", "searches" -> "search", "classes" -> "class". The
    // stem check is what keeps "houses" and "releases" on the plain "s"
    // rule instead.
    if let Some(stem) = word.strip_suffix("es") {
        if ["x", "z", "ch", "sh", "ss"].iter().any(|s| stem.ends_with(s)) {
            return stem.to_string();
        }
    }

    // Already-singular shapes: "address", "virus", "analysis".
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }

    if word.len() > 1 {
        if let Some(stem) = word.strip_suffix('s') {
            return stem.to_string();
        }
    }

    word.to_string()
}
