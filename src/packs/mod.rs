mod builtin;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::{Unit, normalize_name};

pub use builtin::builtin_packs;

static BUILTIN_REGISTRY: LazyLock<PackRegistry> =
    LazyLock::new(|| PackRegistry::from_trusted(builtin_packs()));

/// Shortest ingredient name allowed to match a registry key by prefix.
pub const MIN_PREFIX_CHARS: usize = 3;

/// Store aisle an ingredient belongs to. Presentation metadata only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroceryCategory {
    Dairy,
    MeatFish,
    Produce,
    Grains,
    #[default]
    Other,
}

impl fmt::Display for GroceryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GroceryCategory::Dairy => "dairy",
            GroceryCategory::MeatFish => "meat/fish",
            GroceryCategory::Produce => "produce",
            GroceryCategory::Grains => "grains",
            GroceryCategory::Other => "other",
        })
    }
}

/// Standard retail packaging of one ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackSize {
    pub standard_pack_size: f64,
    pub unit: Unit,
    pub retail_name: String,
    pub plural_form: String,
    /// Sold as single items (a fruit), rendered as a bare count.
    #[serde(default)]
    pub discrete: bool,
    #[serde(default)]
    pub category: GroceryCategory,
}

impl PackSize {
    pub fn form(&self, count: u32) -> &str {
        if count == 1 {
            &self.retail_name
        } else {
            &self.plural_form
        }
    }
}

/// How a registry entry was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    /// The registry key occurs as whole words inside the ingredient name.
    Contained,
    /// The ingredient name is a prefix of the registry key.
    Prefix,
}

#[derive(Debug, Clone, Copy)]
pub struct PackMatch<'a> {
    pub key: &'a str,
    pub pack: &'a PackSize,
    pub kind: MatchKind,
}

/// Immutable lookup table from ingredient name to retail packaging.
///
/// Lookup policy, first hit wins:
/// 1. exact match on the normalized (trimmed, lowercase) name;
/// 2. the longest key contained as whole words in the name, ties going to
///    the highest Jaro-Winkler similarity;
/// 3. the key with the highest Jaro-Winkler similarity among keys the name is
///    a prefix of (names of at least `MIN_PREFIX_CHARS` characters only).
///
/// Remaining ties go to the lexicographically smallest key.
#[derive(Debug, Clone, Default)]
pub struct PackRegistry {
    entries: BTreeMap<String, PackSize>,
}

impl PackRegistry {
    pub fn new(entries: BTreeMap<String, PackSize>) -> Result<Self> {
        for (name, pack) in &entries {
            if name.trim().is_empty() {
                return Err(PlannerError::InvalidCatalog(
                    "pack registry contains an empty ingredient name".to_string(),
                ));
            }
            if !pack.standard_pack_size.is_finite() || pack.standard_pack_size <= 0.0 {
                return Err(PlannerError::InvalidCatalog(format!(
                    "pack size for '{}' must be positive",
                    name
                )));
            }
            if pack.retail_name.trim().is_empty() || pack.plural_form.trim().is_empty() {
                return Err(PlannerError::InvalidCatalog(format!(
                    "pack for '{}' needs both a singular and a plural name",
                    name
                )));
            }
        }
        Ok(Self::from_trusted(entries))
    }

    fn from_trusted(entries: BTreeMap<String, PackSize>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, pack)| (normalize_name(&name), pack))
                .collect(),
        }
    }

    /// The registry bundled with the crate, loaded once per process.
    pub fn builtin() -> &'static PackRegistry {
        &BUILTIN_REGISTRY
    }

    pub fn get_exact(&self, ingredient: &str) -> Option<&PackSize> {
        self.entries.get(&normalize_name(ingredient))
    }

    pub fn lookup(&self, ingredient: &str) -> Option<PackMatch<'_>> {
        let query = normalize_name(ingredient);
        if query.is_empty() {
            return None;
        }

        if let Some((key, pack)) = self.entries.get_key_value(&query) {
            return Some(PackMatch {
                key,
                pack,
                kind: MatchKind::Exact,
            });
        }

        let query_words: Vec<&str> = query.split_whitespace().collect();
        let contained = self.best_match(&query, true, |key| {
            let key_words: Vec<&str> = key.split_whitespace().collect();
            contains_words(&query_words, &key_words)
        });
        if let Some((key, pack)) = contained {
            return Some(PackMatch {
                key,
                pack,
                kind: MatchKind::Contained,
            });
        }

        if query.chars().count() < MIN_PREFIX_CHARS {
            return None;
        }
        self.best_match(&query, false, |key| key.starts_with(query.as_str()))
            .map(|(key, pack)| PackMatch {
                key,
                pack,
                kind: MatchKind::Prefix,
            })
    }

    /// Best matching key: longest first when `prefer_longest`, then by
    /// similarity. Keys are visited in order, so the first of equals wins.
    fn best_match<'a, F>(
        &'a self,
        query: &str,
        prefer_longest: bool,
        matches: F,
    ) -> Option<(&'a str, &'a PackSize)>
    where
        F: Fn(&str) -> bool,
    {
        let mut best: Option<(&'a str, &'a PackSize, usize, f64)> = None;
        for (key, pack) in &self.entries {
            let key = key.as_str();
            if !matches(key) {
                continue;
            }
            let len = if prefer_longest { key.chars().count() } else { 0 };
            let similarity = jaro_winkler(query, key);
            let better = match best {
                None => true,
                Some((_, _, best_len, best_sim)) => {
                    len > best_len || (len == best_len && similarity > best_sim)
                }
            };
            if better {
                best = Some((key, pack, len, similarity));
            }
        }
        best.map(|(key, pack, _, _)| (key, pack))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &BTreeMap<String, PackSize> {
        &self.entries
    }
}

/// Whether `needle` occurs as a contiguous run of words in `haystack`.
fn contains_words(haystack: &[&str], needle: &[&str]) -> bool {
    !needle.is_empty()
        && needle.len() <= haystack.len()
        && haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(size: f64, unit: Unit, name: &str, plural: &str) -> PackSize {
        PackSize {
            standard_pack_size: size,
            unit,
            retail_name: name.to_string(),
            plural_form: plural.to_string(),
            discrete: false,
            category: GroceryCategory::Other,
        }
    }

    fn registry() -> PackRegistry {
        let mut entries = BTreeMap::new();
        entries.insert(
            "кисело мляко".to_string(),
            pack(400.0, Unit::Gram, "кофичка", "кофички"),
        );
        entries.insert(
            "прясно мляко".to_string(),
            pack(1000.0, Unit::Milliliter, "кутия", "кутии"),
        );
        entries.insert("хляб".to_string(), pack(500.0, Unit::Gram, "самун", "самуна"));
        entries.insert("кайма".to_string(), pack(400.0, Unit::Gram, "тавичка", "тавички"));
        entries.insert(
            "пилешко филе".to_string(),
            pack(500.0, Unit::Gram, "тавичка", "тавички"),
        );
        entries.insert(
            "пилешко бутче".to_string(),
            pack(1000.0, Unit::Gram, "пакет", "пакета"),
        );
        PackRegistry::new(entries).unwrap()
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let reg = registry();
        let m = reg.lookup("  Кисело Мляко ").unwrap();
        assert_eq!(m.kind, MatchKind::Exact);
        assert_eq!(m.pack.standard_pack_size, 400.0);
    }

    #[test]
    fn test_contained_match_prefers_longest_key() {
        let reg = registry();
        let m = reg.lookup("пълнозърнест хляб").unwrap();
        assert_eq!(m.kind, MatchKind::Contained);
        assert_eq!(m.key, "хляб");

        let m = reg.lookup("кисело мляко 2%").unwrap();
        assert_eq!(m.key, "кисело мляко");
    }

    #[test]
    fn test_containment_requires_whole_words() {
        let reg = registry();
        // "хлебче" shares letters with "хляб" but is a different word.
        assert!(reg.lookup("хлебче").is_none());
        assert!(reg.lookup("телешка кайма").is_some());
    }

    #[test]
    fn test_prefix_match_is_deterministic() {
        let reg = registry();
        // Both "пилешко бутче" and "пилешко филе" start with "пилешко"; the
        // shorter key is more similar to the query.
        let m = reg.lookup("пилешко").unwrap();
        assert_eq!(m.kind, MatchKind::Prefix);
        assert_eq!(m.key, "пилешко филе");
        for _ in 0..10 {
            assert_eq!(reg.lookup("пилешко").unwrap().key, m.key);
        }
    }

    #[test]
    fn test_short_prefix_does_not_match() {
        let reg = registry();
        assert!(reg.lookup("пи").is_none());
        assert!(reg.lookup("").is_none());
    }

    #[test]
    fn test_rejects_non_positive_pack_size() {
        let mut entries = BTreeMap::new();
        entries.insert("ориз".to_string(), pack(0.0, Unit::Gram, "пакет", "пакета"));
        assert!(matches!(
            PackRegistry::new(entries),
            Err(PlannerError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_form_uses_plural_unless_one() {
        let p = pack(400.0, Unit::Gram, "кофичка", "кофички");
        assert_eq!(p.form(1), "кофичка");
        assert_eq!(p.form(2), "кофички");
        assert_eq!(p.form(0), "кофички");
    }

    #[test]
    fn test_builtin_registry_is_valid() {
        let reg = PackRegistry::new(builtin_packs()).unwrap();
        assert_eq!(reg.len(), PackRegistry::builtin().len());
        assert!(reg.get_exact("кисело мляко").is_some());
    }
}
