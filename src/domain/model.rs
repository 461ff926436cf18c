use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Official/common display pair for one language.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LanguageName {
    pub official: Option<String>,
    pub common: Option<String>,
}

/// Native names keyed by language code ("eng", "urd", ...).
///
/// The upstream decides which codes appear, so this stays an open map.
pub type NativeNameSet = BTreeMap<String, LanguageName>;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryName {
    pub common: Option<String>,
    pub official: Option<String>,
    pub native_name: Option<NativeNameSet>,
}

/// One record of the `/v3.1/name/{name}` response.
///
/// Only the name block is modelled; every other upstream field (flags, cca2,
/// population, ...) is kept untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Country {
    pub name: Option<CountryName>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Country {
    pub fn common_name(&self) -> Option<&str> {
        self.name.as_ref()?.common.as_deref()
    }

    pub fn official_name(&self) -> Option<&str> {
        self.name.as_ref()?.official.as_deref()
    }

    pub fn native_name(&self, language_code: &str) -> Option<&LanguageName> {
        self.name.as_ref()?.native_name.as_ref()?.get(language_code)
    }

    pub fn native_language_codes(&self) -> impl Iterator<Item = &str> {
        self.name
            .iter()
            .filter_map(|n| n.native_name.as_ref())
            .flat_map(|set| set.keys().map(String::as_str))
    }

    pub fn extra_field(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }

    /// Case-insensitive containment of `query` in any common, official or
    /// native name of this country.
    pub fn matches_name(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }

        let Some(name) = &self.name else {
            return false;
        };

        let native = name
            .native_name
            .iter()
            .flat_map(|set| set.values())
            .flat_map(|lang| [lang.common.as_deref(), lang.official.as_deref()]);

        [name.common.as_deref(), name.official.as_deref()]
            .into_iter()
            .chain(native)
            .flatten()
            .any(|candidate| candidate.to_lowercase().contains(&needle))
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.common_name(), self.official_name()) {
            (Some(common), Some(official)) => write!(f, "{} ({})", common, official),
            (Some(name), None) | (None, Some(name)) => write!(f, "{}", name),
            (None, None) => write!(f, "<unnamed country>"),
        }
    }
}
