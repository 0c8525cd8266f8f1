//! Group label resolution.
//!
//! A [`LabelResolver`] turns a raw enumeration id into display text. Three
//! strategies are tried in order: an injected translation function, an
//! injected `key -> label` map, and finally the built-in English tables.

use std::collections::HashMap;
use std::sync::Arc;

use super::enums::{AccountType, Institution};

/// Label used when a label map has no entry for a key.
pub const DEFAULT_UNKNOWN_LABEL: &str = "Unknown";

/// Which enumeration a label is being resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelDomain {
    /// Institution ids.
    Institution,
    /// Account type ids.
    AccountType,
}

impl LabelDomain {
    /// Translation key passed to the translation function.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Institution => "institution_label",
            Self::AccountType => "account_type_label",
        }
    }

    /// Built-in English label, falling back to one naming the raw id.
    #[must_use]
    pub fn builtin_label(self, id: u32) -> String {
        let known = match self {
            Self::Institution => Institution::from_id(id).map(Institution::label),
            Self::AccountType => AccountType::from_id(id).map(AccountType::label),
        };

        if let Some(label) = known {
            return label.to_string();
        }

        tracing::debug!(domain = self.as_str(), id, "No built-in label for id");
        match self {
            Self::Institution => format!("Institution {id}"),
            Self::AccountType => format!("Account type {id}"),
        }
    }
}

impl std::fmt::Display for LabelDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translation function: `(domain, raw id) -> label`.
pub type TranslateFn = dyn Fn(LabelDomain, u32) -> String + Send + Sync;

/// The strategy a resolver will use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStrategy {
    /// Injected translation function.
    Translate,
    /// Injected label map.
    LabelMap,
    /// Built-in English tables.
    Builtin,
}

/// Resolves group labels.
#[derive(Clone)]
pub struct LabelResolver {
    translate: Option<Arc<TranslateFn>>,
    label_map: Option<HashMap<String, String>>,
    unknown_label: String,
}

impl Default for LabelResolver {
    fn default() -> Self {
        Self {
            translate: None,
            label_map: None,
            unknown_label: DEFAULT_UNKNOWN_LABEL.to_string(),
        }
    }
}

impl std::fmt::Debug for LabelResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelResolver")
            .field("translate", &self.translate.is_some())
            .field("label_map", &self.label_map)
            .field("unknown_label", &self.unknown_label)
            .finish()
    }
}

impl LabelResolver {
    /// Creates a resolver that uses the built-in tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `translate` for every label. Takes precedence over a label map.
    #[must_use]
    pub fn with_translator<F>(mut self, translate: F) -> Self
    where
        F: Fn(LabelDomain, u32) -> String + Send + Sync + 'static,
    {
        self.translate = Some(Arc::new(translate));
        self
    }

    /// Looks labels up by group key in `label_map`.
    #[must_use]
    pub fn with_label_map(mut self, label_map: HashMap<String, String>) -> Self {
        self.label_map = Some(label_map);
        self
    }

    /// Overrides the label used for keys missing from the label map.
    #[must_use]
    pub fn with_unknown_label(mut self, label: impl Into<String>) -> Self {
        self.unknown_label = label.into();
        self
    }

    /// The strategy `resolve` will use.
    #[must_use]
    pub const fn strategy(&self) -> LabelStrategy {
        if self.translate.is_some() {
            LabelStrategy::Translate
        } else if self.label_map.is_some() {
            LabelStrategy::LabelMap
        } else {
            LabelStrategy::Builtin
        }
    }

    /// Resolves the label for raw id `id` in `domain`.
    #[must_use]
    pub fn resolve(&self, domain: LabelDomain, id: u32) -> String {
        if let Some(translate) = &self.translate {
            return translate(domain, id);
        }

        if let Some(label_map) = &self.label_map {
            return label_map
                .get(&id.to_string())
                .cloned()
                .unwrap_or_else(|| self.unknown_label.clone());
        }

        domain.builtin_label(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn label_map() -> HashMap<String, String> {
        HashMap::from([
            ("1".to_string(), "WS".to_string()),
            ("2".to_string(), "QT".to_string()),
        ])
    }

    #[rstest]
    #[case(LabelDomain::Institution, 1, "Wealthsimple")]
    #[case(LabelDomain::Institution, 2, "Questrade")]
    #[case(LabelDomain::Institution, 999, "Institution 999")]
    #[case(LabelDomain::AccountType, 4, "Non-Registered")]
    #[case(LabelDomain::AccountType, 0, "Account type 0")]
    fn test_builtin_labels(#[case] domain: LabelDomain, #[case] id: u32, #[case] expected: &str) {
        let resolver = LabelResolver::new();
        assert_eq!(resolver.strategy(), LabelStrategy::Builtin);
        assert_eq!(resolver.resolve(domain, id), expected);
    }

    #[test]
    fn test_label_map_lookup_and_unknown() {
        let resolver = LabelResolver::new().with_label_map(label_map());
        assert_eq!(resolver.strategy(), LabelStrategy::LabelMap);
        assert_eq!(resolver.resolve(LabelDomain::Institution, 2), "QT");
        assert_eq!(resolver.resolve(LabelDomain::Institution, 3), "Unknown");
    }

    #[test]
    fn test_custom_unknown_label() {
        let resolver = LabelResolver::new()
            .with_label_map(HashMap::new())
            .with_unknown_label("Other");
        assert_eq!(resolver.resolve(LabelDomain::AccountType, 1), "Other");
    }

    #[test]
    fn test_translator_receives_domain_key_and_id() {
        let resolver =
            LabelResolver::new().with_translator(|domain, id| format!("{domain}:{id}"));
        assert_eq!(
            resolver.resolve(LabelDomain::AccountType, 3),
            "account_type_label:3"
        );
        assert_eq!(
            resolver.resolve(LabelDomain::Institution, 1),
            "institution_label:1"
        );
    }

    #[test]
    fn test_translator_wins_over_label_map() {
        let resolver = LabelResolver::new()
            .with_label_map(label_map())
            .with_translator(|_, id| format!("translated {id}"));
        assert_eq!(resolver.strategy(), LabelStrategy::Translate);
        assert_eq!(resolver.resolve(LabelDomain::Institution, 1), "translated 1");
    }

    #[test]
    fn test_translator_output_used_verbatim() {
        let resolver = LabelResolver::new().with_translator(|_, _| String::new());
        assert_eq!(resolver.resolve(LabelDomain::Institution, 1), "");
    }
}
