use std::{collections::HashMap, sync::Arc};

use anyhow::Context;
use serde_json::Value;
use studio_i18n_contracts::TextService;
use studio_models::i18n::Locale;
use tracing::debug;

/// Looks texts up in nested JSON dictionaries, one per locale.
#[derive(Debug, Clone)]
pub struct DictionaryTextService {
    locale: Locale,
    fallback: Locale,
    dictionaries: Arc<HashMap<Locale, Value>>,
}

impl DictionaryTextService {
    /// Load the dictionaries shipped with the site.
    pub fn new(locale: Locale, fallback: Locale) -> anyhow::Result<Self> {
        Self::from_sources(
            locale,
            fallback,
            [
                (Locale::En, studio_assets::locales::EN_JSON),
                (Locale::Sv, studio_assets::locales::SV_JSON),
            ],
        )
    }

    pub fn from_sources<'a>(
        locale: Locale,
        fallback: Locale,
        sources: impl IntoIterator<Item = (Locale, &'a str)>,
    ) -> anyhow::Result<Self> {
        let dictionaries = sources
            .into_iter()
            .map(|(locale, source)| {
                serde_json::from_str::<Value>(source)
                    .with_context(|| format!("Failed to parse dictionary for locale {locale}"))
                    .map(|dictionary| (locale, dictionary))
            })
            .collect::<anyhow::Result<_>>()?;

        Ok(Self {
            locale,
            fallback,
            dictionaries: Arc::new(dictionaries),
        })
    }

    /// Switch the active locale, sharing the loaded dictionaries.
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            locale,
            fallback: self.fallback,
            dictionaries: Arc::clone(&self.dictionaries),
        }
    }

    fn resolve(&self, key: &str) -> Option<&Value> {
        [self.locale, self.fallback]
            .into_iter()
            .filter_map(|locale| self.dictionaries.get(&locale))
            .find_map(|dictionary| {
                key.split('.')
                    .try_fold(dictionary, |value, segment| value.get(segment))
            })
    }
}

impl TextService for DictionaryTextService {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn lookup(&self, key: &str) -> String {
        match self.resolve(key) {
            Some(Value::String(text)) => text.clone(),
            _ => {
                debug!(key, locale = %self.locale, "missing text");
                key.into()
            }
        }
    }

    fn lookup_list(&self, key: &str) -> Vec<String> {
        match self.resolve(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(Into::into)
                .collect(),
            _ => {
                debug!(key, locale = %self.locale, "missing text list");
                Vec::new()
            }
        }
    }
}
