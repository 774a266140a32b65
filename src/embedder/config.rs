// Loader configuration

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::consent::ConsentState;
use super::errors::EmbedError;
use super::models::{ProviderId, Translation};
use super::providers::{dailymotion, instagram, tiktok, vimeo, youtube, TemplateProvider};
use super::registry::ProviderRegistry;

pub const DEFAULT_SELECTOR: &str = "[data-aic-video]";
pub const DEFAULT_LANG: &str = "en";

/// Host-defined provider: regex pattern plus embed template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub id: ProviderId,
    /// Regex tested against the raw reference
    pub pattern: String,
    /// Embed URL with `{id}` and `{autoplay}` tokens
    pub embed: String,
}

/// Configuration supplied at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmartVideoConfig {
    /// Selector for candidate elements
    pub selector: String,
    /// Active language code
    pub lang: String,
    /// Initial consent per provider
    pub consent: HashMap<ProviderId, bool>,
    /// Prompt strings per language, merged over the built-in `en` and `it`
    pub translations: HashMap<String, Translation>,
    /// Extra providers; an id matching a built-in overrides it
    pub providers: Vec<ProviderConfig>,
}

impl Default for SmartVideoConfig {
    fn default() -> Self {
        let consent = [youtube::ID, vimeo::ID, tiktok::ID, instagram::ID, dailymotion::ID]
            .into_iter()
            .map(|id| (ProviderId::new(id), false))
            .collect();

        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            lang: DEFAULT_LANG.to_string(),
            consent,
            translations: HashMap::new(),
            providers: Vec::new(),
        }
    }
}

fn builtin_translation(lang: &str) -> Option<Translation> {
    match lang {
        "en" => Some(Translation::new(
            "Accept {vendor} cookies to watch the video",
            "Accept",
        )),
        "it" => Some(Translation::new(
            "Accetta i cookie di {vendor} per guardare il video",
            "Accetta",
        )),
        _ => None,
    }
}

impl SmartVideoConfig {
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_consent(mut self, id: impl Into<ProviderId>, allowed: bool) -> Self {
        self.consent.insert(id.into(), allowed);
        self
    }

    pub fn with_translation(mut self, lang: impl Into<String>, translation: Translation) -> Self {
        self.translations.insert(lang.into(), translation);
        self
    }

    pub fn with_provider(mut self, provider: ProviderConfig) -> Self {
        self.providers.push(provider);
        self
    }

    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self, EmbedError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, EmbedError> {
        let path = path.as_ref();
        log::info!("[Config] Loading {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), EmbedError> {
        if self.selector.trim().is_empty() {
            return Err(EmbedError::InvalidConfig("selector must not be empty".to_string()));
        }
        for (lang, t) in &self.translations {
            if !t.msg.contains("{vendor}") {
                log::warn!("[Config] Translation '{}' has no {{vendor}} token", lang);
            }
        }
        Ok(())
    }

    /// Prompt strings for the active language, falling back to English
    pub fn translation(&self) -> Translation {
        self.translations
            .get(&self.lang)
            .cloned()
            .or_else(|| builtin_translation(&self.lang))
            .or_else(|| self.translations.get(DEFAULT_LANG).cloned())
            .or_else(|| builtin_translation(DEFAULT_LANG))
            .unwrap_or_else(|| Translation::new("{vendor}", "OK"))
    }

    pub fn consent_state(&self) -> ConsentState {
        self.consent
            .iter()
            .map(|(id, allowed)| (id.clone(), *allowed))
            .collect()
    }

    /// Built-in providers with configured ones registered on top
    pub fn build_registry(&self) -> Result<ProviderRegistry, EmbedError> {
        let mut registry = ProviderRegistry::with_defaults();
        for p in &self.providers {
            registry.register(Box::new(TemplateProvider::new(
                p.id.clone(),
                &p.pattern,
                p.embed.clone(),
            )?));
        }
        Ok(registry)
    }
}
