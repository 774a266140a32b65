// Ordered provider table

use super::models::ProviderId;
use super::providers::{Dailymotion, Instagram, TikTok, Vimeo, YouTube};
use super::traits::EmbedProvider;

/// Ordered list of providers. Order is the classification tie-break:
/// the first provider whose pattern accepts a URL wins.
pub struct ProviderRegistry {
    providers: Vec<Box<dyn EmbedProvider>>,
}

impl ProviderRegistry {
    /// Empty registry; every remote URL will classify as local
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// YouTube, Vimeo, Instagram, TikTok, Dailymotion, in that order
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(YouTube));
        registry.register(Box::new(Vimeo));
        registry.register(Box::new(Instagram));
        registry.register(Box::new(TikTok));
        registry.register(Box::new(Dailymotion));
        registry
    }

    /// Add a provider, replacing one with the same id in place
    pub fn register(&mut self, provider: Box<dyn EmbedProvider>) {
        let id = provider.id();
        match self.providers.iter().position(|p| p.id() == id) {
            Some(index) => {
                log::debug!("[Registry] Overriding provider: {}", id);
                self.providers[index] = provider;
            }
            None => {
                log::debug!("[Registry] Registering provider: {}", id);
                self.providers.push(provider);
            }
        }
    }

    pub fn get(&self, id: &ProviderId) -> Option<&dyn EmbedProvider> {
        self.providers
            .iter()
            .find(|p| &p.id() == id)
            .map(|p| p.as_ref())
    }

    /// First provider accepting `url`
    pub fn find_match(&self, url: &str) -> Option<&dyn EmbedProvider> {
        self.providers
            .iter()
            .find(|p| p.matches(url))
            .map(|p| p.as_ref())
    }

    pub fn ids(&self) -> Vec<ProviderId> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedder::models::Autoplay;
    use crate::embedder::providers::TemplateProvider;

    #[test]
    fn defaults_are_ordered() {
        let ids: Vec<String> = ProviderRegistry::with_defaults()
            .ids()
            .into_iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(ids, ["youtube", "vimeo", "instagram", "tiktok", "dailymotion"]);
    }

    #[test]
    fn first_match_wins() {
        let registry = ProviderRegistry::with_defaults();
        let hit = registry
            .find_match("https://vimeo.com/123?ref=youtube.com")
            .map(|p| p.id());
        assert_eq!(hit, Some(ProviderId::new("youtube")));
    }

    #[test]
    fn override_keeps_position() {
        let mut registry = ProviderRegistry::with_defaults();
        registry.register(Box::new(
            TemplateProvider::new("vimeo", r"vimeo\.com", "https://example.test/{id}").unwrap(),
        ));

        assert_eq!(registry.len(), 5);
        assert_eq!(registry.ids()[1], ProviderId::new("vimeo"));

        let vimeo = registry.get(&ProviderId::new("vimeo")).unwrap();
        assert_eq!(
            vimeo.embed_url("https://vimeo.com/42", Autoplay::OFF),
            "https://example.test/42"
        );
    }

    #[test]
    fn new_provider_is_appended() {
        let mut registry = ProviderRegistry::with_defaults();
        registry.register(Box::new(
            TemplateProvider::new("twitch", r"twitch\.tv", "https://player.twitch.tv/?video={id}")
                .unwrap(),
        ));
        assert_eq!(registry.ids().last(), Some(&ProviderId::new("twitch")));
    }
}
