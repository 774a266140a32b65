// Config-defined provider

use regex::Regex;

use super::{last_segment, strip_query_and_fragment};
use crate::embedder::errors::EmbedError;
use crate::embedder::models::{Autoplay, ProviderId};
use crate::embedder::traits::EmbedProvider;

/// Provider declared by the host page: a regex pattern plus an embed
/// template with `{id}` and `{autoplay}` tokens.
///
/// `{id}` expands to the last path segment of the reference, ignoring
/// query and fragment; `{autoplay}` expands to `1` or `0`.
pub struct TemplateProvider {
    id: ProviderId,
    pattern: Regex,
    template: String,
}

impl TemplateProvider {
    pub fn new(
        id: impl Into<ProviderId>,
        pattern: &str,
        template: impl Into<String>,
    ) -> Result<Self, EmbedError> {
        let id = id.into();
        if id.as_str().is_empty() {
            return Err(EmbedError::InvalidConfig(
                "provider id must not be empty".to_string(),
            ));
        }
        if id.as_str() == "local" {
            return Err(EmbedError::InvalidConfig(
                "'local' is reserved and cannot be used as a provider id".to_string(),
            ));
        }

        let pattern = Regex::new(pattern).map_err(|source| EmbedError::InvalidPattern {
            provider: id.to_string(),
            source,
        })?;

        Ok(Self {
            id,
            pattern,
            template: template.into(),
        })
    }
}

impl EmbedProvider for TemplateProvider {
    fn id(&self) -> ProviderId {
        self.id.clone()
    }

    fn matches(&self, url: &str) -> bool {
        self.pattern.is_match(url)
    }

    fn embed_url(&self, url: &str, autoplay: Autoplay) -> String {
        let id = last_segment(strip_query_and_fragment(url));
        self.template
            .replace("{id}", id)
            .replace("{autoplay}", &autoplay.as_flag().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_template_tokens() {
        let p = TemplateProvider::new(
            "peertube",
            r"framatube\.org",
            "https://framatube.org/videos/embed/{id}?autoplay={autoplay}",
        )
        .unwrap();

        assert!(p.matches("https://framatube.org/w/9c9de5e8?start=10"));
        assert_eq!(
            p.embed_url("https://framatube.org/w/9c9de5e8?start=10", Autoplay::ON),
            "https://framatube.org/videos/embed/9c9de5e8?autoplay=1"
        );
    }

    #[test]
    fn rejects_bad_pattern_and_reserved_id() {
        assert!(matches!(
            TemplateProvider::new("broken", "(", "{id}"),
            Err(EmbedError::InvalidPattern { .. })
        ));
        assert!(matches!(
            TemplateProvider::new("local", "x", "{id}"),
            Err(EmbedError::InvalidConfig(_))
        ));
    }
}
