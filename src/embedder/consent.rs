// Per-provider consent and the gate that reads it

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::models::{ClassifiedReference, Platform, ProviderId};

/// Partial consent update: providers not listed keep their prior value
pub type ConsentUpdate = HashMap<ProviderId, bool>;

/// Visitor consent per provider. Local media is implicitly always allowed
/// and is not stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsentState {
    granted: HashMap<ProviderId, bool>,
}

impl ConsentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored decision for a provider; unknown providers are denied
    pub fn get(&self, id: &ProviderId) -> bool {
        self.granted.get(id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, id: impl Into<ProviderId>, allowed: bool) {
        self.granted.insert(id.into(), allowed);
    }

    /// Merge a partial update over the current state
    pub fn merge(&mut self, update: &ConsentUpdate) {
        for (id, allowed) in update {
            log::debug!("[Consent] {} -> {}", id, allowed);
            self.granted.insert(id.clone(), *allowed);
        }
    }
}

impl From<HashMap<ProviderId, bool>> for ConsentState {
    fn from(granted: HashMap<ProviderId, bool>) -> Self {
        Self { granted }
    }
}

impl FromIterator<(ProviderId, bool)> for ConsentState {
    fn from_iter<I: IntoIterator<Item = (ProviderId, bool)>>(iter: I) -> Self {
        Self {
            granted: iter.into_iter().collect(),
        }
    }
}

/// Whether `classified` may be rendered under `consent`
pub fn is_allowed(classified: &ClassifiedReference, consent: &ConsentState) -> bool {
    match &classified.platform {
        Platform::Local => true,
        Platform::Provider(id) => consent.get(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(id: &str) -> ClassifiedReference {
        ClassifiedReference {
            platform: Platform::Provider(ProviderId::new(id)),
            raw_url: "https://example.test".to_string(),
        }
    }

    #[test]
    fn local_is_always_allowed() {
        let local = ClassifiedReference {
            platform: Platform::Local,
            raw_url: "clip.mp4".to_string(),
        };
        let mut consent = ConsentState::new();
        consent.set("local", false);
        assert!(is_allowed(&local, &consent));
    }

    #[test]
    fn absent_provider_is_denied() {
        assert!(!is_allowed(&remote("vimeo"), &ConsentState::new()));
    }

    #[test]
    fn merge_keeps_unlisted_providers() {
        let mut consent: ConsentState = [
            (ProviderId::new("youtube"), true),
            (ProviderId::new("vimeo"), false),
        ]
        .into_iter()
        .collect();

        let update: ConsentUpdate = [(ProviderId::new("vimeo"), true)].into_iter().collect();
        consent.merge(&update);

        assert!(is_allowed(&remote("youtube"), &consent));
        assert!(is_allowed(&remote("vimeo"), &consent));

        let revoke: ConsentUpdate = [(ProviderId::new("youtube"), false)].into_iter().collect();
        consent.merge(&revoke);
        assert!(!is_allowed(&remote("youtube"), &consent));
        assert!(is_allowed(&remote("vimeo"), &consent));
    }

    #[test]
    fn deserializes_from_plain_map() {
        let consent: ConsentState =
            serde_json::from_str(r#"{"youtube": true, "tiktok": false}"#).unwrap();
        assert!(consent.get(&ProviderId::new("youtube")));
        assert!(!consent.get(&ProviderId::new("tiktok")));
    }
}
