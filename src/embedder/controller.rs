// Per-element render decision

use tokio::sync::mpsc::UnboundedSender;

use super::classifier::classify;
use super::consent::{is_allowed, ConsentState};
use super::markup::{self, AUTOPLAY_ATTR, LOADED_ATTR, REFERENCE_ATTR};
use super::models::{
    Autoplay, ClassifiedReference, ConsentRequest, Platform, ProviderId, RenderState, Translation,
    VideoReference,
};
use super::registry::ProviderRegistry;
use super::traits::VideoElement;

/// Channel on which placeholder accept clicks are reported
pub type ConsentRequestSender<E> = UnboundedSender<ConsentRequest<E>>;

/// What `process` did to an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Reference attribute missing or empty
    NoReference,
    /// Media was injected earlier; left untouched
    AlreadyLoaded,
    /// Media injected on this pass
    MediaLoaded(Platform),
    /// Placeholder rendered on this pass
    PlaceholderShown(ProviderId),
    /// Placeholder from an earlier pass kept as-is
    PlaceholderKept(ProviderId),
}

/// Current render state, as visible on the element
pub fn render_state<E: VideoElement>(element: &E) -> RenderState {
    if element.attribute(LOADED_ATTR).as_deref() == Some("true") {
        RenderState::MediaLoaded
    } else if element.has_placeholder() {
        RenderState::PlaceholderShown
    } else {
        RenderState::Unloaded
    }
}

/// Renders one element at a time against borrowed page state.
///
/// `MediaLoaded` is terminal: once media is injected the element is never
/// re-evaluated, even if consent is revoked afterwards.
pub struct RenderController<'a, E> {
    registry: &'a ProviderRegistry,
    consent: &'a ConsentState,
    translation: &'a Translation,
    requests: &'a ConsentRequestSender<E>,
}

impl<'a, E: VideoElement + 'static> RenderController<'a, E> {
    pub fn new(
        registry: &'a ProviderRegistry,
        consent: &'a ConsentState,
        translation: &'a Translation,
        requests: &'a ConsentRequestSender<E>,
    ) -> Self {
        Self {
            registry,
            consent,
            translation,
            requests,
        }
    }

    pub fn process(&self, element: &E) -> RenderOutcome {
        let Some(reference) = element
            .attribute(REFERENCE_ATTR)
            .filter(|r| !r.is_empty())
            .map(VideoReference::new)
        else {
            return RenderOutcome::NoReference;
        };

        if render_state(element) == RenderState::MediaLoaded {
            return RenderOutcome::AlreadyLoaded;
        }

        let classified = classify(&reference.raw_url, self.registry);
        if is_allowed(&classified, self.consent) {
            self.render_media(element, &classified);
            return RenderOutcome::MediaLoaded(classified.platform);
        }

        // Denied implies a remote provider
        let Platform::Provider(vendor) = classified.platform else {
            return RenderOutcome::NoReference;
        };

        if element.has_placeholder() {
            return RenderOutcome::PlaceholderKept(vendor);
        }

        self.render_placeholder(element, &vendor);
        RenderOutcome::PlaceholderShown(vendor)
    }

    fn media_markup(&self, element: &E, classified: &ClassifiedReference) -> String {
        let autoplay = Autoplay::from_attribute(element.attribute(AUTOPLAY_ATTR).as_deref());

        match &classified.platform {
            Platform::Local => markup::local_video(&classified.raw_url, autoplay),
            Platform::Provider(id) => match self.registry.get(id) {
                Some(provider) => {
                    markup::provider_frame(&provider.embed_url(&classified.raw_url, autoplay))
                }
                None => {
                    log::warn!("[Render] Provider {} vanished, rendering as local", id);
                    markup::local_video(&classified.raw_url, autoplay)
                }
            },
        }
    }

    fn render_media(&self, element: &E, classified: &ClassifiedReference) {
        let html = self.media_markup(element, classified);
        element.replace_content(&html);
        element.set_attribute(LOADED_ATTR, "true");
        log::debug!("[Render] Loaded {} media: {}", classified.platform, classified.raw_url);
    }

    fn render_placeholder(&self, element: &E, vendor: &ProviderId) {
        element.set_attribute(LOADED_ATTR, "false");
        element.replace_content(&markup::placeholder(self.translation, &vendor.display_name()));

        let requests = self.requests.clone();
        let requested = vendor.clone();
        // The handler lives inside the element, so it must not own it
        let origin = element.downgrade();
        element.on_accept(Box::new(move || {
            let Some(element) = E::upgrade(&origin) else {
                log::warn!("[Render] Consent request for {} from a dropped element", requested);
                return;
            };
            log::info!("[Render] Consent requested for {}", requested);
            let request = ConsentRequest {
                vendor: requested.clone(),
                element,
            };
            if requests.send(request).is_err() {
                log::warn!("[Render] Consent request for {} dropped: no listener", requested);
            }
        }));
        log::debug!("[Render] Placeholder shown for {}", vendor);
    }
}
