// Provider and DOM seams

use super::models::{Autoplay, ProviderId};

/// A third-party video host with an embeddable player
pub trait EmbedProvider {
    /// Provider id, also the key into the consent map
    fn id(&self) -> ProviderId;

    /// Test a URL against this provider's pattern. Never panics on
    /// malformed input; a bad URL simply does not match.
    fn matches(&self, url: &str) -> bool;

    /// Build the player URL for a reference accepted by `matches`.
    /// A missing id degrades to an empty segment instead of failing.
    fn embed_url(&self, url: &str, autoplay: Autoplay) -> String;
}

/// A candidate element on the host page.
///
/// Implementations are cheap handles (like a browser element reference):
/// clones refer to the same node.
pub trait VideoElement: Clone {
    /// Non-owning handle, held by handlers bound on the element itself
    type Weak: 'static;

    fn downgrade(&self) -> Self::Weak;

    /// `None` once the element has been dropped
    fn upgrade(weak: &Self::Weak) -> Option<Self>;

    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str);

    /// Replace the element's whole content with `html`, dropping any
    /// previously bound accept handler.
    fn replace_content(&self, html: &str);

    /// Whether a consent placeholder is currently rendered inside
    fn has_placeholder(&self) -> bool;

    /// Bind the click handler of the placeholder's accept button
    fn on_accept(&self, handler: Box<dyn Fn()>);
}

/// A page that can be searched for candidate elements
pub trait VideoPage {
    type Element: VideoElement;

    fn select_all(&self, selector: &str) -> Vec<Self::Element>;
}
