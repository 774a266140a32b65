//! Consent-gated lazy loader for embedded video players.
//!
//! A candidate element carries a video reference in `data-aic-video`. Local
//! files render straight away as a native player; references to a known
//! provider render as a player frame only once the visitor has accepted
//! that provider's cookies, and as a consent placeholder until then.

pub mod embedder;

pub use embedder::{
    classify, is_allowed, render_state, Autoplay, ClassifiedReference, ConsentRequest,
    ConsentRequestSender, ConsentState, ConsentUpdate, EmbedError, EmbedProvider, MemoryElement,
    MemoryPage, Platform, ProviderConfig, ProviderId, ProviderRegistry, RenderController,
    RenderOutcome, RenderState, ScanReport, SmartVideo, SmartVideoConfig, Translation, Trigger,
    VideoElement, VideoPage, VideoReference, WeakElement,
};
