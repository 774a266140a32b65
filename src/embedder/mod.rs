// Embedder module - consent-gated lazy loading of video players

pub mod classifier;
pub mod config;
pub mod consent;
pub mod controller;
pub mod dom;
pub mod errors;
pub mod markup;
pub mod models;
pub mod providers;
pub mod registry;
pub mod scanner;
pub mod traits;

pub use classifier::classify;
pub use config::{ProviderConfig, SmartVideoConfig};
pub use consent::{is_allowed, ConsentState, ConsentUpdate};
pub use controller::{render_state, ConsentRequestSender, RenderController, RenderOutcome};
pub use dom::{MemoryElement, MemoryPage, WeakElement};
pub use errors::EmbedError;
pub use models::{Autoplay, ClassifiedReference, ConsentRequest, Platform, ProviderId, RenderState, Translation, VideoReference};
pub use registry::ProviderRegistry;
pub use scanner::{ScanReport, SmartVideo, Trigger};
pub use traits::{EmbedProvider, VideoElement, VideoPage};
