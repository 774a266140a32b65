// Page scanner and trigger loop

use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::mpsc::UnboundedReceiver;

use super::classifier::classify;
use super::config::SmartVideoConfig;
use super::consent::{ConsentState, ConsentUpdate};
use super::controller::{ConsentRequestSender, RenderController, RenderOutcome};
use super::errors::EmbedError;
use super::models::{ClassifiedReference, Translation};
use super::registry::ProviderRegistry;
use super::traits::{EmbedProvider, VideoElement, VideoPage};

/// External reasons to re-scan the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Structural change on the page (e.g. Ajax-inserted content)
    DomMutated,
    /// Partial consent decisions from the host's consent banner
    ConsentUpdated(ConsentUpdate),
}

/// Tally of a single scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub matched: usize,
    pub media_loaded: usize,
    pub placeholders_shown: usize,
    /// Elements left as they were (already loaded or placeholder kept)
    pub unchanged: usize,
    /// Elements without a usable reference
    pub skipped: usize,
}

impl ScanReport {
    fn record(&mut self, outcome: &RenderOutcome) {
        self.matched += 1;
        match outcome {
            RenderOutcome::NoReference => self.skipped += 1,
            RenderOutcome::AlreadyLoaded | RenderOutcome::PlaceholderKept(_) => self.unchanged += 1,
            RenderOutcome::MediaLoaded(_) => self.media_loaded += 1,
            RenderOutcome::PlaceholderShown(_) => self.placeholders_shown += 1,
        }
    }
}

/// Consent-gated lazy loader for one page.
///
/// Owns the consent state and drives the render controller over every
/// element matching the configured selector. Every entry point runs to
/// completion; re-scanning is idempotent.
pub struct SmartVideo<E: VideoElement + 'static> {
    selector: String,
    translation: Translation,
    registry: ProviderRegistry,
    consent: ConsentState,
    requests: ConsentRequestSender<E>,
}

impl<E: VideoElement + 'static> SmartVideo<E> {
    pub fn new(config: SmartVideoConfig, requests: ConsentRequestSender<E>) -> Result<Self, EmbedError> {
        config.validate()?;
        let registry = config.build_registry()?;

        log::info!(
            "[Scanner] Ready: selector {}, lang {}, {} providers",
            config.selector,
            config.lang,
            registry.len()
        );

        Ok(Self {
            translation: config.translation(),
            consent: config.consent_state(),
            selector: config.selector,
            registry,
            requests,
        })
    }

    /// Add or override a provider implemented in code
    pub fn register_provider(&mut self, provider: Box<dyn EmbedProvider>) {
        self.registry.register(provider);
    }

    pub fn consent(&self) -> &ConsentState {
        &self.consent
    }

    pub fn classify(&self, raw_url: &str) -> ClassifiedReference {
        classify(raw_url, &self.registry)
    }

    /// Render a single element
    pub fn process(&self, element: &E) -> RenderOutcome {
        RenderController::new(&self.registry, &self.consent, &self.translation, &self.requests)
            .process(element)
    }

    /// Process every candidate element on the page
    pub fn scan<P: VideoPage<Element = E>>(&self, page: &P) -> ScanReport {
        let controller =
            RenderController::new(&self.registry, &self.consent, &self.translation, &self.requests);

        let mut report = ScanReport::default();
        for element in page.select_all(&self.selector) {
            report.record(&controller.process(&element));
        }

        log::debug!(
            "[Scanner] Scan: {} matched, {} loaded, {} placeholders, {} unchanged, {} skipped",
            report.matched,
            report.media_loaded,
            report.placeholders_shown,
            report.unchanged,
            report.skipped
        );
        report
    }

    /// Merge a partial consent update, then re-scan
    pub fn update_consent<P: VideoPage<Element = E>>(
        &mut self,
        update: &ConsentUpdate,
        page: &P,
    ) -> ScanReport {
        log::info!("[Scanner] Consent update for {} provider(s)", update.len());
        self.consent.merge(update);
        self.scan(page)
    }

    /// Run one trigger to completion
    pub fn handle<P: VideoPage<Element = E>>(&mut self, trigger: Trigger, page: &P) -> ScanReport {
        match trigger {
            Trigger::DomMutated => self.scan(page),
            Trigger::ConsentUpdated(update) => self.update_consent(&update, page),
        }
    }

    /// Initial scan, then handle triggers until every sender is dropped.
    ///
    /// Queued `DomMutated` triggers are coalesced into a single scan; a
    /// consent update is never skipped.
    pub async fn run<P: VideoPage<Element = E>>(
        &mut self,
        page: &P,
        mut triggers: UnboundedReceiver<Trigger>,
    ) {
        self.scan(page);

        while let Some(trigger) = triggers.recv().await {
            let mut next = Some(trigger);
            while let Some(trigger) = next.take() {
                if trigger == Trigger::DomMutated {
                    let mut coalesced = 0usize;
                    loop {
                        match triggers.try_recv() {
                            Ok(Trigger::DomMutated) => coalesced += 1,
                            Ok(other) => {
                                next = Some(other);
                                break;
                            }
                            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
                        }
                    }
                    if coalesced > 0 {
                        log::debug!("[Scanner] Coalesced {} DOM mutation(s)", coalesced);
                    }
                }
                self.handle(trigger, page);
            }
        }

        log::info!("[Scanner] Trigger source closed");
    }
}
