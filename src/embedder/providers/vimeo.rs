use lazy_static::lazy_static;
use regex::Regex;

use super::{last_segment, strip_query};
use crate::embedder::models::{Autoplay, ProviderId};
use crate::embedder::traits::EmbedProvider;

pub const ID: &str = "vimeo";

lazy_static! {
    static ref PATTERN: Regex = Regex::new(r"vimeo\.com").unwrap();
}

/// Vimeo player with do-not-track enabled
pub struct Vimeo;

impl EmbedProvider for Vimeo {
    fn id(&self) -> ProviderId {
        ProviderId::new(ID)
    }

    fn matches(&self, url: &str) -> bool {
        PATTERN.is_match(url)
    }

    fn embed_url(&self, url: &str, autoplay: Autoplay) -> String {
        let id = last_segment(strip_query(url));
        format!(
            "https://player.vimeo.com/video/{}?dnt=1&autoplay={}",
            id,
            autoplay.as_flag()
        )
    }
}
