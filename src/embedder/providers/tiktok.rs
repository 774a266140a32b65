use lazy_static::lazy_static;
use regex::Regex;

use super::{last_segment, strip_query_and_fragment};
use crate::embedder::models::{Autoplay, ProviderId};
use crate::embedder::traits::EmbedProvider;

pub const ID: &str = "tiktok";

lazy_static! {
    static ref PATTERN: Regex = Regex::new(r"tiktok\.com").unwrap();
    static ref VIDEO_ID: Regex = Regex::new(r"/video/(\d+)").unwrap();
}

/// TikTok embed, keyed by the numeric video id when present
pub struct TikTok;

impl EmbedProvider for TikTok {
    fn id(&self) -> ProviderId {
        ProviderId::new(ID)
    }

    fn matches(&self, url: &str) -> bool {
        PATTERN.is_match(url)
    }

    fn embed_url(&self, url: &str, _autoplay: Autoplay) -> String {
        let clean = strip_query_and_fragment(url);
        let id = VIDEO_ID
            .captures(clean)
            .and_then(|caps| caps.get(1))
            .map_or_else(|| last_segment(clean), |m| m.as_str());
        format!("https://www.tiktok.com/embed/{}", id)
    }
}
