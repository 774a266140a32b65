use lazy_static::lazy_static;
use regex::Regex;

use super::{last_segment, strip_query};
use crate::embedder::models::{Autoplay, ProviderId};
use crate::embedder::traits::EmbedProvider;

pub const ID: &str = "instagram";

lazy_static! {
    static ref PATTERN: Regex = Regex::new(r"instagram\.com").unwrap();
}

/// Instagram post embed. The player has no autoplay switch.
pub struct Instagram;

impl EmbedProvider for Instagram {
    fn id(&self) -> ProviderId {
        ProviderId::new(ID)
    }

    fn matches(&self, url: &str) -> bool {
        PATTERN.is_match(url)
    }

    fn embed_url(&self, url: &str, _autoplay: Autoplay) -> String {
        let id = last_segment(strip_query(url));
        format!("https://www.instagram.com/p/{}/embed/", id)
    }
}
