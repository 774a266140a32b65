use lazy_static::lazy_static;
use regex::Regex;

use super::{last_segment, strip_query};
use crate::embedder::models::{Autoplay, ProviderId};
use crate::embedder::traits::EmbedProvider;

pub const ID: &str = "dailymotion";

lazy_static! {
    static ref PATTERN: Regex = Regex::new(r"dailymotion\.com|dai\.ly").unwrap();
}

/// Dailymotion videos and playlists
pub struct Dailymotion;

impl EmbedProvider for Dailymotion {
    fn id(&self) -> ProviderId {
        ProviderId::new(ID)
    }

    fn matches(&self, url: &str) -> bool {
        PATTERN.is_match(url)
    }

    fn embed_url(&self, url: &str, autoplay: Autoplay) -> String {
        let auto = autoplay.as_flag();

        if let Some((_, rest)) = url.split_once("/playlist/") {
            // Only the segment up to a repeated marker is the playlist id
            let list_id = strip_query(rest.split("/playlist/").next().unwrap_or(rest));
            return format!(
                "https://www.dailymotion.com/embed/playlist/{}?autoplay={}",
                list_id, auto
            );
        }

        // Slugged links look like x8abc12_some-title
        let segment = last_segment(url);
        let video_id = segment.split('_').next().unwrap_or(segment);
        format!(
            "https://www.dailymotion.com/embed/video/{}?autoplay={}",
            video_id, auto
        )
    }
}
