use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use crate::embedder::models::{Autoplay, ProviderId};
use crate::embedder::traits::EmbedProvider;

pub const ID: &str = "youtube";

lazy_static! {
    static ref PATTERN: Regex = Regex::new(r"youtube\.com|youtu\.be").unwrap();
}

/// YouTube, embedded through the privacy-enhanced nocookie domain
pub struct YouTube;

impl YouTube {
    fn query_param(url: &Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    fn video_id(raw: &str, parsed: Option<&Url>) -> String {
        let Some(url) = parsed else {
            return String::new();
        };

        if raw.contains("youtu.be/") {
            // Short links carry the id as the whole path
            url.path().strip_prefix('/').unwrap_or(url.path()).to_string()
        } else {
            Self::query_param(url, "v").unwrap_or_default()
        }
    }
}

impl EmbedProvider for YouTube {
    fn id(&self) -> ProviderId {
        ProviderId::new(ID)
    }

    fn matches(&self, url: &str) -> bool {
        PATTERN.is_match(url)
    }

    fn embed_url(&self, url: &str, autoplay: Autoplay) -> String {
        let auto = autoplay.as_flag();
        let mute = if autoplay.is_on() { "&mute=1" } else { "" };
        let parsed = Url::parse(url).ok();

        let list = parsed
            .as_ref()
            .and_then(|u| Self::query_param(u, "list"))
            .filter(|l| !l.is_empty());
        if let Some(list) = list {
            return format!(
                "https://www.youtube-nocookie.com/embed/videoseries?list={}&autoplay={}{}",
                list, auto, mute
            );
        }

        let video_id = Self::video_id(url, parsed.as_ref());
        format!(
            "https://www.youtube-nocookie.com/embed/{}?autoplay={}{}&rel=0&enablejsapi=1",
            video_id, auto, mute
        )
    }
}
