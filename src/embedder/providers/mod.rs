// Built-in embed providers

pub mod dailymotion;
pub mod instagram;
pub mod template;
pub mod tiktok;
pub mod vimeo;
pub mod youtube;

pub use dailymotion::Dailymotion;
pub use instagram::Instagram;
pub use template::TemplateProvider;
pub use tiktok::TikTok;
pub use vimeo::Vimeo;
pub use youtube::YouTube;

/// Last non-empty `/`-separated segment, or "" when there is none
pub(crate) fn last_segment(s: &str) -> &str {
    s.split('/').filter(|seg| !seg.is_empty()).last().unwrap_or("")
}

/// Everything before the first `?`
pub(crate) fn strip_query(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

/// Everything before the first `?` or `#`
pub(crate) fn strip_query_and_fragment(url: &str) -> &str {
    let no_query = strip_query(url);
    no_query.split('#').next().unwrap_or(no_query)
}
