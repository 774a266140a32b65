// Markup for injected media and consent placeholders

use super::models::{Autoplay, Translation};

/// Attribute holding the raw video URL or local path
pub const REFERENCE_ATTR: &str = "data-aic-video";
/// Optional loosely-boolean autoplay attribute
pub const AUTOPLAY_ATTR: &str = "data-autoplay";
/// `"true"` once media is injected, `"false"` while a placeholder is shown
pub const LOADED_ATTR: &str = "data-aic-loaded";
pub const PLACEHOLDER_CLASS: &str = "aic-placeholder";
pub const ACCEPT_BUTTON_CLASS: &str = "aic-btn";

/// Escape text for use inside element content or a quoted attribute
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Native player for a local file. Autoplay is always muted.
pub fn local_video(src: &str, autoplay: Autoplay) -> String {
    let auto = if autoplay.is_on() { " autoplay muted" } else { "" };
    format!(
        r#"<video controls{} style="width:100%;height:100%;object-fit:cover;"><source src="{}" type="video/mp4"></video>"#,
        auto,
        escape_html(src)
    )
}

/// Provider player frame filling its container
pub fn provider_frame(embed_url: &str) -> String {
    format!(
        r#"<iframe src="{}" width="100%" height="100%" frameborder="0" allowfullscreen allow="autoplay; encrypted-media"></iframe>"#,
        escape_html(embed_url)
    )
}

/// Consent prompt naming `vendor`, with an accept button
pub fn placeholder(translation: &Translation, vendor: &str) -> String {
    format!(
        concat!(
            r#"<div class="{}" style="width:100%;height:100%;display:flex;flex-direction:column;align-items:center;justify-content:center;background:#1a1a1a;color:#fff;text-align:center;">"#,
            r#"<p style="margin:0 0 15px;font-size:0.9rem;">{}</p>"#,
            r#"<button class="{}" style="padding:10px 20px;background:#e62117;color:#fff;border:none;cursor:pointer;font-weight:bold;">{}</button>"#,
            "</div>"
        ),
        PLACEHOLDER_CLASS,
        escape_html(&translation.message_for(vendor)),
        ACCEPT_BUTTON_CLASS,
        escape_html(&translation.btn)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn local_video_with_and_without_autoplay() {
        assert_eq!(
            local_video("clip.mp4", Autoplay::ON),
            r#"<video controls autoplay muted style="width:100%;height:100%;object-fit:cover;"><source src="clip.mp4" type="video/mp4"></video>"#
        );
        assert_eq!(
            local_video("clip.mp4", Autoplay::OFF),
            r#"<video controls style="width:100%;height:100%;object-fit:cover;"><source src="clip.mp4" type="video/mp4"></video>"#
        );
    }

    #[test]
    fn frame_escapes_query_separators() {
        assert_eq!(
            provider_frame("https://player.vimeo.com/video/1?dnt=1&autoplay=0"),
            r#"<iframe src="https://player.vimeo.com/video/1?dnt=1&amp;autoplay=0" width="100%" height="100%" frameborder="0" allowfullscreen allow="autoplay; encrypted-media"></iframe>"#
        );
    }

    #[test]
    fn placeholder_names_vendor() {
        let t = Translation::new("Accept {vendor} cookies to watch the video", "Accept");
        let html = placeholder(&t, "YOUTUBE");
        assert!(html.contains(r#"class="aic-placeholder""#));
        assert!(html.contains(">Accept YOUTUBE cookies to watch the video</p>"));
        assert!(html.contains(r#"class="aic-btn""#));
        assert!(html.contains(">Accept</button>"));
    }

    #[test]
    fn escapes_markup_in_sources() {
        assert_eq!(escape_html(r#"a"><script>"#), "a&quot;&gt;&lt;script&gt;");
    }
}
