// Common data models for the embedder

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a third-party video provider (e.g. "youtube")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name shown to visitors in the consent prompt
    pub fn display_name(&self) -> String {
        self.0.to_uppercase()
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ProviderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Where a video reference is served from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Played by a native media element, never consent-gated
    Local,
    /// Embedded through a provider's player frame
    Provider(ProviderId),
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Provider(id) => write!(f, "{}", id),
        }
    }
}

/// Raw reference read from a candidate element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReference {
    pub raw_url: String,
}

impl VideoReference {
    pub fn new(raw_url: impl Into<String>) -> Self {
        Self {
            raw_url: raw_url.into(),
        }
    }
}

/// A reference after provider detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedReference {
    pub platform: Platform,
    pub raw_url: String,
}

/// Autoplay flag with loose "equals 1" coercion.
///
/// `"1"`, `" 1 "`, `"1.0"`, `"0x1"`, the number `1` and `true` all enable
/// autoplay; anything else (including a missing attribute) disables it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Autoplay(bool);

impl Autoplay {
    pub const ON: Autoplay = Autoplay(true);
    pub const OFF: Autoplay = Autoplay(false);

    /// Coerce an attribute value the way a loose `== 1` comparison would
    pub fn from_attribute(value: Option<&str>) -> Self {
        Self(value.map_or(false, loosely_equals_one))
    }

    pub fn is_on(self) -> bool {
        self.0
    }

    /// Query-string form used by provider players
    pub fn as_flag(self) -> u8 {
        u8::from(self.0)
    }
}

impl From<bool> for Autoplay {
    fn from(on: bool) -> Self {
        Self(on)
    }
}

impl From<i64> for Autoplay {
    fn from(n: i64) -> Self {
        Self(n == 1)
    }
}

impl From<&str> for Autoplay {
    fn from(s: &str) -> Self {
        Self::from_attribute(Some(s))
    }
}

fn loosely_equals_one(raw: &str) -> bool {
    let s = raw.trim();
    if s.is_empty() {
        return false;
    }

    let prefixed: [(&str, u32); 6] = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)];
    let radix = prefixed
        .iter()
        .find_map(|&(prefix, radix)| s.strip_prefix(prefix).map(|digits| (digits, radix)));

    if let Some((digits, radix)) = radix {
        // from_str_radix tolerates a sign, prefixed literals do not
        if digits.starts_with('+') {
            return false;
        }
        return u64::from_str_radix(digits, radix).map_or(false, |n| n == 1);
    }

    // f64 parsing also accepts "inf"/"nan", which never equal 1
    s.parse::<f64>().map_or(false, |n| n == 1.0)
}

/// Render state of a single candidate element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderState {
    Unloaded,
    PlaceholderShown,
    /// Terminal: loaded media is never replaced
    MediaLoaded,
}

/// Localized consent prompt strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Message template containing a `{vendor}` token
    pub msg: String,
    /// Accept-button label
    pub btn: String,
}

impl Translation {
    pub fn new(msg: impl Into<String>, btn: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            btn: btn.into(),
        }
    }

    /// Substitute the first `{vendor}` token
    pub fn message_for(&self, vendor: &str) -> String {
        self.msg.replacen("{vendor}", vendor, 1)
    }
}

/// Emitted when a visitor clicks the accept action of a placeholder.
///
/// Carries the provider that needs consent and the element the click came
/// from. It only asks for consent; granting it is the host's job.
#[derive(Debug, Clone)]
pub struct ConsentRequest<E> {
    pub vendor: ProviderId,
    pub element: E,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoplay_accepts_loose_ones() {
        for raw in ["1", " 1 ", "1.0", "01", "+1", "1e0", "0x1", "0b1"] {
            assert!(Autoplay::from_attribute(Some(raw)).is_on(), "{raw:?}");
        }
    }

    #[test]
    fn autoplay_rejects_everything_else() {
        for raw in ["0", "", " ", "true", "yes", "2", "-1", "1px", "-0x1", "NaN"] {
            assert!(!Autoplay::from_attribute(Some(raw)).is_on(), "{raw:?}");
        }
        assert!(!Autoplay::from_attribute(None).is_on());
    }

    #[test]
    fn autoplay_string_and_number_agree() {
        assert_eq!(Autoplay::from("1"), Autoplay::from(1));
        assert_eq!(Autoplay::from("0"), Autoplay::from(0));
        assert_eq!(Autoplay::from("1.0"), Autoplay::ON);
        assert_eq!(Autoplay::from(true), Autoplay::ON);
        assert_eq!(Autoplay::from(2), Autoplay::OFF);
    }

    #[test]
    fn translation_replaces_first_vendor_token_only() {
        let t = Translation::new("{vendor} needs consent ({vendor})", "OK");
        assert_eq!(t.message_for("VIMEO"), "VIMEO needs consent ({vendor})");
    }

    #[test]
    fn platform_display() {
        assert_eq!(Platform::Local.to_string(), "local");
        assert_eq!(Platform::Provider("vimeo".into()).to_string(), "vimeo");
        assert_eq!(ProviderId::from("tiktok").display_name(), "TIKTOK");
    }
}
