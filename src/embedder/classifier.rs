// Provider detection

use super::models::{ClassifiedReference, Platform};
use super::registry::ProviderRegistry;

/// Map a raw reference to its platform.
///
/// Anything not starting with `http` is local without consulting the
/// registry. Remote URLs no provider accepts also fall back to local and
/// will be rendered as a native media element.
pub fn classify(raw_url: &str, registry: &ProviderRegistry) -> ClassifiedReference {
    let platform = if !raw_url.starts_with("http") {
        Platform::Local
    } else {
        match registry.find_match(raw_url) {
            Some(provider) => Platform::Provider(provider.id()),
            None => {
                log::debug!("[Classifier] No provider for {}, treating as local", raw_url);
                Platform::Local
            }
        }
    };

    ClassifiedReference {
        platform,
        raw_url: raw_url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedder::models::ProviderId;

    fn platform_of(url: &str) -> Platform {
        classify(url, &ProviderRegistry::with_defaults()).platform
    }

    fn provider(id: &str) -> Platform {
        Platform::Provider(ProviderId::new(id))
    }

    #[test]
    fn representative_urls() {
        assert_eq!(platform_of("https://www.youtube.com/watch?v=abc123"), provider("youtube"));
        assert_eq!(platform_of("https://youtu.be/xyz789"), provider("youtube"));
        assert_eq!(platform_of("https://vimeo.com/123456"), provider("vimeo"));
        assert_eq!(platform_of("https://www.instagram.com/p/abc/"), provider("instagram"));
        assert_eq!(
            platform_of("https://www.tiktok.com/@user/video/7000000000000000000"),
            provider("tiktok")
        );
        assert_eq!(platform_of("https://dai.ly/x8abc12"), provider("dailymotion"));
    }

    #[test]
    fn relative_paths_are_local() {
        assert_eq!(platform_of("local-file.mp4"), Platform::Local);
        assert_eq!(platform_of("/media/youtube.com.mp4"), Platform::Local);
        assert_eq!(platform_of("HTTPS://youtube.com/watch?v=a"), Platform::Local);
    }

    #[test]
    fn unknown_remote_falls_back_to_local() {
        let classified = classify("https://cdn.example.com/clip.mp4", &ProviderRegistry::with_defaults());
        assert_eq!(classified.platform, Platform::Local);
        assert_eq!(classified.raw_url, "https://cdn.example.com/clip.mp4");
    }

    #[test]
    fn empty_registry_classifies_everything_local() {
        let classified = classify("https://youtu.be/xyz", &ProviderRegistry::new());
        assert_eq!(classified.platform, Platform::Local);
    }
}
