//! Profile image with a one-shot fallback avatar.
//!
//! The portrait is loaded from a remote URL. When it fails, a generated
//! avatar URL is substituted exactly once; a failing fallback must not
//! trigger another substitution.

use leptos::prelude::*;
use tracing::warn;

/// Query appended to the avatar service URL after the name.
const AVATAR_BACKGROUND: &str = "background=random";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Primary,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileImage {
    alt: String,
    primary_src: String,
    fallback_src: String,
    source: ImageSource,
}

impl ProfileImage {
    pub fn new(primary_src: &str, alt: &str, fallback_name: &str, avatar_service: &str) -> Self {
        Self {
            alt: alt.to_string(),
            primary_src: primary_src.to_string(),
            fallback_src: fallback_avatar_url(avatar_service, fallback_name),
            source: ImageSource::Primary,
        }
    }

    pub fn current_src(&self) -> &str {
        match self.source {
            ImageSource::Primary => &self.primary_src,
            ImageSource::Fallback => &self.fallback_src,
        }
    }

    pub fn fallback_src(&self) -> &str {
        &self.fallback_src
    }

    pub fn source(&self) -> ImageSource {
        self.source
    }

    /// Handle a load failure of the current source.
    ///
    /// Returns the fallback URL the first time; every later failure returns
    /// `None` and leaves the source alone.
    pub fn on_error(&mut self) -> Option<&str> {
        match self.source {
            ImageSource::Primary => {
                warn!(
                    "Profile image {} failed to load, using fallback avatar",
                    self.primary_src
                );
                self.source = ImageSource::Fallback;
                Some(&self.fallback_src)
            }
            ImageSource::Fallback => None,
        }
    }

    /// The `<img>` for the current source.
    ///
    /// Only the primary image carries `data-fallback-src`, so the page script
    /// has nothing to swap to once the fallback is showing.
    pub fn render(&self) -> impl IntoView {
        let fallback = (self.source == ImageSource::Primary).then(|| self.fallback_src.clone());

        view! {
            <img
                class="w-full h-full object-cover object-center transform scale-125"
                src=self.current_src().to_string()
                alt=self.alt.clone()
                data-component="profile-image"
                data-fallback-src=fallback
            />
        }
    }
}

/// Avatar-generation URL for a name: `<service>?name=Chawin+H&background=random`.
pub fn fallback_avatar_url(service: &str, name: &str) -> String {
    format!(
        "{}?name={}&{}",
        service.trim_end_matches('?'),
        encode_query_value(name.trim()),
        AVATAR_BACKGROUND
    )
}

/// Form-encode a query value: spaces become `+`, unreserved characters stay,
/// every other byte is percent-encoded.
fn encode_query_value(value: &str) -> String {
    let mut result = String::with_capacity(value.len());

    for byte in value.bytes() {
        match byte {
            b' ' => result.push('+'),
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(byte as char)
            }
            other => result.push_str(&format!("%{:02X}", other)),
        }
    }

    result
}
