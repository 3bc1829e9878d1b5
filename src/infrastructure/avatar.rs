use crate::application::ports::avatar::AvatarGenerator;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left as-is by JavaScript's `encodeURIComponent`; everything
/// else (space included) is percent-encoded.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const DEFAULT_AVATAR_SERVICE_URL: &str = "https://ui-avatars.com/api/";

/// Avatar URLs served by a UI-Avatars compatible endpoint.
#[derive(Clone, Debug)]
pub struct UiAvatarsGenerator {
    base_url: String,
}

impl UiAvatarsGenerator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for UiAvatarsGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_AVATAR_SERVICE_URL)
    }
}

impl AvatarGenerator for UiAvatarsGenerator {
    fn avatar_url(&self, display_name: &str) -> String {
        let name = utf8_percent_encode(display_name, URI_COMPONENT);
        let sep = if self.base_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{sep}name={name}&background=0D8ABC&color=fff&rounded=true&size=128",
            self.base_url
        )
    }
}
