use url::Url;

use crate::error::LinkOpenError;

/// Opens a lesson URL in a new browsing context.
///
/// Implementations are fire-and-forget: an `Err` is logged by the caller and
/// never reaches the student. Chosen once at startup, see [`OpenStrategy`].
pub trait LinkOpener: Send + Sync {
    /// Request that `url` be opened.
    ///
    /// # Errors
    ///
    /// Returns `LinkOpenError` if the request could not even be issued.
    fn open(&self, url: &Url) -> Result<(), LinkOpenError>;
}

const MOBILE_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// How lesson links should be opened on the current platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenStrategy {
    /// Click a transient `noopener noreferrer` anchor.
    Desktop,
    /// Open a blank context, then point it at the URL after a short delay.
    Mobile,
}

impl OpenStrategy {
    /// Picks a strategy from a user-agent string (case-insensitive).
    #[must_use]
    pub fn detect(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if MOBILE_MARKERS.iter().any(|marker| ua.contains(marker)) {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}
