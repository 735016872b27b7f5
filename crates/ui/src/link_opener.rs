use std::sync::Arc;

use dioxus::document::eval;
use services::{LinkOpenError, LinkOpener, OpenStrategy};
use url::Url;

const ANCHOR_SCRIPT_TEMPLATE: &str = r#"
    const link = document.createElement("a");
    link.href = {url};
    link.target = "_blank";
    link.rel = "noopener noreferrer";
    document.body.appendChild(link);
    link.click();
    document.body.removeChild(link);
"#;

const DEFERRED_WINDOW_SCRIPT_TEMPLATE: &str = r#"
    setTimeout(() => {
        const win = window.open("", "_blank");
        if (win) {
            win.location.href = {url};
        } else {
            window.location.href = {url};
        }
    }, {delay_ms});
"#;

/// Delay before a mobile open, giving the completion write time to land.
pub const MOBILE_OPEN_DELAY_MS: u32 = 100;

fn js_string(url: &Url) -> Result<String, LinkOpenError> {
    serde_json::to_string(url.as_str()).map_err(|err| LinkOpenError::Unavailable(err.to_string()))
}

pub(crate) fn anchor_script(url: &Url) -> Result<String, LinkOpenError> {
    Ok(ANCHOR_SCRIPT_TEMPLATE.replace("{url}", &js_string(url)?))
}

pub(crate) fn deferred_window_script(url: &Url, delay_ms: u32) -> Result<String, LinkOpenError> {
    Ok(DEFERRED_WINDOW_SCRIPT_TEMPLATE
        .replace("{url}", &js_string(url)?)
        .replace("{delay_ms}", &delay_ms.to_string()))
}

/// Desktop strategy: click a transient `noopener noreferrer` anchor.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorOpener;

impl LinkOpener for AnchorOpener {
    fn open(&self, url: &Url) -> Result<(), LinkOpenError> {
        let script = anchor_script(url)?;
        let _ = eval(&script);
        Ok(())
    }
}

/// Mobile strategy: open a blank context after a short delay, then point it at
/// the lesson. Falls back to navigating the current context when blocked.
#[derive(Debug, Clone, Copy)]
pub struct DeferredWindowOpener {
    delay_ms: u32,
}

impl Default for DeferredWindowOpener {
    fn default() -> Self {
        Self {
            delay_ms: MOBILE_OPEN_DELAY_MS,
        }
    }
}

impl LinkOpener for DeferredWindowOpener {
    fn open(&self, url: &Url) -> Result<(), LinkOpenError> {
        let script = deferred_window_script(url, self.delay_ms)?;
        let _ = eval(&script);
        Ok(())
    }
}

#[must_use]
pub fn opener_for(strategy: OpenStrategy) -> Arc<dyn LinkOpener> {
    match strategy {
        OpenStrategy::Desktop => Arc::new(AnchorOpener),
        OpenStrategy::Mobile => Arc::new(DeferredWindowOpener::default()),
    }
}
