pub mod app;
pub mod context;
pub mod link_opener;
pub mod views;
pub mod vm;

pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
pub use link_opener::{AnchorOpener, DeferredWindowOpener, opener_for};
