use std::sync::Arc;

use crate::config::Config;
use crate::contact::notifier::Notifier;
use crate::contact::session::SessionRegistry;
use crate::render::assets::StaticAssets;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionRegistry,
    /// Pluggable notifier. Default: SmtpNotifier; tests inject stubs.
    pub notifier: Arc<dyn Notifier>,
    /// Profile photo and resume document, loaded once at startup.
    pub assets: Arc<StaticAssets>,
}
