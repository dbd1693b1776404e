// Contact Form server
// Mounts contact forms and routes their HTMX events to per-form state

pub mod error;
pub mod registry;
pub mod routes;

use crate::registry::FormRegistry;
use contact_form::Config;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

pub use error::AppError;
pub use routes::app;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub forms: Arc<RwLock<FormRegistry>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let registry = FormRegistry::new(config.forms.max_forms);
        Self {
            forms: Arc::new(RwLock::new(registry)),
            config: Arc::new(config),
        }
    }
}

/// Periodically unmount forms whose browser went away without saying so
pub fn spawn_sweeper(state: AppState) -> JoinHandle<()> {
    let ttl = Duration::from_secs(state.config.forms.session_ttl_secs);
    let every = Duration::from_secs(state.config.forms.sweep_interval_secs.max(1));

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let mut forms = state.forms.write().await;
            let dropped = forms.sweep(ttl);
            if dropped > 0 {
                tracing::info!(dropped, mounted = forms.len(), "swept idle forms");
            }
        }
    })
}
