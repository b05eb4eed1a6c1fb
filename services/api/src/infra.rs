use metrics_exporter_prometheus::PrometheusHandle;
use points_planner::config::{AppConfig, AppEnvironment, BuildInfo};
use points_planner::error::AppError;
use points_planner::selection::{JsonFileStore, MemorySelectionStore, SelectionStore};
use points_planner::Selection;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) store: Arc<dyn SelectionStore>,
    pub(crate) build: Arc<BuildInfo>,
    pub(crate) environment: AppEnvironment,
    pub(crate) static_dir: Arc<PathBuf>,
    pub(crate) started_at: Instant,
    edits: Arc<RwLock<()>>,
}

impl AppState {
    pub(crate) fn new(
        config: &AppConfig,
        metrics: PrometheusHandle,
        store: Arc<dyn SelectionStore>,
    ) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            store,
            build: Arc::new(config.build.clone()),
            environment: config.environment,
            static_dir: Arc::new(config.storage.static_dir.clone()),
            started_at: Instant::now(),
            edits: Arc::new(RwLock::new(())),
        }
    }

    /// Reads the stored selection; never observes a half-applied edit.
    pub(crate) fn selection(&self) -> Selection {
        let _guard = self.edits.read().unwrap_or_else(PoisonError::into_inner);
        Selection::load(self.store.as_ref())
    }

    /// Loads, mutates, and saves the stored selection as one step.
    pub(crate) fn update_selection<T>(&self, edit: impl FnOnce(&mut Selection) -> T) -> (Selection, T) {
        let _guard = self.edits.write().unwrap_or_else(PoisonError::into_inner);
        let mut selection = Selection::load(self.store.as_ref());
        let outcome = edit(&mut selection);
        selection.save(self.store.as_ref());
        (selection, outcome)
    }

    /// `selection` on the blocking pool, for async handlers.
    pub(crate) async fn load_selection(&self) -> Result<Selection, AppError> {
        let state = self.clone();
        tokio::task::spawn_blocking(move || state.selection())
            .await
            .map_err(|err| AppError::Server(axum::Error::new(err)))
    }

    /// `update_selection` on the blocking pool, for async handlers.
    pub(crate) async fn edit_selection<T, F>(&self, edit: F) -> Result<(Selection, T), AppError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Selection) -> T + Send + 'static,
    {
        let state = self.clone();
        tokio::task::spawn_blocking(move || state.update_selection(edit))
            .await
            .map_err(|err| AppError::Server(axum::Error::new(err)))
    }
}

/// File-backed store when a state path is configured, memory otherwise.
pub(crate) fn selection_store(config: &AppConfig) -> Arc<dyn SelectionStore> {
    match &config.storage.state_path {
        Some(path) => {
            info!(path = %path.display(), "persisting selections to disk");
            Arc::new(JsonFileStore::new(path.clone()))
        }
        None => {
            info!("persisting selections in memory");
            Arc::new(MemorySelectionStore::default())
        }
    }
}
