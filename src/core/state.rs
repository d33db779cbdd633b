use std::sync::Arc;

use crate::core::config::Settings;
use crate::repositories::answers::AnswerStore;

#[derive(Clone)]
pub(crate) struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    settings: Settings,
    store: Arc<dyn AnswerStore>,
}

impl AppState {
    pub(crate) fn new(settings: Settings, store: Arc<dyn AnswerStore>) -> Self {
        Self { inner: Arc::new(InnerState { settings, store }) }
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    pub(crate) fn store(&self) -> &dyn AnswerStore {
        self.inner.store.as_ref()
    }
}
