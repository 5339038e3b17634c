use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::ports::{NavigateOptions, Navigator};

// In-memory navigation history with browser push/replace semantics.
#[derive(Clone, Debug, Default)]
pub struct BrowserHistory {
    entries: Arc<Mutex<Vec<String>>>,
}

impl BrowserHistory {
    pub fn starting_at(path: impl Into<String>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(vec![path.into()])),
        }
    }

    pub fn current(&self) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for BrowserHistory {
    fn navigate(&self, path: &str, options: NavigateOptions) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if options.replace_history {
            entries.pop();
        }
        entries.push(path.to_string());
        tracing::info!(%path, replace = options.replace_history, "navigated.");
    }
}
