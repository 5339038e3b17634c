use chrono::{Local, NaiveDateTime, Utc};

use crate::domain::ports::Clock;
use crate::interface_adapters::clients::ApiClient;
use crate::interface_adapters::navigator::BrowserHistory;
use crate::interface_adapters::token_store::FileTokenStore;

// Collaborators shared by the client commands.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub tokens: FileTokenStore,
    pub history: BrowserHistory,
    pub clock: SystemClock,
    // Locality filter; None means all localities.
    pub selected_city: Option<String>,
}

// System clock adapter used by the client use cases.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn now_epoch_seconds(&self) -> i64 {
        Utc::now().timestamp()
    }
}
