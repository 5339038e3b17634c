use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::entities::{Booking, Movie, Showtime, User};
use crate::domain::errors::FetchError;

// Ports for the backend services consumed by the client use cases.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    async fn get_movie_by_id(&self, id: &str) -> Result<Movie, FetchError>;
    async fn get_movies(&self, locality: Option<&str>) -> Result<Vec<Movie>, FetchError>;
}

#[async_trait]
pub trait ShowtimeCatalog: Send + Sync {
    async fn get_showtimes_by_movie(
        &self,
        movie_id: &str,
        from: NaiveDate,
        locality: Option<&str>,
    ) -> Result<Vec<Showtime>, FetchError>;
}

#[async_trait]
pub trait BookingLedger: Send + Sync {
    async fn get_all_bookings(&self) -> Result<Vec<Booking>, FetchError>;
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn get_all_users(&self) -> Result<Vec<User>, FetchError>;
}

// Read-only access to the persisted bearer token.
pub trait TokenStore: Send + Sync {
    fn get_token(&self) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    // Replace the current history entry instead of pushing a new one.
    pub replace_history: bool,
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str, options: NavigateOptions);
}

// Port for retrieving the current local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    fn now_epoch_seconds(&self) -> i64 {
        self.now().and_utc().timestamp()
    }
}
