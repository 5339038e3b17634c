use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::entities::{Booking, BookingStatus, Movie, Showtime, ShowtimeStatus, User};
use crate::domain::errors::FetchError;
use crate::domain::ports::{
    BookingLedger, Clock, MovieCatalog, NavigateOptions, Navigator, ShowtimeCatalog, UserDirectory,
};

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub(crate) fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid test timestamp")
}

pub(crate) fn movie(id: &str, title: &str) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        is_active: true,
        release_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        created_at: None,
        trailer_url: None,
        description: None,
        genre: None,
        language: None,
        duration: None,
        rating: None,
        poster_url: None,
    }
}

pub(crate) fn showtime(
    id: &str,
    movie_id: &str,
    starts_at: NaiveDateTime,
    status: ShowtimeStatus,
) -> Showtime {
    Showtime {
        id: id.to_string(),
        movie_id: movie_id.to_string(),
        show_date_time: starts_at,
        status,
        theater_name: None,
        screen: None,
        ticket_price: None,
    }
}

pub(crate) fn booking(
    id: &str,
    movie_id: &str,
    booked_at: NaiveDateTime,
    status: BookingStatus,
    amount: Option<f64>,
) -> Booking {
    Booking {
        id: id.to_string(),
        movie_id: movie_id.to_string(),
        movie_title: Some(format!("Movie {movie_id}")),
        booking_date: booked_at,
        status,
        total_amount: amount,
    }
}

pub(crate) fn user(id: &str) -> User {
    User {
        id: id.to_string(),
        name: None,
        email: Some(format!("{id}@example.com")),
        role: None,
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub get_by_id: bool,
    pub list: bool,
    pub showtimes: bool,
    pub bookings: bool,
    pub users: bool,
}

// In-memory backend implementing every catalog port and recording calls in order.
#[derive(Clone, Default)]
pub(crate) struct StubBackend {
    movies: Vec<Movie>,
    showtimes: Vec<Showtime>,
    bookings: Vec<Booking>,
    users: Vec<User>,
    failures: FailureFlags,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StubBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_movies(mut self, movies: Vec<Movie>) -> Self {
        self.movies = movies;
        self
    }

    pub(crate) fn with_showtimes(mut self, showtimes: Vec<Showtime>) -> Self {
        self.showtimes = showtimes;
        self
    }

    pub(crate) fn with_bookings(mut self, bookings: Vec<Booking>) -> Self {
        self.bookings = bookings;
        self
    }

    pub(crate) fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("calls mutex poisoned").push(call);
    }
}

#[async_trait]
impl MovieCatalog for StubBackend {
    async fn get_movie_by_id(&self, id: &str) -> Result<Movie, FetchError> {
        self.record(format!("get_movie_by_id {id}"));
        if self.failures.get_by_id {
            return Err(FetchError::Transport("get failed".to_string()));
        }
        self.movies
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
            .ok_or(FetchError::NotFound)
    }

    async fn get_movies(&self, locality: Option<&str>) -> Result<Vec<Movie>, FetchError> {
        self.record(format!("get_movies {locality:?}"));
        if self.failures.list {
            return Err(FetchError::Upstream {
                status: 503,
                message: Some("list failed".to_string()),
            });
        }
        Ok(self.movies.clone())
    }
}

#[async_trait]
impl ShowtimeCatalog for StubBackend {
    async fn get_showtimes_by_movie(
        &self,
        movie_id: &str,
        from: NaiveDate,
        locality: Option<&str>,
    ) -> Result<Vec<Showtime>, FetchError> {
        self.record(format!("get_showtimes_by_movie {movie_id} {from} {locality:?}"));
        if self.failures.showtimes {
            return Err(FetchError::Transport("showtimes failed".to_string()));
        }
        Ok(self
            .showtimes
            .iter()
            .filter(|showtime| showtime.movie_id == movie_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl BookingLedger for StubBackend {
    async fn get_all_bookings(&self) -> Result<Vec<Booking>, FetchError> {
        self.record("get_all_bookings".to_string());
        if self.failures.bookings {
            return Err(FetchError::Transport("bookings failed".to_string()));
        }
        Ok(self.bookings.clone())
    }
}

#[async_trait]
impl UserDirectory for StubBackend {
    async fn get_all_users(&self) -> Result<Vec<User>, FetchError> {
        self.record("get_all_users".to_string());
        if self.failures.users {
            return Err(FetchError::Upstream {
                status: 403,
                message: None,
            });
        }
        Ok(self.users.clone())
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingNavigator {
    visits: Arc<Mutex<Vec<(String, NavigateOptions)>>>,
}

impl RecordingNavigator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn visits(&self) -> Vec<(String, NavigateOptions)> {
        self.visits.lock().expect("visits mutex poisoned").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str, options: NavigateOptions) {
        self.visits
            .lock()
            .expect("visits mutex poisoned")
            .push((path.to_string(), options));
    }
}
