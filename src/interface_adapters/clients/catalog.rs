use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::{Booking, Movie, Showtime, User};
use crate::domain::errors::FetchError;
use crate::domain::ports::{BookingLedger, MovieCatalog, ShowtimeCatalog, UserDirectory};
use crate::interface_adapters::clients::ApiClient;

const CITY_PARAM: &str = "city";

#[async_trait]
impl MovieCatalog for ApiClient {
    async fn get_movie_by_id(&self, id: &str) -> Result<Movie, FetchError> {
        self.get_json(&["movies", id], &[]).await
    }

    async fn get_movies(&self, locality: Option<&str>) -> Result<Vec<Movie>, FetchError> {
        let query: Vec<(&str, &str)> = locality.map(|city| (CITY_PARAM, city)).into_iter().collect();
        self.get_json(&["movies"], &query).await
    }
}

#[async_trait]
impl ShowtimeCatalog for ApiClient {
    async fn get_showtimes_by_movie(
        &self,
        movie_id: &str,
        from: NaiveDate,
        locality: Option<&str>,
    ) -> Result<Vec<Showtime>, FetchError> {
        let date = from.format("%Y-%m-%d").to_string();
        let mut query = vec![("date", date.as_str())];
        if let Some(city) = locality {
            query.push((CITY_PARAM, city));
        }
        self.get_json(&["showtimes", "movie", movie_id], &query).await
    }
}

#[async_trait]
impl BookingLedger for ApiClient {
    async fn get_all_bookings(&self) -> Result<Vec<Booking>, FetchError> {
        self.get_json(&["admin", "bookings"], &[]).await
    }
}

#[async_trait]
impl UserDirectory for ApiClient {
    async fn get_all_users(&self) -> Result<Vec<User>, FetchError> {
        self.get_json(&["admin", "users"], &[]).await
    }
}
