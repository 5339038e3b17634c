use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::identity::slugify;

// The serde derives here mirror the backend JSON shape; a pragmatic leak into the domain.

// Movie record as served by the movie service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub is_active: bool,
    pub release_date: Option<NaiveDate>,
    pub created_at: Option<NaiveDateTime>,
    pub trailer_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
}

impl Movie {
    /// URL slug derived from the title.
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }

    /// Timestamp used to order listings: creation time, else release day.
    pub fn listed_at(&self) -> Option<NaiveDateTime> {
        self.created_at
            .or_else(|| self.release_date.and_then(|date| date.and_hms_opt(0, 0, 0)))
    }

    /// Embeddable player URL for YouTube trailers, if the trailer is one.
    pub fn trailer_embed_url(&self) -> Option<String> {
        let url = self.trailer_url.as_deref()?;

        let video_id = if let Some((_, rest)) = url.split_once("youtube.com/watch?v=") {
            rest.split('&').next()
        } else if let Some((_, rest)) = url.split_once("youtu.be/") {
            rest.split('?').next()
        } else {
            None
        };

        let video_id = video_id.filter(|id| !id.is_empty())?;
        Some(format!("https://www.youtube.com/embed/{video_id}"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShowtimeStatus {
    Active,
    Inactive,
    #[serde(other)]
    Unknown,
}

// A single screening of a movie.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Showtime {
    pub id: String,
    pub movie_id: String,
    pub show_date_time: NaiveDateTime,
    pub status: ShowtimeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theater_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_price: Option<f64>,
}

impl Showtime {
    pub fn is_active(&self) -> bool {
        self.status == ShowtimeStatus::Active
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
    CancellationPending,
    Cancelled,
    #[serde(other)]
    Unknown,
}

// Booking record as returned by the admin bookings endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub movie_id: String,
    pub movie_title: Option<String>,
    pub booking_date: NaiveDateTime,
    pub status: BookingStatus,
    pub total_amount: Option<f64>,
}

impl Booking {
    /// Revenue this booking contributes; only confirmed bookings count.
    pub fn confirmed_amount(&self) -> f64 {
        match self.status {
            BookingStatus::Confirmed => self.total_amount.unwrap_or(0.0),
            _ => 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}
