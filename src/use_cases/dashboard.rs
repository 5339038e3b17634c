// Admin dashboard aggregation over movies, bookings and users.

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::HashMap;

use crate::domain::entities::{Booking, BookingStatus, Movie};
use crate::domain::errors::FetchError;
use crate::domain::ports::{BookingLedger, Clock, MovieCatalog, UserDirectory};

pub const DEFAULT_REVENUE_DAYS: u32 = 7;
// Longest revenue window served; larger requests are capped.
pub const MAX_REVENUE_DAYS: u32 = 366;
pub const DEFAULT_ACTIVITY_LIMIT: usize = 10;
pub const DEFAULT_POPULAR_LIMIT: usize = 5;
// Recent bookings considered before the activity limit applies.
const RECENT_BOOKINGS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_movies: usize,
    pub total_bookings: usize,
    pub total_revenue: f64,
    pub total_users: usize,
    pub today_bookings: usize,
    pub cancelled_bookings: usize,
    pub active_movies: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenuePoint {
    pub date: NaiveDate,
    pub revenue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Booking,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentActivity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub message: String,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularMovie {
    #[serde(flatten)]
    pub movie: Movie,
    pub booking_count: usize,
}

pub struct DashboardUseCase<M, B, U, C> {
    pub movies: M,
    pub bookings: B,
    pub users: U,
    pub clock: C,
}

impl<M, B, U, C> DashboardUseCase<M, B, U, C>
where
    M: MovieCatalog,
    B: BookingLedger,
    U: UserDirectory,
    C: Clock,
{
    #[tracing::instrument(name = "dashboard_stats", skip(self))]
    pub async fn stats(&self) -> Result<DashboardStats, FetchError> {
        let (movies, bookings, users) = tokio::try_join!(
            self.movies.get_movies(None),
            self.bookings.get_all_bookings(),
            self.users.get_all_users(),
        )?;

        let today = self.clock.today();
        Ok(DashboardStats {
            total_movies: movies.len(),
            total_bookings: bookings.len(),
            total_revenue: bookings.iter().map(Booking::confirmed_amount).sum(),
            total_users: users.len(),
            today_bookings: bookings
                .iter()
                .filter(|booking| booking.booking_date.date() == today)
                .count(),
            cancelled_bookings: bookings
                .iter()
                .filter(|booking| booking.status == BookingStatus::Cancelled)
                .count(),
            active_movies: movies.iter().filter(|movie| movie.is_active).count(),
        })
    }

    /// Confirmed revenue per day for the last `days` days, oldest first, ending today.
    #[tracing::instrument(name = "dashboard_revenue", skip(self))]
    pub async fn revenue(&self, days: u32) -> Result<Vec<RevenuePoint>, FetchError> {
        let bookings = self.bookings.get_all_bookings().await?;
        let today = self.clock.today();

        let mut by_day: HashMap<NaiveDate, f64> = HashMap::new();
        for booking in &bookings {
            *by_day.entry(booking.booking_date.date()).or_default() += booking.confirmed_amount();
        }

        Ok((0..days.min(MAX_REVENUE_DAYS))
            .rev()
            .filter_map(|offset| today.checked_sub_days(Days::new(u64::from(offset))))
            .map(|date| RevenuePoint {
                date,
                revenue: by_day.get(&date).copied().unwrap_or(0.0),
            })
            .collect())
    }

    #[tracing::instrument(name = "dashboard_activity", skip(self))]
    pub async fn recent_activity(&self, limit: usize) -> Result<Vec<RecentActivity>, FetchError> {
        let mut bookings = self.bookings.get_all_bookings().await?;
        bookings.sort_by(|a, b| b.booking_date.cmp(&a.booking_date));

        Ok(bookings
            .into_iter()
            .take(RECENT_BOOKINGS.min(limit))
            .map(|booking| RecentActivity {
                message: format!(
                    "New booking for {}",
                    booking.movie_title.as_deref().unwrap_or("a movie")
                ),
                id: booking.id,
                kind: ActivityKind::Booking,
                timestamp: booking.booking_date,
            })
            .collect())
    }

    /// Movies ranked by booking count; ties keep catalog order.
    #[tracing::instrument(name = "dashboard_popular", skip(self))]
    pub async fn popular_movies(&self, limit: usize) -> Result<Vec<PopularMovie>, FetchError> {
        let (movies, bookings) = tokio::try_join!(
            self.movies.get_movies(None),
            self.bookings.get_all_bookings(),
        )?;

        let mut counts: HashMap<&str, usize> = movies
            .iter()
            .map(|movie| (movie.id.as_str(), 0))
            .collect();
        for booking in &bookings {
            // Bookings for movies missing from the catalog are ignored.
            if let Some(count) = counts.get_mut(booking.movie_id.as_str()) {
                *count += 1;
            }
        }

        let mut ranked: Vec<PopularMovie> = movies
            .iter()
            .map(|movie| PopularMovie {
                movie: movie.clone(),
                booking_count: counts.get(movie.id.as_str()).copied().unwrap_or(0),
            })
            .collect();
        ranked.sort_by(|a, b| b.booking_count.cmp(&a.booking_count));
        ranked.truncate(limit);
        Ok(ranked)
    }
}
