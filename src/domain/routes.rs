// Client route paths; targets for the navigator.

use crate::domain::entities::Movie;

pub const HOME_ROUTE: &str = "/user/home";

pub fn movie_details_path(slug: &str) -> String {
    format!("/user/movie-details/{slug}")
}

pub fn showtimes_path(slug: &str) -> String {
    format!("/user/showtimes/{slug}")
}

/// Route segment for a movie id picked from a listing.
/// Falls back to the raw id when the listing does not contain it.
pub fn listing_segment(movies: &[Movie], movie_id: &str) -> String {
    movies
        .iter()
        .find(|movie| movie.id == movie_id)
        .map(Movie::slug)
        .unwrap_or_else(|| movie_id.to_string())
}
