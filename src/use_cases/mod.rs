// Use cases layer: client workflows over the backend ports.

pub mod browse_movies;
pub mod dashboard;
pub mod resolve_movie;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use browse_movies::BrowseMoviesUseCase;
pub use dashboard::DashboardUseCase;
pub use resolve_movie::{MovieDetails, ResolveMovieUseCase};
pub use session::{InspectSessionUseCase, SessionReport};
