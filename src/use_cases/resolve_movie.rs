use serde::Serialize;

use crate::domain::entities::{Movie, Showtime};
use crate::domain::errors::ResolveError;
use crate::domain::identity::MovieRef;
use crate::domain::ports::{Clock, MovieCatalog, NavigateOptions, Navigator, ShowtimeCatalog};
use crate::domain::routes::{HOME_ROUTE, movie_details_path};

// Upcoming screenings shown alongside a movie.
pub const MAX_UPCOMING_SHOWTIMES: usize = 5;

// A resolved movie page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    pub movie: Movie,
    pub showtimes: Vec<Showtime>,
    pub trailer_embed_url: Option<String>,
}

// Resolves a movie route parameter (canonical id or slug) with injected dependencies.
pub struct ResolveMovieUseCase<M, S, N, C> {
    pub movies: M,
    pub showtimes: S,
    pub navigator: N,
    pub clock: C,
}

impl<M, S, N, C> ResolveMovieUseCase<M, S, N, C>
where
    M: MovieCatalog,
    S: ShowtimeCatalog,
    N: Navigator,
    C: Clock,
{
    /// Resolves `param` and loads the movie's upcoming showtimes for `locality`.
    ///
    /// Id-addressed movies are redirected to their slug URL, replacing the
    /// current history entry. Any failure redirects to the landing route;
    /// there is no retry.
    #[tracing::instrument(name = "resolve_movie", skip(self))]
    pub async fn execute(
        &self,
        param: &str,
        locality: Option<&str>,
    ) -> Result<MovieDetails, ResolveError> {
        let route = MovieRef::parse(param);
        let addressed_by_id = route.as_ref().is_some_and(MovieRef::is_id);

        let resolved = match route {
            Some(MovieRef::Id(id)) => self.resolve_by_id(&id).await,
            Some(MovieRef::Slug(slug)) => self.resolve_by_slug(&slug).await,
            None => Err(ResolveError::NotFound),
        };

        let movie = match resolved {
            Ok(movie) => movie,
            Err(err) => {
                tracing::info!(error = %err, "movie not resolved; redirecting home.");
                self.navigator.navigate(HOME_ROUTE, NavigateOptions::default());
                return Err(err);
            }
        };

        // Canonicalize id-addressed URLs without leaving the id URL in history.
        if addressed_by_id {
            self.navigator.navigate(
                &movie_details_path(&movie.slug()),
                NavigateOptions {
                    replace_history: true,
                },
            );
        }

        let showtimes = self.load_showtimes(&movie.id, locality).await;

        Ok(MovieDetails {
            trailer_embed_url: movie.trailer_embed_url(),
            movie,
            showtimes,
        })
    }

    async fn resolve_by_id(&self, id: &str) -> Result<Movie, ResolveError> {
        self.movies.get_movie_by_id(id).await.map_err(|err| {
            tracing::debug!(%id, error = %err, "movie lookup by id failed.");
            ResolveError::from(err)
        })
    }

    async fn resolve_by_slug(&self, slug: &str) -> Result<Movie, ResolveError> {
        let movies = self.movies.get_movies(None).await.map_err(|err| {
            tracing::debug!(%slug, error = %err, "movie listing for slug lookup failed.");
            ResolveError::FetchFailed
        })?;

        // Titles can collide after normalization; the first movie in listing order wins.
        movies
            .into_iter()
            .find(|movie| movie.slug() == slug)
            .ok_or(ResolveError::NotFound)
    }

    async fn load_showtimes(&self, movie_id: &str, locality: Option<&str>) -> Vec<Showtime> {
        let today = self.clock.today();
        match self
            .showtimes
            .get_showtimes_by_movie(movie_id, today, locality)
            .await
        {
            Ok(showtimes) => showtimes
                .into_iter()
                .filter(|showtime| showtime.is_active() && showtime.show_date_time.date() >= today)
                .take(MAX_UPCOMING_SHOWTIMES)
                .collect(),
            Err(err) => {
                // Showtimes are optional on the movie page.
                tracing::warn!(%movie_id, error = %err, "failed to load showtimes.");
                Vec::new()
            }
        }
    }
}
