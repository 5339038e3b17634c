use tokio::sync::watch;

use crate::domain::entities::Movie;
use crate::domain::errors::FetchError;
use crate::domain::ports::MovieCatalog;

// Catalog listing for the "all movies" page.
pub struct BrowseMoviesUseCase<M> {
    pub movies: M,
}

impl<M> BrowseMoviesUseCase<M>
where
    M: MovieCatalog,
{
    /// Active movies for `locality` (all localities when `None`), newest first.
    #[tracing::instrument(name = "browse_movies", skip(self))]
    pub async fn execute(&self, locality: Option<&str>) -> Result<Vec<Movie>, FetchError> {
        let mut movies: Vec<Movie> = self
            .movies
            .get_movies(locality)
            .await?
            .into_iter()
            .filter(|movie| movie.is_active)
            .collect();

        // Undated movies sort last.
        movies.sort_by(|a, b| b.listed_at().cmp(&a.listed_at()));
        Ok(movies)
    }

    /// Loads the listing for the current locality selection and reloads on every change.
    ///
    /// A change that arrives while a load is in flight cancels that load, so a
    /// listing for a superseded locality is never delivered. Once the selection
    /// sender is dropped, the latest load is delivered and the loop returns.
    pub async fn follow<F>(&self, mut selection: watch::Receiver<Option<String>>, mut on_listing: F)
    where
        F: FnMut(Option<&str>, Result<Vec<Movie>, FetchError>),
    {
        loop {
            let locality = selection.borrow_and_update().clone();
            let load = self.execute(locality.as_deref());
            tokio::pin!(load);

            let step = tokio::select! {
                listing = &mut load => {
                    on_listing(locality.as_deref(), listing);
                    FollowStep::Delivered
                }
                changed = selection.changed() => match changed {
                    Ok(()) => FollowStep::Superseded,
                    Err(_) => FollowStep::Closed,
                },
            };

            match step {
                FollowStep::Delivered => {
                    if selection.changed().await.is_err() {
                        return;
                    }
                }
                FollowStep::Superseded => {
                    tracing::debug!(?locality, "locality changed mid-load; dropping stale listing.");
                }
                FollowStep::Closed => {
                    on_listing(locality.as_deref(), load.await);
                    return;
                }
            }
        }
    }
}

enum FollowStep {
    Delivered,
    Superseded,
    // Selection source dropped while a load was in flight.
    Closed,
}
