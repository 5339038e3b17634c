// Domain layer: entities, client-side policies and the ports they depend on.

pub mod auth;
pub mod entities;
pub mod errors;
pub mod identity;
pub mod ports;
pub mod routes;

pub use entities::{Booking, BookingStatus, Movie, Showtime, ShowtimeStatus, User};
pub use errors::{FetchError, ResolveError};
pub use identity::{MovieRef, slugify};
pub use ports::{
    BookingLedger, Clock, MovieCatalog, NavigateOptions, Navigator, ShowtimeCatalog, TokenStore,
    UserDirectory,
};
