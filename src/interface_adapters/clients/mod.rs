// The clients defined here are reqwest adapters for the backend services.

pub mod api;
mod catalog;

pub use api::ApiClient;
