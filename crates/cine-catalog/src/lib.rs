pub mod client;
pub mod error;
pub mod film;

pub use client::CatalogClient;
pub use error::{CatalogError, Result};
pub use film::{Film, FilmPage, POSTER_BASE_URL};
