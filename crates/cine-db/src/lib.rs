pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::favorite_repository::FavoriteRepository;
pub use repositories::user_repository::UserRepository;
