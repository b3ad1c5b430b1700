pub mod models;

pub use models::favorite::Favorite;
pub use models::user::{User, normalize_email};

#[cfg(test)]
mod tests;
