pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, register},
        login_request::LoginRequest,
        register_request::RegisterRequest,
        token_response::TokenResponse,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_user::AuthUser,
    favorites::{
        create_favorite_request::CreateFavoriteRequest,
        favorite_dto::FavoriteDto,
        favorite_list_response::FavoriteListResponse,
        favorites::{create_favorite, delete_favorite, list_favorites},
        list_favorites_query::ListFavoritesQuery,
    },
    films::{
        film_dto::FilmDto,
        film_list_response::FilmListResponse,
        films::list_films,
        list_films_query::ListFilmsQuery,
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
