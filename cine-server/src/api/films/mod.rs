pub mod film_dto;
pub mod film_list_response;
pub mod films;
pub mod list_films_query;
