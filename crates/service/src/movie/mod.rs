pub mod repository;
pub mod service;

pub use repository::{InMemoryMovieRepository, MovieRepository, Selector};
pub use service::MovieService;
