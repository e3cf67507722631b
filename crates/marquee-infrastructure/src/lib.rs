pub mod airtable;
pub mod airtable_movie_repository;
pub mod airtable_user_repository;
pub mod config_service;
pub mod paths;
pub mod secret_service;
pub mod state_repository;
pub mod storage;

pub use crate::airtable::AirtableClient;
pub use crate::airtable_movie_repository::AirtableMovieRepository;
pub use crate::airtable_user_repository::AirtableUserRepository;
pub use crate::config_service::ConfigService;
pub use crate::secret_service::SecretServiceImpl;
pub use crate::state_repository::StateRepositoryImpl;
