pub mod verdict_repository;

pub use verdict_repository::SqliteVerdictStore;
