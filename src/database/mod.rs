pub mod memory;
pub mod postgres_service;
pub mod repository;
pub mod seed;

pub use memory::InMemoryCompanyRepository;
pub use postgres_service::DatabaseService;
pub use repository::{CompanyRepository, Fetched, PgCompanyRepository};
