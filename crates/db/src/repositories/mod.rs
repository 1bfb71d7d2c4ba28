//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod building;
pub mod error;
pub mod estimate;
pub mod expenditure;
pub mod section;

pub use building::BuildingRepository;
pub use error::StoreError;
pub use estimate::EstimateRepository;
pub use expenditure::{CreateExpenditureInput, ExpenditureRepository};
pub use section::{CreateSectionInput, SectionRepository, UpdateSectionInput};
