//! Employee records: the model, the repository seam the HTTP layer depends
//! on, and the in-memory implementation.

pub mod model;
pub mod repository;
pub mod store;

pub use model::Employee;
pub use repository::EmployeeRepository;
pub use store::EmployeeStore;
