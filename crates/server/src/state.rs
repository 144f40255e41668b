use std::sync::Arc;

use service::employee::{EmployeeRepository, EmployeeStore};
use service::pagination::DEFAULT_PAGE_SIZE;

/// Shared handler state. The repository is injected here once at startup and
/// reaches every handler through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<dyn EmployeeRepository>,
    pub default_page_size: usize,
}

impl AppState {
    pub fn new(employees: Arc<dyn EmployeeRepository>, default_page_size: usize) -> Self {
        Self { employees, default_page_size }
    }

    /// Fresh in-memory store with the stock page size.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(EmployeeStore::new()), DEFAULT_PAGE_SIZE)
    }
}
