use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::employee::{Employee, EmployeeRepository};
use crate::errors::StoreError;
use crate::pagination::Pagination;
use crate::storage::{MemoryStore, Page};

/// Process-wide employee store. Cheap to clone; clones share the same records.
#[derive(Clone, Default)]
pub struct EmployeeStore {
    records: MemoryStore<Employee>,
}

impl EmployeeStore {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    #[instrument(skip_all)]
    async fn create(&self, employee: Employee) -> Result<Employee, StoreError> {
        let created = self.records.create(employee).await;
        debug!(id = created.id, "employee_created");
        Ok(created)
    }

    async fn get(&self, id: u64) -> Result<Employee, StoreError> {
        self.records.get(id).await
    }

    #[instrument(skip(self, employee))]
    async fn update(&self, id: u64, employee: Employee) -> Result<Employee, StoreError> {
        let updated = self.records.update(id, employee).await?;
        debug!("employee_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: u64) -> Result<(), StoreError> {
        self.records.delete(id).await?;
        debug!("employee_deleted");
        Ok(())
    }

    async fn list(&self, pagination: Pagination) -> Result<Page<Employee>, StoreError> {
        self.records.page(pagination.page, pagination.page_size).await
    }

    async fn count(&self) -> usize {
        self.records.len().await
    }
}
