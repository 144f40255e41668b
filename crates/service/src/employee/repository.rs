use async_trait::async_trait;

use crate::employee::Employee;
use crate::errors::StoreError;
use crate::pagination::Pagination;
use crate::storage::Page;

/// Trait abstraction for employee storage consumed by the transport layer.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn create(&self, employee: Employee) -> Result<Employee, StoreError>;
    async fn get(&self, id: u64) -> Result<Employee, StoreError>;
    async fn update(&self, id: u64, employee: Employee) -> Result<Employee, StoreError>;
    async fn delete(&self, id: u64) -> Result<(), StoreError>;
    /// One page of employees and the total held when it was read.
    async fn list(&self, pagination: Pagination) -> Result<Page<Employee>, StoreError>;
    async fn count(&self) -> usize;
}
