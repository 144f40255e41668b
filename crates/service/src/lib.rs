//! Service layer: the concurrent in-memory record store and the employee
//! repository built on it.
//! - `storage` holds the generic ordered store.
//! - `employee` holds the record type and the repository seam for transports.
//! - `pagination` normalizes raw paging input.

pub mod employee;
pub mod errors;
pub mod pagination;
pub mod storage;
