use serde::{Deserialize, Serialize};

use crate::storage::Record;

/// Employee record. Omitted fields decode to their defaults; `id` of `0`
/// means "not yet assigned".
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Employee {
    pub id: u64,
    pub name: String,
    pub position: String,
    pub salary: f64,
}

impl Employee {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }
}

impl Record for Employee {
    fn id(&self) -> u64 { self.id }
    fn set_id(&mut self, id: u64) { self.id = id; }
}
