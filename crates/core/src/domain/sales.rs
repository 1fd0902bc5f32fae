use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the externally managed sales table.
///
/// `day` is the primary key; `sales` is kept non-negative by the owning schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SalesRecord {
    pub day: NaiveDate,
    pub sales: i32,
}

impl SalesRecord {
    pub fn new(day: NaiveDate, sales: i32) -> Self {
        Self { day, sales }
    }
}
