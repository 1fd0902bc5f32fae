use crate::domain::sales::SalesRecord;
use serde::{Deserialize, Serialize};

pub const DAY_COLUMN: &str = "day";
pub const SALES_COLUMN: &str = "sales";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRow {
    pub day: String,
    pub sales: i32,
}

/// Two-column (`day`, `sales`) table in query order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartTable {
    rows: Vec<ChartRow>,
}

impl ChartTable {
    pub fn from_records(records: &[SalesRecord]) -> Self {
        let rows = records
            .iter()
            .map(|r| ChartRow {
                // NaiveDate displays as YYYY-MM-DD.
                day: r.day.to_string(),
                sales: r.sales,
            })
            .collect();
        Self { rows }
    }

    pub fn columns(&self) -> [&'static str; 2] {
        [DAY_COLUMN, SALES_COLUMN]
    }

    pub fn rows(&self) -> &[ChartRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
