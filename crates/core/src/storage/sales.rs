use crate::domain::sales::SalesRecord;
use anyhow::{ensure, Context};

/// Read access to the daily sales rows.
#[async_trait::async_trait]
pub trait SalesSource: Send + Sync {
    /// Every row of the table, oldest day first.
    async fn fetch_all(&self) -> anyhow::Result<Vec<SalesRecord>>;
}

/// A validated table name. Always rendered double-quoted since names like `sales_2020Q4`
/// are case-sensitive in Postgres.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesTable(String);

impl SalesTable {
    pub fn parse(name: &str) -> anyhow::Result<Self> {
        let name = name.trim();
        ensure!(!name.is_empty(), "sales table name must be non-empty");
        ensure!(
            name.len() <= 63,
            "sales table name exceeds 63 bytes: {name}"
        );
        ensure!(
            name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
            "sales table name must contain only ASCII letters, digits and '_': {name}"
        );
        ensure!(
            !name.starts_with(|c: char| c.is_ascii_digit()),
            "sales table name must not start with a digit: {name}"
        );
        Ok(Self(name.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }

    fn select_all_sql(&self) -> String {
        format!("SELECT day, sales FROM {} ORDER BY day ASC", self.quoted())
    }
}

#[derive(Debug, Clone)]
pub struct PgSalesSource {
    pool: sqlx::PgPool,
    table: SalesTable,
}

impl PgSalesSource {
    pub fn new(pool: sqlx::PgPool, table: SalesTable) -> Self {
        Self { pool, table }
    }
}

#[async_trait::async_trait]
impl SalesSource for PgSalesSource {
    async fn fetch_all(&self) -> anyhow::Result<Vec<SalesRecord>> {
        let sql = self.table.select_all_sql();
        let rows = sqlx::query_as::<_, SalesRecord>(&sql)
            .fetch_all(&self.pool)
            .await
            .with_context(|| format!("select from {} failed", self.table.name()))?;

        tracing::debug!(
            table = self.table.name(),
            rows = rows.len(),
            "fetched sales rows"
        );
        Ok(rows)
    }
}
