pub mod chart;
pub mod domain;
pub mod storage;

pub mod config {
    use anyhow::Context;

    pub const DEFAULT_SALES_TABLE: &str = "sales_2020Q4";

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub sales_database_url: Option<String>,
        pub sales_table: String,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self::from_lookup(|key| std::env::var(key).ok()))
        }

        // The sales_db connection prefers its own URL and falls back to the default one.
        fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
            let non_empty = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());
            Self {
                sales_database_url: non_empty("SALES_DATABASE_URL")
                    .or_else(|| non_empty("DATABASE_URL")),
                sales_table: non_empty("SALES_TABLE")
                    .map(|s| s.trim().to_string())
                    .unwrap_or_else(|| DEFAULT_SALES_TABLE.to_string()),
                sentry_dsn: non_empty("SENTRY_DSN"),
            }
        }

        pub fn require_sales_database_url(&self) -> anyhow::Result<&str> {
            self.sales_database_url
                .as_deref()
                .context("SALES_DATABASE_URL (or DATABASE_URL) is required")
        }
    }

}
