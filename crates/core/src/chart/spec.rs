use crate::chart::table::{ChartRow, ChartTable, DAY_COLUMN, SALES_COLUMN};
use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v4.8.1.json";
pub const CHART_WIDTH: u32 = 800;

/// Vega-Lite document for the sales page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub data: InlineData,
    pub mark: Mark,
    pub encoding: Encoding,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineData {
    pub values: Vec<ChartRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encoding {
    pub x: FieldDef,
    pub y: FieldDef,
    pub tooltip: Vec<FieldDef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Temporal,
    Quantitative,
}

/// Granularity the renderer groups temporal values by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Year, month and day in UTC; time of day is dropped.
    #[serde(rename = "utcyearmonthdate")]
    UtcYearMonthDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(rename = "timeUnit", default, skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<TimeUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl FieldDef {
    fn day() -> Self {
        Self {
            field: DAY_COLUMN.to_string(),
            field_type: FieldType::Temporal,
            time_unit: Some(TimeUnit::UtcYearMonthDate),
            title: Some("Day".to_string()),
        }
    }

    fn sales(title: Option<&str>) -> Self {
        Self {
            field: SALES_COLUMN.to_string(),
            field_type: FieldType::Quantitative,
            time_unit: None,
            title: title.map(str::to_string),
        }
    }
}

impl ChartSpec {
    pub fn bar_chart(table: &ChartTable) -> Self {
        Self {
            schema: VEGA_LITE_SCHEMA.to_string(),
            data: InlineData {
                values: table.rows().to_vec(),
            },
            mark: Mark::Bar,
            encoding: Encoding {
                x: FieldDef::day(),
                y: FieldDef::sales(Some("Sales")),
                tooltip: vec![FieldDef::day(), FieldDef::sales(None)],
            },
            width: CHART_WIDTH,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self).context("serialize chart spec failed")
    }
}
