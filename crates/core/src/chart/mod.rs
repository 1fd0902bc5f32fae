pub mod spec;
pub mod table;

pub use spec::ChartSpec;
pub use table::{ChartRow, ChartTable};
