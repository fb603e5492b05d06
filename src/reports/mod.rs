//! Reports module for Stockroom
//!
//! The report data provider: synthetic row generation, the derived
//! search/sort view, summary statistics and the session that owns the
//! active report state.

pub mod generator;
pub mod session;
pub mod summary;
pub mod view;

pub use generator::{RowGenerator, DEFAULT_ROW_COUNT};
pub use session::ReportSession;
pub use summary::{compute_stats, SummaryStat};
pub use view::{visible_rows, SortSpec};
