//! # Prodlog Calculation Engine
//!
//! 物料需求彙總與報表

pub mod aggregation;
pub mod report;

// Re-export 主要類型
pub use aggregation::AggregationCalculator;
pub use report::ReportGenerator;
