//! # Prodlog Store
//!
//! 生產紀錄與物料清單的檔案儲存

pub mod bom_store;
pub mod file;
pub mod log_store;

// Re-export 主要類型
pub use bom_store::BomStore;
pub use log_store::ProductionLogStore;
