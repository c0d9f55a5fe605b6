//! # Prodlog Core
//!
//! 核心資料模型與類型定義

pub mod bom;
pub mod config;
pub mod production;

use std::path::PathBuf;

// Re-export 主要類型
pub use bom::{build_plan, BillOfMaterials, MaterialTotals, ProductionPlan};
pub use config::StoreConfig;
pub use production::{parse_date, ItemQuantity, ProductionEntry, ProductionLog, DATE_FORMAT};

/// 生產紀錄錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ProdError {
    #[error("找不到品項: {0}")]
    UnknownItem(String),

    #[error("生產紀錄檔格式錯誤 ({}): {reason}", .path.display())]
    MalformedLogFile { path: PathBuf, reason: String },

    #[error("物料清單檔格式錯誤 ({}): {reason}", .path.display())]
    MalformedBomFile { path: PathBuf, reason: String },

    #[error("無法存取檔案 ({}): {source}", .path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("無效的日期: {0}（格式須為 YYYY-MM-DD）")]
    InvalidDate(String),

    #[error("{material} 數量溢位")]
    QuantityOverflow { material: String },
}

pub type Result<T> = std::result::Result<T, ProdError>;
