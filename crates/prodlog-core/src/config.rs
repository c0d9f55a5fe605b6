//! 儲存位置配置

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 預設生產紀錄檔名
pub const DEFAULT_LOG_FILE: &str = "production_log.json";

/// 預設物料清單檔名
pub const DEFAULT_BOM_FILE: &str = "bom.json";

/// 儲存配置：資料目錄與兩個檔案名稱
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// 資料目錄
    pub data_dir: PathBuf,

    /// 生產紀錄檔名
    #[serde(default = "default_log_file")]
    pub log_file: String,

    /// 物料清單檔名
    #[serde(default = "default_bom_file")]
    pub bom_file: String,
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}

fn default_bom_file() -> String {
    DEFAULT_BOM_FILE.to_string()
}

impl StoreConfig {
    /// 創建新的配置（使用預設檔名）
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            log_file: default_log_file(),
            bom_file: default_bom_file(),
        }
    }

    /// 建構器模式：設置生產紀錄檔名
    pub fn with_log_file(mut self, name: impl Into<String>) -> Self {
        self.log_file = name.into();
        self
    }

    /// 建構器模式：設置物料清單檔名
    pub fn with_bom_file(mut self, name: impl Into<String>) -> Self {
        self.bom_file = name.into();
        self
    }

    /// 生產紀錄檔完整路徑
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(&self.log_file)
    }

    /// 物料清單檔完整路徑
    pub fn bom_path(&self) -> PathBuf {
        self.data_dir.join(&self.bom_file)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
