//! 生產紀錄檔儲存

use std::path::{Path, PathBuf};

use prodlog_core::{ProdError, ProductionEntry, ProductionLog, Result};

use crate::file::{read_json, write_json, FileKind};

/// 生產紀錄儲存
///
/// 單一寫入者：同一檔案不支援多個實例同時寫入，最後一次 `save` 為準
pub struct ProductionLogStore {
    path: PathBuf,
    log: ProductionLog,
}

impl ProductionLogStore {
    /// 開啟生產紀錄檔
    ///
    /// 檔案不存在時得到空紀錄，不視為錯誤；同一日期出現多次視為格式錯誤
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let log: ProductionLog = read_json(&path, FileKind::ProductionLog)?.unwrap_or_default();

        if let Some(date) = log.duplicate_date() {
            return Err(ProdError::MalformedLogFile {
                path,
                reason: format!("日期 {} 重複出現", date),
            });
        }

        tracing::debug!("載入生產紀錄 {}：{} 筆", path.display(), log.len());

        Ok(Self { path, log })
    }

    /// 目前的生產紀錄
    pub fn log(&self) -> &ProductionLog {
        &self.log
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 新增或覆蓋單日紀錄（僅記憶體，需另行 `save`）
    pub fn upsert(&mut self, entry: ProductionEntry) -> bool {
        let date = entry.date;
        let replaced = self.log.upsert(entry);
        tracing::debug!(
            "{} 日期 {} 的紀錄",
            if replaced { "覆蓋" } else { "新增" },
            date
        );
        replaced
    }

    /// 新增或覆蓋單日紀錄並立即寫檔
    pub fn record(&mut self, entry: ProductionEntry) -> Result<bool> {
        let replaced = self.upsert(entry);
        self.save()?;
        Ok(replaced)
    }

    /// 依日期排序並立即寫檔
    pub fn sort_by_date(&mut self) -> Result<()> {
        self.log.sort_by_date();
        self.save()
    }

    /// 移除全為 0 的紀錄並立即寫檔，回傳移除筆數
    pub fn clear_empty_entries(&mut self) -> Result<usize> {
        let removed = self.log.clear_empty_entries();
        self.save()?;
        Ok(removed)
    }

    /// 將整份紀錄寫回檔案
    pub fn save(&self) -> Result<()> {
        write_json(&self.path, &self.log)?;
        tracing::info!("已儲存生產紀錄 {}：{} 筆", self.path.display(), self.log.len());
        Ok(())
    }
}
