//! 生產紀錄模型

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

use crate::{ProdError, ProductionPlan, Result};

/// 日期的標準格式（ISO）
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 解析標準格式日期
///
/// 只接受 `YYYY-MM-DD`，其他寫法一律拒絕，確保同一天只有一種表示法
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ProdError::InvalidDate(value.to_string()))?;

    // parse_from_str 接受未補零的月日，以回寫比對排除
    if date.format(DATE_FORMAT).to_string() != trimmed {
        return Err(ProdError::InvalidDate(value.to_string()));
    }
    Ok(date)
}

/// 反序列化時只接受標準格式日期
fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_date(&value).map_err(serde::de::Error::custom)
}

/// 單一品項的生產數量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQuantity {
    /// 品項
    #[serde(rename = "item type")]
    pub item_type: String,

    /// 生產數量
    pub quantity: u64,
}

impl ItemQuantity {
    pub fn new(item_type: impl Into<String>, quantity: u64) -> Self {
        Self {
            item_type: item_type.into(),
            quantity,
        }
    }
}

/// 單日生產紀錄
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionEntry {
    /// 生產日期（紀錄內唯一）
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,

    /// 各品項數量（保留輸入順序）
    pub items: Vec<ItemQuantity>,
}

impl ProductionEntry {
    /// 創建新的單日紀錄
    pub fn new(date: NaiveDate, items: Vec<ItemQuantity>) -> Self {
        Self { date, items }
    }

    /// 由生產計劃建立紀錄（依品項名稱排序）
    pub fn from_plan(date: NaiveDate, plan: &ProductionPlan) -> Self {
        let items = plan
            .iter()
            .map(|(item, qty)| ItemQuantity::new(item.clone(), *qty))
            .collect();
        Self { date, items }
    }

    /// 建構器模式：添加品項數量
    pub fn with_item(mut self, item_type: impl Into<String>, quantity: u64) -> Self {
        self.items.push(ItemQuantity::new(item_type, quantity));
        self
    }

    /// 檢查是否所有數量皆為 0
    pub fn is_empty(&self) -> bool {
        self.items.iter().all(|i| i.quantity == 0)
    }
}

/// 生產紀錄（所有單日紀錄）
///
/// 檔案格式：`{"Data": [{"date": "YYYY-MM-DD", "items": [...]}, ...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionLog {
    #[serde(rename = "Data", default)]
    entries: Vec<ProductionEntry>,
}

impl ProductionLog {
    /// 創建空的生產紀錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 由既有紀錄建立（保留順序，同日期以後者覆蓋前者）
    pub fn from_entries(entries: Vec<ProductionEntry>) -> Self {
        let mut log = Self::new();
        for entry in entries {
            log.upsert(entry);
        }
        log
    }

    /// 新增或覆蓋單日紀錄
    ///
    /// 同日期已存在時整批取代其品項；否則附加於末端，不重新排序。
    /// 回傳 `true` 表示取代了既有紀錄
    pub fn upsert(&mut self, entry: ProductionEntry) -> bool {
        match self.entries.iter_mut().find(|e| e.date == entry.date) {
            Some(existing) => {
                existing.items = entry.items;
                true
            }
            None => {
                self.entries.push(entry);
                false
            }
        }
    }

    /// 依日期升冪排序（穩定排序）
    pub fn sort_by_date(&mut self) {
        self.entries.sort_by_key(|e| e.date);
    }

    /// 移除所有數量皆為 0 的紀錄，回傳移除筆數
    pub fn clear_empty_entries(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !e.is_empty());
        before - self.entries.len()
    }

    /// 查詢指定日期的紀錄
    pub fn entry(&self, date: NaiveDate) -> Option<&ProductionEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// 日期落在 `[start, end]` 內的紀錄（保留目前順序）
    pub fn entries_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = &ProductionEntry> {
        self.entries
            .iter()
            .filter(move |e| start <= e.date && e.date <= end)
    }

    /// 第一個重複出現的日期（檔案載入後檢查用）
    pub fn duplicate_date(&self) -> Option<NaiveDate> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|e| e.date)
            .find(|date| !seen.insert(*date))
    }

    pub fn entries(&self) -> &[ProductionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
