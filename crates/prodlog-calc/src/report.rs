//! 生產紀錄報表

use std::fmt::Write;

use prodlog_core::{MaterialTotals, ProductionEntry, ProductionLog, DATE_FORMAT};

/// 報表標題
pub const SUMMARY_HEADER: &str = "=== 生產紀錄摘要 ===";

/// 報表產生器
pub struct ReportGenerator;

impl ReportGenerator {
    /// 產生生產紀錄摘要
    ///
    /// 依紀錄目前的順序輸出；需要日期順序時先呼叫 `sort_by_date` 或 `sorted_view`
    pub fn summarize(log: &ProductionLog) -> String {
        let mut out = String::new();
        out.push_str(SUMMARY_HEADER);
        out.push('\n');

        for entry in log.entries() {
            Self::write_entry(&mut out, entry);
        }
        out
    }

    /// 日期排序後的紀錄副本，不修改原紀錄
    pub fn sorted_view(log: &ProductionLog) -> Vec<ProductionEntry> {
        let mut entries = log.entries().to_vec();
        entries.sort_by_key(|e| e.date);
        entries
    }

    /// 物料合計，每行 `物料: 數量`
    pub fn format_totals(totals: &MaterialTotals) -> String {
        let mut out = String::new();
        for (material, quantity) in totals {
            let _ = writeln!(out, "{}: {}", material, quantity);
        }
        out
    }

    fn write_entry(out: &mut String, entry: &ProductionEntry) {
        let _ = writeln!(out, "\n日期: {}", entry.date.format(DATE_FORMAT));
        for line in &entry.items {
            let _ = writeln!(out, "  - {}: {}", line.item_type, line.quantity);
        }
    }
}
