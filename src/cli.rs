//! CLI definition using clap

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// 輸出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "prodlog")]
#[command(version)]
#[command(about = "記錄每日生產數量並依物料清單計算原物料用量")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 資料目錄（存放生產紀錄檔與物料清單檔）
    #[arg(long, short = 'd', global = true, env = "PRODLOG_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// 輸出格式
    #[arg(long, short = 'f', global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// 顯示除錯日誌
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 記錄某日生產數量（同日期整批覆蓋）
    Record {
        /// 生產日期（YYYY-MM-DD）
        #[arg(long, value_parser = parse_date_arg)]
        date: NaiveDate,

        /// 品項數量，例如 A=5 B=3
        #[arg(required = true, value_parser = parse_item_quantity)]
        items: Vec<(String, u64)>,
    },

    /// 計算生產計劃所需原物料
    Plan {
        /// 品項數量，例如 A=2 B=1
        #[arg(required = true, value_parser = parse_item_quantity)]
        items: Vec<(String, u64)>,
    },

    /// 計算日期區間內（含首尾）已記錄生產的原物料用量
    Range {
        /// 起始日期（YYYY-MM-DD）
        #[arg(long, value_parser = parse_date_arg)]
        start: NaiveDate,

        /// 結束日期（YYYY-MM-DD）
        #[arg(long, value_parser = parse_date_arg)]
        end: NaiveDate,
    },

    /// 顯示生產紀錄摘要
    Summary {
        /// 依日期排序顯示（不修改檔案）
        #[arg(long)]
        sorted: bool,
    },

    /// 將生產紀錄依日期排序並寫回
    Sort,

    /// 移除數量全為 0 的紀錄並寫回
    Clean,

    /// 物料清單管理
    Bom {
        #[command(subcommand)]
        action: BomAction,
    },
}

#[derive(Subcommand)]
pub enum BomAction {
    /// 顯示物料清單
    Show,

    /// 新增品項
    Add {
        /// 品項名稱
        name: String,
    },

    /// 設置品項的物料用量（0 表示移除）
    Set {
        item: String,
        material: String,
        quantity: u64,
    },

    /// 刪除品項
    Delete {
        item: String,
    },
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    prodlog_core::parse_date(value).map_err(|e| e.to_string())
}

/// 解析 `品項=數量`
fn parse_item_quantity(value: &str) -> Result<(String, u64), String> {
    let (item, qty) = value
        .split_once('=')
        .ok_or_else(|| format!("格式須為 品項=數量: {}", value))?;

    let item = item.trim();
    if item.is_empty() {
        return Err(format!("品項名稱不可為空: {}", value));
    }
    let qty = qty
        .trim()
        .parse::<u64>()
        .map_err(|_| format!("數量須為非負整數: {}", value))?;

    Ok((item.to_string(), qty))
}
