//! Command handlers

use anyhow::{Context, Result};
use prodlog_calc::{AggregationCalculator, ReportGenerator};
use prodlog_core::{
    build_plan, BillOfMaterials, MaterialTotals, ProductionEntry, ProductionLog, StoreConfig,
};
use prodlog_store::{BomStore, ProductionLogStore};

use crate::cli::{BomAction, Cli, Commands, OutputFormat};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = StoreConfig::new(&cli.data_dir);
    tracing::debug!("資料目錄: {}", config.data_dir().display());

    match cli.command {
        Commands::Record { date, items } => {
            let mut store = open_log(&config)?;
            let entry = ProductionEntry::new(date, Vec::new());
            let entry = items
                .into_iter()
                .fold(entry, |entry, (item, qty)| entry.with_item(item, qty));

            let replaced = store.record(entry)?;
            println!(
                "{} {} 的生產紀錄",
                if replaced { "已更新" } else { "已新增" },
                date
            );
        }

        Commands::Plan { items } => {
            let bom = open_bom(&config)?;
            let plan = build_plan(items)?;

            let totals = AggregationCalculator::aggregate_plan(&plan, bom.table())?;
            print_totals(&totals, cli.format)?;
        }

        Commands::Range { start, end } => {
            let store = open_log(&config)?;
            let bom = open_bom(&config)?;

            let totals =
                AggregationCalculator::aggregate_log_range(store.log(), start, end, bom.table())
                    .with_context(|| format!("無法計算 {} ~ {} 的原物料用量", start, end))?;
            print_totals(&totals, cli.format)?;
        }

        Commands::Summary { sorted } => {
            let store = open_log(&config)?;
            let log = if sorted {
                ProductionLog::from_entries(ReportGenerator::sorted_view(store.log()))
            } else {
                store.log().clone()
            };

            match cli.format {
                OutputFormat::Text => print!("{}", ReportGenerator::summarize(&log)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&log)?),
            }
        }

        Commands::Sort => {
            let mut store = open_log(&config)?;
            store.sort_by_date()?;
            println!("已依日期排序 {} 筆紀錄", store.log().len());
        }

        Commands::Clean => {
            let mut store = open_log(&config)?;
            let removed = store.clear_empty_entries()?;
            println!("已移除 {} 筆空白紀錄", removed);
        }

        Commands::Bom { action } => {
            let mut bom = open_bom(&config)?;
            match action {
                BomAction::Show => print_bom(bom.table(), cli.format)?,
                BomAction::Add { name } => {
                    if bom.add_item(&name)? {
                        println!("已新增品項 {}", name);
                    } else {
                        println!("品項 {} 已存在，未變更", name);
                    }
                }
                BomAction::Set {
                    item,
                    material,
                    quantity,
                } => {
                    bom.set_requirement(&item, &material, quantity)?;
                    println!("{} 每單位需要 {} × {}", item, material, quantity);
                }
                BomAction::Delete { item } => {
                    bom.delete_item(&item)?;
                    println!("已刪除品項 {}", item);
                }
            }
        }
    }

    Ok(())
}

fn open_log(config: &StoreConfig) -> Result<ProductionLogStore> {
    let path = config.log_path();
    ProductionLogStore::open(&path)
        .with_context(|| format!("無法開啟生產紀錄 {}", path.display()))
}

/// 物料清單檔不存在時以預設表起始
fn open_bom(config: &StoreConfig) -> Result<BomStore> {
    let path = config.bom_path();
    BomStore::open_or_seed(&path, BillOfMaterials::default_table())
        .with_context(|| format!("無法開啟物料清單 {}", path.display()))
}

fn print_totals(totals: &MaterialTotals, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("原物料需求合計:");
            print!("{}", ReportGenerator::format_totals(totals));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(totals)?),
    }
    Ok(())
}

fn print_bom(bom: &BillOfMaterials, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (item, requirements) in bom.iter() {
                println!("{}:", item);
                for (material, qty) in requirements {
                    println!("  - {}: {}", material, qty);
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(bom)?),
    }
    Ok(())
}
