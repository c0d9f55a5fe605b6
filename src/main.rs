//! Prodlog - 每日生產紀錄與原物料計算
//!
//! 命令列介面：每個指令都以明確參數呼叫核心操作，指令之間不保留狀態。

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use tracing::Level;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("錯誤: {:#}", e);
        std::process::exit(1);
    }
}
