//! # dftkit 可执行入口
//!
//! 解析命令行并分发到对应子命令。
//!
//! ## 子命令
//! - `endmember` - 从模板结构枚举端元
//! - `dilute`    - 从端元生成稀释点缺陷结构
//! - `qha`       - 聚合 DFT 结果并拟合 EOS

use clap::Parser;
use dftkit::cli::Cli;
use dftkit::commands;
use dftkit::utils::output;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
