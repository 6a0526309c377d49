//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `builders/`, `qha/`, `parsers/`, `utils/`
//! - 子模块: endmember, dilute, qha

pub mod dilute;
pub mod endmember;
pub mod qha;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Endmember(args) => endmember::execute(args),
        Commands::Dilute(args) => dilute::execute(args),
        Commands::Qha(args) => qha::execute(args),
    }
}
