//! objalg CLI - runs the object algebra demonstrations.
//! objalg CLI - 运行对象代数演示。

mod commands;
mod output;
mod programs;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "objalg")]
#[command(author, version, about = "Build one syntax tree, interpret it many ways", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress error output. / 抑制错误输出。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available demonstrations. Without one, all of them run.
/// 可用的演示。未指定时运行全部。
#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Evaluate expressions. / 求值表达式。
    Eval,
    /// Print expressions. / 打印表达式。
    Show,
    /// Evaluate and print in one build. / 一次构建同时求值和打印。
    Combine,
    /// Report the operands of every addition. / 报告每个加法的操作数。
    Debug,
    /// Run statements through a union of algebras. / 通过代数并集运行语句。
    Stmt,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Some(Commands::Eval) => commands::eval::run(cli.verbose),
        Some(Commands::Show) => commands::show::run(cli.verbose),
        Some(Commands::Combine) => commands::combine::run(cli.verbose),
        Some(Commands::Debug) => commands::debug::run(cli.verbose),
        Some(Commands::Stmt) => commands::stmt::run(cli.verbose),
        None => commands::run_all(cli.verbose),
    };

    if let Err(e) = result {
        if !cli.quiet {
            output::error(&e);
        }
        std::process::exit(1);
    }
}
