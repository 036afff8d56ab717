use amber_diagnostics::Emitter;
use amber_syntax::parse_file;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "amber")]
#[command(about = "Amber 工具链 - 语法检查与语言服务器", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 检查源文件的语法错误
    Check {
        /// 输入文件
        input: String,

        /// 关闭彩色输出
        #[arg(long)]
        no_color: bool,
    },

    /// 在标准输入输出上启动语言服务器
    Lsp,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input, no_color } => cmd_check(&input, no_color)?,
        Commands::Lsp => amber_ls::run_server().await,
    }

    Ok(())
}

/// 检查命令
fn cmd_check(input: &str, no_color: bool) -> Result<()> {
    println!("🔍 检查 {} ...", input);

    let result = parse_file(input)?;

    if result.diagnostics().is_empty() {
        println!("✅ 无错误");
        return Ok(());
    }

    let emitter = if no_color {
        Emitter::without_colors()
    } else {
        Emitter::new()
    };
    emitter.emit_all(input, &result.index, result.diagnostics());

    if result.has_errors() {
        eprintln!("❌ 发现 {} 个错误", result.sink.error_count());
        std::process::exit(1);
    }

    Ok(())
}
