// ==========================================
// 禅道需求同步工具 - 命令行入口
// ==========================================
// 用法:
//   zentao-story-sync --config config.yaml --excel requirements.xlsx
//   zentao-story-sync --action export --product 12 --excel stories.xlsx
// 退出码: 0 全部成功 (含无可导出需求), 1 任一失败或致命错误
// ==========================================

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;
use zentao_story_sync::config::AppConfig;
use zentao_story_sync::logging::{self, DEFAULT_LOG_FILE};
use zentao_story_sync::runner::{run_export, run_import, RunStatus};
use zentao_story_sync::{SyncAction, APP_NAME, VERSION};

#[derive(Parser, Debug)]
#[command(name = "zentao-story-sync")]
#[command(about = "禅道需求同步工具 - Excel 与禅道之间导入/导出需求")]
#[command(version)]
struct Cli {
    /// 配置文件路径
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Excel/CSV 文件路径 (覆盖配置文件中的 excelFile)
    #[arg(long, alias = "file")]
    excel: Option<PathBuf>,

    /// 操作类型: import 或 export
    #[arg(long, default_value = "import")]
    action: String,

    /// 产品ID (导出时必填)
    #[arg(long, default_value_t = 0)]
    product: i64,

    /// 日志文件路径
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_guard = match logging::init(&cli.log_file) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("无法创建日志文件 {}: {}", cli.log_file.display(), e);
            return ExitCode::from(1);
        }
    };

    let run_id = Uuid::new_v4();
    let span = info_span!("sync_run", run_id = %run_id, action = %cli.action);

    let status = async {
        info!("{} v{}", APP_NAME, VERSION);
        match run(&cli, span.clone()).await {
            Ok(status) => status,
            Err(e) => {
                error!(error = %format!("{:#}", e), "运行失败");
                eprintln!("错误: {:#}", e);
                RunStatus::Failed
            }
        }
    }
    .instrument(span.clone())
    .await;

    span.in_scope(|| info!(log_file = %log_guard.path().display(), "运行结束"));
    println!("日志文件已保存至: {}", log_guard.path().display());

    ExitCode::from(status.exit_code())
}

async fn run(cli: &Cli, span: tracing::Span) -> anyhow::Result<RunStatus> {
    let action = SyncAction::from_str(&cli.action).map_err(anyhow::Error::msg)?;

    let mut config = load_config(&cli.config)?;
    let excel_file = config.resolve_excel_file(cli.excel.clone())?;

    info!(action = %action, file = %excel_file.display(), "配置加载完成");

    match action {
        SyncAction::Import => run_import(&config, &excel_file, span).await,
        SyncAction::Export => run_export(&config, cli.product, &excel_file, span).await,
    }
}

fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    let config = AppConfig::load(path).context("加载配置文件失败")?;
    config.validate()?;
    Ok(config)
}
