// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 输出: 终端 + 追加写入的日志文件
// 作用域: 订阅者仅在 LogGuard 存活期间生效 (不设置进程级全局订阅者)
// ==========================================

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

/// 默认日志文件
pub const DEFAULT_LOG_FILE: &str = "import.log";

/// 日志时间格式
const TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// 日志作用域守卫
///
/// drop 时恢复之前的订阅者并关闭日志文件
pub struct LogGuard {
    _dispatch: DefaultGuard,
    path: PathBuf,
}

impl LogGuard {
    /// 日志文件绝对路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info）
///   例如: RUST_LOG=debug 或 RUST_LOG=zentao_story_sync=trace
///
/// # 示例
/// ```no_run
/// use zentao_story_sync::logging;
/// let guard = logging::init(std::path::Path::new("import.log")).unwrap();
/// println!("{}", guard.path().display());
/// ```
pub fn init(log_path: &Path) -> io::Result<LogGuard> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;
    let path = std::fs::canonicalize(log_path)?;

    // 从环境变量读取日志级别，默认为 info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stdout_layer = fmt::layer()
        .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
        .with_target(true)
        .with_line_number(true);

    let file_layer = fmt::layer()
        .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
        .with_target(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer);

    Ok(LogGuard {
        _dispatch: tracing::subscriber::set_default(subscriber),
        path,
    })
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
