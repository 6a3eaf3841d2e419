// ==========================================
// 禅道需求同步工具 - 领域类型定义
// ==========================================

use std::fmt;
use std::str::FromStr;

// ==========================================
// 同步方向 (Sync Action)
// ==========================================
// import: Excel → 禅道
// export: 禅道 → Excel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    Import,
    Export,
}

impl SyncAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncAction::Import => "import",
            SyncAction::Export => "export",
        }
    }
}

impl fmt::Display for SyncAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SyncAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "import" => Ok(SyncAction::Import),
            "export" => Ok(SyncAction::Export),
            other => Err(format!(
                "不支持的操作类型: {}，仅支持 import 或 export",
                other
            )),
        }
    }
}
