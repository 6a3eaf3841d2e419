// ==========================================
// 禅道需求同步工具 - 表格模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 单行校验错误 (行解析阶段)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("行数据不完整，缺少必填字段 (至少需要 4 列，实际 {0} 列)")]
    IncompleteRow(usize),

    #[error("产品ID必须是正整数: {0:?}")]
    InvalidProductId(String),

    #[error("优先级必须是1-4之间的数字: {0:?}")]
    InvalidPriority(String),

    #[error("标题不能为空")]
    MissingTitle,

    #[error("分类不能为空")]
    MissingCategory,

    #[error("需求描述不能为空")]
    MissingSpec,
}

/// 表格文件错误类型
#[derive(Error, Debug)]
pub enum SheetError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.ods/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("文件写入失败: {0}")]
    FileWriteError(String),

    // ===== 解析错误 =====
    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("Excel 写入失败: {0}")]
    ExcelWriteError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    #[error("Excel 文件中没有工作表")]
    NoWorksheet,

    #[error("文件中没有数据 (至少需要标题行和一行数据)")]
    NoDataRows,

    // ===== 行校验错误 =====
    #[error("第{row}行数据解析失败: {source}")]
    InvalidRow {
        row: usize,
        source: ValidationError,
    },
}

impl From<std::io::Error> for SheetError {
    fn from(err: std::io::Error) -> Self {
        SheetError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for SheetError {
    fn from(err: csv::Error) -> Self {
        SheetError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for SheetError {
    fn from(err: calamine::Error) -> Self {
        SheetError::ExcelParseError(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for SheetError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        SheetError::ExcelWriteError(err.to_string())
    }
}

/// Result 类型别名
pub type SheetResult<T> = Result<T, SheetError>;
