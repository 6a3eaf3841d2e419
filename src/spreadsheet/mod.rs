// ==========================================
// 禅道需求同步工具 - 表格层
// ==========================================
// 职责: Excel/CSV 读写, 行 ↔ Story 转换
// 支持: .xlsx/.xls/.ods/.csv 读取, .xlsx/.csv 写入
// ==========================================

pub mod columns;
pub mod error;
pub mod file_parser;
pub mod file_writer;
pub mod row_parser;

// 重导出核心类型
pub use error::{SheetError, SheetResult, ValidationError};
pub use file_parser::{read_stories, CsvParser, ExcelParser, FileParser, UniversalFileParser};
pub use file_writer::{CsvWriter, ExcelWriter, FileWriter, UniversalFileWriter};
pub use row_parser::parse_row;
