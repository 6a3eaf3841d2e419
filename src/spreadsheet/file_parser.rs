// ==========================================
// 禅道需求同步工具 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xls/.ods) / CSV (.csv)
// 输出: 按位置排列的行 (跳过表头)
// ==========================================

use crate::domain::Story;
use crate::spreadsheet::error::{SheetError, SheetResult};
use crate::spreadsheet::row_parser::parse_row;
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// 一行数据: (表格中的行号, 单元格文本)
///
/// 行号从 1 开始, 表头为第 1 行
pub type RawRow = (usize, Vec<String>);

// ==========================================
// FileParser Trait
// ==========================================
pub trait FileParser: Send + Sync {
    /// 解析文件为数据行 (不含表头)
    ///
    /// # 规则
    /// - 行尾空白单元格被去掉, 行长度即实际填写的列数
    /// - 完全空白的行跳过
    /// - 没有任何数据行 → NoDataRows
    fn parse_rows(&self, file_path: &Path) -> SheetResult<Vec<RawRow>>;
}

/// 检查文件存在且扩展名在允许列表内, 返回小写扩展名
fn check_file(path: &Path, allowed: &[&str]) -> SheetResult<String> {
    if !path.exists() {
        return Err(SheetError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if !allowed.contains(&ext.as_str()) {
        return Err(SheetError::UnsupportedFormat(ext));
    }
    Ok(ext)
}

/// 去掉行尾空白单元格
fn trim_trailing_empty(mut cells: Vec<String>) -> Vec<String> {
    while cells.last().is_some_and(|c| c.trim().is_empty()) {
        cells.pop();
    }
    cells
}

/// 收集数据行: 跳过表头和空行
///
/// 输入行已带有表格中的绝对行号, 第一行视为表头
fn collect_data_rows<I>(rows: I) -> SheetResult<Vec<RawRow>>
where
    I: Iterator<Item = RawRow>,
{
    let mut data_rows = Vec::new();
    for (row, cells) in rows.skip(1) {
        let cells = trim_trailing_empty(cells);
        if cells.is_empty() {
            continue;
        }
        data_rows.push((row, cells));
    }

    if data_rows.is_empty() {
        return Err(SheetError::NoDataRows);
    }
    Ok(data_rows)
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_rows(&self, file_path: &Path) -> SheetResult<Vec<RawRow>> {
        check_file(file_path, &["csv"])?;

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false) // 表头按普通行读取, 由 collect_data_rows 跳过
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            // csv 会跳过空行, 行号取记录所在的物理行
            let line = record
                .position()
                .map_or(rows.len() + 1, |pos| pos.line() as usize);
            rows.push((line, record.iter().map(|v| v.to_string()).collect::<Vec<_>>()));
        }

        collect_data_rows(rows.into_iter())
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_rows(&self, file_path: &Path) -> SheetResult<Vec<RawRow>> {
        check_file(file_path, &["xlsx", "xlsm", "xls", "ods"])?;

        let mut workbook = open_workbook_auto(file_path)?;

        // 读取第一个 sheet
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(SheetError::NoWorksheet)?;
        let range = workbook.worksheet_range(&sheet_name)?;

        // Range 从第一个有值的单元格开始, 需还原绝对行号与列位置
        let (first_row, first_col) = range.start().unwrap_or((0, 0));
        let (first_row, first_col) = (first_row as usize, first_col as usize);
        debug!(
            sheet = %sheet_name,
            height = range.height(),
            first_row = first_row + 1,
            first_col = first_col + 1,
            "读取工作表"
        );

        let rows = range.rows().enumerate().map(|(idx, row)| {
            let mut cells = vec![String::new(); first_col];
            cells.extend(row.iter().map(|cell| cell.to_string()));
            (first_row + idx + 1, cells)
        });

        collect_data_rows(rows)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> SheetResult<Vec<RawRow>> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse_rows(path),
            "xlsx" | "xlsm" | "xls" | "ods" => ExcelParser.parse_rows(path),
            _ => Err(SheetError::UnsupportedFormat(ext)),
        }
    }
}

/// 读取表格中的全部需求
///
/// 任意一行校验失败即整体失败 (携带行号), 此时尚未发起任何网络请求
pub fn read_stories<P: AsRef<Path>>(file_path: P, default_priority: i32) -> SheetResult<Vec<Story>> {
    let path = file_path.as_ref();
    let rows = UniversalFileParser.parse(path)?;

    let mut stories = Vec::with_capacity(rows.len());
    for (row, cells) in rows {
        let story = parse_row(&cells, default_priority)
            .map_err(|source| SheetError::InvalidRow { row, source })?;
        stories.push(story);
    }

    info!(file_path = %path.display(), count = stories.len(), "表格读取完成");
    Ok(stories)
}
