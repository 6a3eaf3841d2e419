// ==========================================
// 禅道需求同步工具 - 文件写入器实现
// ==========================================
// 支持: Excel (.xlsx) / CSV (.csv)
// 布局: 表头行 + 每条需求一行, 列顺序与读取一致
// ==========================================

use crate::domain::Story;
use crate::spreadsheet::columns::{story_to_cells, CellValue, HEADERS, SHEET_NAME};
use crate::spreadsheet::error::{SheetError, SheetResult};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;
use tracing::info;

// ==========================================
// FileWriter Trait
// ==========================================
pub trait FileWriter: Send + Sync {
    /// 将需求写入文件 (覆盖已有文件)
    fn write_stories(&self, file_path: &Path, stories: &[Story]) -> SheetResult<()>;
}

// ==========================================
// Excel Writer 实现
// ==========================================
pub struct ExcelWriter;

impl FileWriter for ExcelWriter {
    fn write_stories(&self, file_path: &Path, stories: &[Story]) -> SheetResult<()> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, title) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        }

        for (idx, story) in stories.iter().enumerate() {
            let row = (idx + 1) as u32; // 从第2行开始写入数据
            for (col, cell) in story_to_cells(story).iter().enumerate() {
                let col = col as u16;
                match cell {
                    CellValue::Text(text) => {
                        worksheet.write_string(row, col, text.as_str())?;
                    }
                    CellValue::Number(value) => {
                        worksheet.write_number(row, col, *value)?;
                    }
                    CellValue::Empty => {}
                }
            }
        }

        workbook.save(file_path)?;
        Ok(())
    }
}

// ==========================================
// CSV Writer 实现
// ==========================================
pub struct CsvWriter;

impl FileWriter for CsvWriter {
    fn write_stories(&self, file_path: &Path, stories: &[Story]) -> SheetResult<()> {
        let mut writer = csv::Writer::from_path(file_path)
            .map_err(|e| SheetError::FileWriteError(e.to_string()))?;

        writer
            .write_record(HEADERS)
            .map_err(|e| SheetError::FileWriteError(e.to_string()))?;

        for story in stories {
            let record: Vec<String> = story_to_cells(story).iter().map(CellValue::to_text).collect();
            writer
                .write_record(&record)
                .map_err(|e| SheetError::FileWriteError(e.to_string()))?;
        }

        writer
            .flush()
            .map_err(|e| SheetError::FileWriteError(e.to_string()))?;
        Ok(())
    }
}

// ==========================================
// 通用文件写入器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileWriter;

impl UniversalFileWriter {
    pub fn write<P: AsRef<Path>>(&self, file_path: P, stories: &[Story]) -> SheetResult<()> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvWriter.write_stories(path, stories)?,
            "xlsx" => ExcelWriter.write_stories(path, stories)?,
            _ => return Err(SheetError::UnsupportedFormat(ext)),
        }

        info!(file_path = %path.display(), count = stories.len(), "表格写入完成");
        Ok(())
    }
}
