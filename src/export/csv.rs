use std::fs::File;
use std::path::Path;

use crate::export::{ExportError, RecordWriter};
use crate::record::{COLUMNS, HistoryRecord};

pub struct CsvExporter {
    writer: csv::Writer<File>,
}

impl CsvExporter {
    pub fn create(path: &Path) -> Result<Self, ExportError> {
        let file = File::create(path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record(COLUMNS)?;
        Ok(Self { writer })
    }
}

impl RecordWriter for CsvExporter {
    fn write_record(&mut self, record: &HistoryRecord) -> Result<(), ExportError> {
        self.writer.serialize(record.to_table_row())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ExportError> {
        self.writer.flush()?;
        Ok(())
    }
}
