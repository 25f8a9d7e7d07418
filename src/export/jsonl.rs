use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::export::{ExportError, RecordWriter};
use crate::record::HistoryRecord;

pub struct JsonlExporter {
    writer: BufWriter<File>,
}

impl JsonlExporter {
    pub fn create(path: &Path) -> Result<Self, ExportError> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl RecordWriter for JsonlExporter {
    fn write_record(&mut self, record: &HistoryRecord) -> Result<(), ExportError> {
        serde_json::to_writer(&mut self.writer, &record.to_table_row())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ExportError> {
        self.writer.flush()?;
        Ok(())
    }
}
