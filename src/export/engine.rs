//! Export engines
//!
//! The export flow hands each completed job to an `ExportEngine`. The
//! simulated engine produces nothing; the CSV engine writes real files.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::{StockroomError, StockroomResult};
use crate::models::{ExportFormat, DEFAULT_CURRENCY_SYMBOL};

use super::csv::write_report_csv;
use super::job::ExportJob;

/// Produces the output file for an export job
pub trait ExportEngine {
    /// Run the job, returning the path written if any
    fn export(&mut self, job: &ExportJob) -> StockroomResult<Option<PathBuf>>;
}

/// Accepts every job and writes nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedExportEngine;

impl ExportEngine for SimulatedExportEngine {
    fn export(&mut self, _job: &ExportJob) -> StockroomResult<Option<PathBuf>> {
        Ok(None)
    }
}

/// Writes CSV exports into a directory
#[derive(Debug, Clone)]
pub struct CsvExportEngine {
    out_dir: PathBuf,
    currency_symbol: String,
}

impl CsvExportEngine {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }

    /// Symbol that marks currency cells in the rows being exported
    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn out_dir(&self) -> &PathBuf {
        &self.out_dir
    }
}

impl ExportEngine for CsvExportEngine {
    fn export(&mut self, job: &ExportJob) -> StockroomResult<Option<PathBuf>> {
        if job.request.format != ExportFormat::Csv {
            return Err(StockroomError::Export(format!(
                "{} export is not supported; choose CSV",
                job.request.format
            )));
        }

        let file_name = Path::new(&job.file_name);
        if file_name.file_name() != Some(file_name.as_os_str()) {
            return Err(StockroomError::Validation(format!(
                "Invalid export file name '{}'",
                job.file_name
            )));
        }

        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(file_name);
        let file = File::create(&path)?;
        write_report_csv(
            BufWriter::new(file),
            &job.snapshot,
            &job.request,
            &self.currency_symbol,
        )?;

        Ok(Some(path))
    }
}
