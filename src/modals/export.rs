//! Export modal
//!
//! Collects the export options, schedules a job when the user confirms and
//! completes it once the simulated delay has elapsed. The host drives time:
//! `export` records a deadline and `poll_export` finishes the job when asked
//! at or after it.

use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::Settings;
use crate::error::{StockroomError, StockroomResult};
use crate::export::{ExportEngine, ExportJob, ExportSnapshot, SimulatedExportEngine};
use crate::models::{
    ExportFormat, ExportId, ExportRequest, NumberFormat, Orientation, PageSetup, PaperSize,
};
use crate::notify::{Notification, NotificationSink};

/// File name used when no report is selected
pub const FALLBACK_FILE_NAME: &str = "inventory_report";

/// Default simulated export latency
pub const DEFAULT_EXPORT_DELAY: Duration = Duration::from_millis(1500);

/// Options shown in the export modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportForm {
    pub format: ExportFormat,
    pub include_headers: bool,
    pub include_filters_summary: bool,
    pub date_format: String,
    pub number_format: NumberFormat,
    /// Without extension; blank means "generate one"
    pub file_name: String,
    pub paper_size: PaperSize,
    pub orientation: Orientation,
}

impl Default for ExportForm {
    fn default() -> Self {
        let request = ExportRequest::default();
        Self {
            format: request.format,
            include_headers: request.include_headers,
            include_filters_summary: request.include_filters_summary,
            date_format: request.date_format,
            number_format: request.number_format,
            file_name: String::new(),
            paper_size: PaperSize::default(),
            orientation: Orientation::default(),
        }
    }
}

impl ExportForm {
    /// Resolve the form into a request; page setup only applies to PDF
    pub fn to_request(&self) -> ExportRequest {
        let file_name = self.file_name.trim();
        ExportRequest {
            format: self.format,
            include_headers: self.include_headers,
            include_filters_summary: self.include_filters_summary,
            date_format: self.date_format.clone(),
            number_format: self.number_format,
            file_name: (!file_name.is_empty()).then(|| file_name.to_string()),
            page: (self.format == ExportFormat::Pdf).then_some(PageSetup {
                paper_size: self.paper_size,
                orientation: self.orientation,
            }),
        }
    }
}

/// Default export file name for a report key
///
/// `stock-movement` on 2026-03-01 becomes `stock_movement_2026-03-01`.
pub fn generate_file_name(report_key: Option<&str>, today: NaiveDate) -> String {
    match report_key {
        Some(key) => format!("{}_{}", key.replace('-', "_"), today.format("%Y-%m-%d")),
        None => FALLBACK_FILE_NAME.to_string(),
    }
}

/// Result of a completed export
#[derive(Debug)]
pub enum ExportOutcome {
    Completed {
        job: ExportJob,
        path: Option<PathBuf>,
    },
    Failed {
        job: ExportJob,
        error: StockroomError,
    },
}

impl ExportOutcome {
    pub fn job(&self) -> &ExportJob {
        match self {
            Self::Completed { job, .. } | Self::Failed { job, .. } => job,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

struct PendingExport {
    job: ExportJob,
    deadline: Instant,
}

/// Export form state plus the in-flight job
pub struct ExportManager {
    open: bool,
    defaults: ExportForm,
    form: ExportForm,
    delay: Duration,
    engine: Box<dyn ExportEngine>,
    pending: Option<PendingExport>,
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportManager {
    /// Simulated engine, default delay and form defaults
    pub fn new() -> Self {
        Self::with_engine(Box::new(SimulatedExportEngine))
    }

    pub fn with_engine(engine: Box<dyn ExportEngine>) -> Self {
        Self {
            open: false,
            defaults: ExportForm::default(),
            form: ExportForm::default(),
            delay: DEFAULT_EXPORT_DELAY,
            engine,
            pending: None,
        }
    }

    /// Take the delay and the date/number defaults from user settings
    pub fn from_settings(settings: &Settings, engine: Box<dyn ExportEngine>) -> Self {
        let defaults = ExportForm {
            date_format: settings.export_date_format.clone(),
            number_format: settings.export_number_format,
            ..ExportForm::default()
        };
        Self {
            form: defaults.clone(),
            defaults,
            delay: settings.export_delay(),
            ..Self::with_engine(engine)
        }
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the modal; the form goes back to its defaults
    pub fn close(&mut self) {
        self.open = false;
        self.form = self.defaults.clone();
    }

    pub fn form(&self) -> &ExportForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ExportForm {
        &mut self.form
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The job waiting for its deadline
    pub fn pending_job(&self) -> Option<&ExportJob> {
        self.pending.as_ref().map(|p| &p.job)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Schedule an export of the snapshot, dated today
    pub fn export(
        &mut self,
        snapshot: Option<ExportSnapshot>,
        now: Instant,
        sink: &mut dyn NotificationSink,
    ) -> StockroomResult<ExportId> {
        self.export_on(snapshot, now, Local::now().date_naive(), sink)
    }

    /// Schedule an export; `today` feeds the generated file name
    pub fn export_on(
        &mut self,
        snapshot: Option<ExportSnapshot>,
        now: Instant,
        today: NaiveDate,
        sink: &mut dyn NotificationSink,
    ) -> StockroomResult<ExportId> {
        if let Some(pending) = &self.pending {
            sink.notify(Notification::warning(
                "Export In Progress",
                format!("{} is still being exported", pending.job.file_name),
            ));
            return Err(StockroomError::Precondition(
                "An export is already in progress".to_string(),
            ));
        }

        let snapshot = match snapshot {
            Some(snapshot) => snapshot,
            None => {
                sink.notify(Notification::error(
                    "Export Error",
                    "Select a report before exporting",
                ));
                return Err(StockroomError::Precondition(
                    "No report selected".to_string(),
                ));
            }
        };

        let request = self.form.to_request();
        let stem = request
            .file_name
            .clone()
            .unwrap_or_else(|| generate_file_name(Some(&snapshot.report_key), today));
        let file_name = format!("{}.{}", stem, request.format.extension());

        sink.notify(Notification::info(
            "Export Started",
            format!("Exporting {} as {}", file_name, request.format),
        ));

        let job = ExportJob {
            id: ExportId::new(),
            snapshot,
            request,
            file_name,
            requested_on: today,
        };
        let id = job.id;
        self.pending = Some(PendingExport {
            job,
            deadline: now + self.delay,
        });
        Ok(id)
    }

    /// Finish the pending export if its deadline has passed
    ///
    /// On success the modal closes and the form resets. On failure both are
    /// kept so the user can retry.
    pub fn poll_export(
        &mut self,
        now: Instant,
        sink: &mut dyn NotificationSink,
    ) -> Option<ExportOutcome> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => {}
            _ => return None,
        }
        let job = self.pending.take()?.job;

        match self.engine.export(&job) {
            Ok(path) => {
                let message = match &path {
                    Some(path) => format!("{} saved to {}", job.file_name, path.display()),
                    None => format!("{} has been exported", job.file_name),
                };
                sink.notify(Notification::success("Export Complete", message));
                self.close();
                Some(ExportOutcome::Completed { job, path })
            }
            Err(error) => {
                sink.notify(Notification::error("Export Failed", error.to_string()));
                Some(ExportOutcome::Failed { job, error })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::export::CsvExportEngine;
    use crate::models::{ActiveFilters, ReportRow};
    use crate::notify::{NotificationQueue, Severity};
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 7).unwrap()
    }

    fn snapshot(key: &str) -> Option<ExportSnapshot> {
        let report = catalog::find_report(key)?;
        let rows = vec![ReportRow::new().with("Product Name", "Steel Bolts")];
        Some(ExportSnapshot::new(report, rows, ActiveFilters::new()))
    }

    #[test]
    fn test_generate_file_name() {
        assert_eq!(generate_file_name(None, today()), "inventory_report");
        assert_eq!(
            generate_file_name(Some("low-stock-alert"), today()),
            "low_stock_alert_2026-02-07"
        );
    }

    #[test]
    fn test_form_defaults() {
        let form = ExportForm::default();
        assert_eq!(form.format, ExportFormat::Excel);
        assert!(form.include_headers);
        assert!(form.include_filters_summary);
        assert_eq!(form.date_format, "DD/MM/YYYY");
        assert_eq!(form.number_format, NumberFormat::Indian);
        assert_eq!(form.file_name, "");
        assert_eq!(form.paper_size, PaperSize::A4);
        assert_eq!(form.orientation, Orientation::Landscape);
        assert_eq!(form.to_request().page, None);
    }

    #[test]
    fn test_pdf_export_completes_after_delay() {
        let mut manager = ExportManager::new();
        let mut queue = NotificationQueue::new();
        let start = Instant::now();

        manager.open();
        manager.form_mut().format = ExportFormat::Pdf;
        manager.form_mut().orientation = Orientation::Portrait;
        manager
            .export_on(snapshot("stock-movement"), start, today(), &mut queue)
            .unwrap();

        let job = manager.pending_job().unwrap();
        assert_eq!(job.file_name, "stock_movement_2026-02-07.pdf");
        assert_eq!(
            job.request.page,
            Some(PageSetup {
                paper_size: PaperSize::A4,
                orientation: Orientation::Portrait,
            })
        );
        let started = queue.last().unwrap();
        assert_eq!(started.severity, Severity::Info);
        assert!(started.message.contains("stock_movement_2026-02-07.pdf"));

        // Not yet
        assert!(manager
            .poll_export(start + Duration::from_millis(1499), &mut queue)
            .is_none());
        assert!(manager.is_open());

        let outcome = manager
            .poll_export(start + DEFAULT_EXPORT_DELAY, &mut queue)
            .unwrap();
        assert!(outcome.is_completed());
        assert_eq!(queue.last().unwrap().title, "Export Complete");
        assert!(!manager.is_open());
        assert!(!manager.is_pending());
        assert_eq!(manager.form(), &ExportForm::default());
    }

    #[test]
    fn test_user_file_name_is_trimmed() {
        let mut manager = ExportManager::new();
        let mut queue = NotificationQueue::new();
        manager.form_mut().format = ExportFormat::Csv;
        manager.form_mut().file_name = "  q1 stock  ".into();

        manager
            .export_on(snapshot("inventory-summary"), Instant::now(), today(), &mut queue)
            .unwrap();
        assert_eq!(manager.pending_job().unwrap().file_name, "q1 stock.csv");
    }

    #[test]
    fn test_export_without_report_is_rejected() {
        let mut manager = ExportManager::new();
        let mut queue = NotificationQueue::new();

        let err = manager
            .export_on(None, Instant::now(), today(), &mut queue)
            .unwrap_err();
        assert!(err.is_precondition());
        assert!(!manager.is_pending());
        assert_eq!(queue.last().unwrap().severity, Severity::Error);
    }

    #[test]
    fn test_second_export_while_pending_is_ignored() {
        let mut manager = ExportManager::new();
        let mut queue = NotificationQueue::new();
        let now = Instant::now();

        let first = manager
            .export_on(snapshot("sales-analysis"), now, today(), &mut queue)
            .unwrap();
        assert!(manager
            .export_on(snapshot("sales-analysis"), now, today(), &mut queue)
            .is_err());

        assert_eq!(manager.pending_job().unwrap().id, first);
        assert_eq!(queue.last().unwrap().severity, Severity::Warning);
    }

    #[test]
    fn test_engine_failure_keeps_form() {
        let temp_dir = TempDir::new().unwrap();
        let engine = CsvExportEngine::new(temp_dir.path());
        let mut manager = ExportManager::with_engine(Box::new(engine)).delay(Duration::ZERO);
        let mut queue = NotificationQueue::new();
        let now = Instant::now();

        manager.open();
        manager.form_mut().file_name = "vendors".into();
        manager
            .export_on(snapshot("vendor-performance"), now, today(), &mut queue)
            .unwrap();

        let outcome = manager.poll_export(now, &mut queue).unwrap();
        assert!(!outcome.is_completed());
        assert_eq!(queue.last().unwrap().title, "Export Failed");
        assert!(manager.is_open());
        assert_eq!(manager.form().file_name, "vendors");

        // Retry as CSV
        manager.form_mut().format = ExportFormat::Csv;
        manager
            .export_on(snapshot("vendor-performance"), now, today(), &mut queue)
            .unwrap();
        match manager.poll_export(now, &mut queue).unwrap() {
            ExportOutcome::Completed { path, .. } => {
                assert_eq!(path, Some(temp_dir.path().join("vendors.csv")));
            }
            ExportOutcome::Failed { error, .. } => panic!("export failed: {}", error),
        }
    }

    #[test]
    fn test_settings_drive_delay_and_defaults() {
        let mut settings = Settings::default();
        settings.export_delay_ms = 10;
        settings.export_number_format = NumberFormat::European;

        let mut manager =
            ExportManager::from_settings(&settings, Box::new(SimulatedExportEngine));
        assert_eq!(manager.form().number_format, NumberFormat::European);

        let mut queue = NotificationQueue::new();
        let now = Instant::now();
        manager
            .export_on(snapshot("inventory-summary"), now, today(), &mut queue)
            .unwrap();
        assert_eq!(manager.deadline(), Some(now + Duration::from_millis(10)));

        manager.form_mut().number_format = NumberFormat::Indian;
        manager.close();
        assert_eq!(manager.form().number_format, NumberFormat::European);
    }
}
