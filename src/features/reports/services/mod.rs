mod report_service;

pub use report_service::{PgReportStore, ReportService, ReportStore};
