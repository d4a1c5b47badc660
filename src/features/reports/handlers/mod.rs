pub mod report_handler;

pub use report_handler::upload_report;
