use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("escape decode error: {0}")]
    Escape(#[from] crate::escape::EscapeError),
    #[error("report error: {0}")]
    Report(#[from] crate::report::ReportError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
