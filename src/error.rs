use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobcastError {
    #[error("Job not found: {0}")]
    JobNotFound(i64),

    #[error("Job not found in scheduled queue: {0}")]
    NotScheduled(i64),

    #[error("Failed to post to Telegram: {0}")]
    Transmission(String),
}

pub type Result<T> = std::result::Result<T, JobcastError>;
