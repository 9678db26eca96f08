use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, DemoError>;
