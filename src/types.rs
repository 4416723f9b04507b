use crate::errors::AppError;

// Custom result type for the application
pub type Result<T> = std::result::Result<T, AppError>;
