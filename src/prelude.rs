pub use crate::result::{AppError, Result};
pub use crate::AppState;
