pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{BrixError, Result};
pub use tolerance::Tolerance;
