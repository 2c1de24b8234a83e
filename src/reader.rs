pub mod config;
pub mod error;
pub mod paginator;
pub mod transition;

pub use config::ReaderConfig;
pub use error::ReaderError;
pub use paginator::{Direction, Paginator, ViewMode};
