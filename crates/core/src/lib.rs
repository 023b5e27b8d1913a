pub mod annotation;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod present;
pub mod service;
pub mod summary;
pub mod time;

pub use error::{Result, TracesumError};
pub use present::present;
pub use service::resolve_service_name;
pub use summary::{summarize, summarize_all};
