pub mod display;
pub mod span;
pub mod summary;
