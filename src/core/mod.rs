pub mod cache;
pub mod log;
pub mod range;
pub mod report;
pub mod store;
pub mod summary;
