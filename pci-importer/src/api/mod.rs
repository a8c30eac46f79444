//! HTTP handlers

mod health;
mod upload;

pub use health::health;
pub use upload::upload_excel;
