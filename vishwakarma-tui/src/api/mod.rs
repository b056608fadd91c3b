mod client;
mod dev_backend;
mod dto;
mod error;

pub use client::ApiClient;
pub use dev_backend::DevBackend;
pub use error::ApiError;
