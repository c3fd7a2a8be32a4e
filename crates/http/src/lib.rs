//! LMM HTTP module: typed client for the blog/manager API

pub mod client;
pub mod types;

pub use client::{ApiClient, ApiClientBuilder, error::ClientError};
