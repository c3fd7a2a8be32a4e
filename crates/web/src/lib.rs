//! LMM web: serves a built front-end bundle together with its runtime env

pub mod config;
pub mod error;
pub mod server;

pub use config::{App, Settings};
pub use error::{Result, WebError};
