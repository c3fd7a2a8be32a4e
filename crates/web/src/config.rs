//! Configuration management for the static server
//!
//! Sources, lowest precedence first: built-in defaults, an optional config
//! file, `LMM_*` variables (`__` separates nested keys), then the plain
//! variables each app has always used (`HOST`/`PORT` for the blog,
//! `SERVER_HOST`/`SERVER_PORT` for the manager, `API_URL`,
//! `API_URL_BROWSER` and `ASSET_URL` for both).

use crate::Result;
use lmm_http::types::RuntimeEnv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which front-end bundle is being served
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum App {
    Blog,
    Manager,
}

impl App {
    /// Environment variables naming the bind host and port, in ascending precedence
    const fn bind_vars(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Blog => &[("HOST", "PORT")],
            Self::Manager => &[("HOST", "PORT"), ("SERVER_HOST", "SERVER_PORT")],
        }
    }

    const fn default_host(self) -> &'static str {
        match self {
            Self::Blog => "0.0.0.0",
            Self::Manager => "127.0.0.1",
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Host to bind
    pub host: String,

    /// Port to bind
    pub port: u16,

    /// API base URL
    #[serde(default)]
    pub api_url: String,

    /// API base URL as seen from the browser, when it differs from `api_url`
    #[serde(default)]
    pub api_url_browser: String,

    /// Base URL for uploaded assets
    #[serde(default)]
    pub asset_url: String,

    /// Directory holding the built bundle (`index.html` and assets)
    pub dist_dir: PathBuf,
}

impl Settings {
    pub const DEFAULT_PORT: u16 = 3000;

    /// Load settings for `app` from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or a value
    /// cannot be parsed
    pub fn load(app: App, file: Option<&Path>) -> Result<Self> {
        Self::load_with(app, file, |key| std::env::var(key).ok())
    }

    /// Load settings for `app`, reading plain variables through `env`
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or a value
    /// cannot be parsed
    pub fn load_with<F>(app: App, file: Option<&Path>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = config::Config::builder()
            .set_default("host", app.default_host())?
            .set_default("port", i64::from(Self::DEFAULT_PORT))?
            .set_default("dist_dir", "dist")?;

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("LMM")
                .separator("__")
                .try_parsing(true),
        );

        for (host_var, port_var) in app.bind_vars() {
            builder = builder
                .set_override_option("host", env(host_var))?
                .set_override_option("port", env(port_var))?;
        }

        let settings = builder
            .set_override_option("api_url", env("API_URL"))?
            .set_override_option("api_url_browser", env("API_URL_BROWSER"))?
            .set_override_option("asset_url", env("ASSET_URL"))?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Values handed to the browser bundle.
    ///
    /// The browser talks to `api_url_browser` when set and to `api_url`
    /// otherwise.
    pub fn runtime_env(&self) -> RuntimeEnv {
        let api_url = if self.api_url_browser.is_empty() {
            &self.api_url
        } else {
            &self.api_url_browser
        };

        RuntimeEnv {
            api_url: api_url.clone(),
            asset_url: self.asset_url.clone(),
        }
    }
}
