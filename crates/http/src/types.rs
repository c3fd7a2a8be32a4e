//! Request and response bodies of the LMM API

use serde::{Deserialize, Serialize};

/// Body returned by the token refresh and sign-in endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Name/password sign-in request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub name: String,
    pub password: String,
}

/// One row of the article list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleListItem {
    pub id: String,
    pub title: String,
    pub post_at: String,
}

/// One page of articles
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArticleList {
    #[serde(default)]
    pub articles: Vec<ArticleListItem>,
    #[serde(default)]
    pub has_next_page: bool,
}

/// Runtime values the static server exposes to the browser bundle
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuntimeEnv {
    /// API base URL for browser requests; empty means same origin
    #[serde(default)]
    pub api_url: String,
    /// Base URL for static assets (images, uploads)
    #[serde(default)]
    pub asset_url: String,
}

impl RuntimeEnv {
    /// Path the static server serves this document under
    pub const PATH: &'static str = "/env.json";
}
