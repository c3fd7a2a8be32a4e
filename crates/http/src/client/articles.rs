//! Public article endpoints

use super::{ApiClient, ClientError};
use crate::types::ArticleList;
use reqwest::Method;

impl ApiClient {
    /// List one page of articles, `count` per page, pages starting at 1
    pub async fn list_articles(&self, page: u32, count: u32) -> Result<ArticleList, ClientError> {
        let request = self
            .request(Method::GET, "/v1/articles")
            .query(&[("page", page), ("count", count)]);
        self.execute(request).await
    }
}
