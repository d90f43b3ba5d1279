use anyhow::{Context, Result};

use nosh_core::edamam::{SearchResponse, recipe_to_summary};
use nosh_core::models::RecipeSummary;
use nosh_core::service::RecipeSearchProvider;

use crate::config::EdamamCredentials;

const SEARCH_URL: &str = "https://api.edamam.com/api/recipes/v2";
const ACCOUNT_USER_HEADER: &str = "Edamam-Account-User";

pub struct EdamamClient {
    client: reqwest::Client,
    credentials: EdamamCredentials,
    rt: tokio::runtime::Handle,
}

impl EdamamClient {
    pub fn new(credentials: EdamamCredentials) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(format!(
                "nosh-cli/{} (recipe finder)",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(std::time::Duration::from_secs(10))
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .expect("Failed to build HTTP client");
        Self {
            client,
            credentials,
            rt: tokio::runtime::Handle::current(),
        }
    }

    pub async fn search_async(&self, query: &str) -> Result<Vec<RecipeSummary>> {
        let resp = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("type", "public"),
                ("q", query),
                ("app_id", self.credentials.app_id.as_str()),
                ("app_key", self.credentials.app_key.as_str()),
            ])
            .header(ACCOUNT_USER_HEADER, self.credentials.account_user.as_str())
            .send()
            .await
            .context("Failed to reach Edamam API")?;

        let data: SearchResponse = resp
            .json()
            .await
            .context("Failed to parse Edamam search response")?;

        let summaries: Vec<RecipeSummary> = data
            .hits
            .into_iter()
            .filter_map(|h| recipe_to_summary(h.recipe))
            .collect();

        Ok(summaries)
    }

    pub async fn fetch_image_async(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch image: {url}"))?
            .error_for_status()
            .context("Image request was rejected")?;

        let bytes = resp.bytes().await.context("Failed to read image bytes")?;
        Ok(bytes.to_vec())
    }
}

impl RecipeSearchProvider for EdamamClient {
    fn search(&self, query: &str) -> Result<Vec<RecipeSummary>> {
        self.rt.block_on(self.search_async(query))
    }

    fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        self.rt.block_on(self.fetch_image_async(url))
    }
}
