use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::{non_blank, Config, API_KEY_VAR, ENDPOINT_VAR};
use crate::error::GrandPrizeError;
use crate::model::{GrandPrizeResponse, GrandPrizeResult};

#[cfg(test)]
use mockall::automock;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Fetches the current grand prize for a game from the upstream provider.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn fetch(&self, game: &str) -> Result<GrandPrizeResult, GrandPrizeError>;
}

pub struct MuslClient {
    client: Client,
    endpoint: Option<String>,
    api_key: Option<String>,
}

impl MuslClient {
    pub fn new(endpoint: Option<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.endpoint.clone(), config.api_key.clone())
    }

    fn credentials(&self) -> Result<(&str, &str), GrandPrizeError> {
        let endpoint = non_blank(self.endpoint.as_deref()).ok_or_else(|| {
            GrandPrizeError::Configuration(format!(
                "{ENDPOINT_VAR} configuration value is missing or empty"
            ))
        })?;
        let api_key = non_blank(self.api_key.as_deref()).ok_or_else(|| {
            GrandPrizeError::Configuration(format!(
                "{API_KEY_VAR} configuration value is missing or empty"
            ))
        })?;
        Ok((endpoint, api_key))
    }
}

pub fn grand_prize_url(endpoint: &str, game: &str) -> Result<Url, GrandPrizeError> {
    let mut url = Url::parse(endpoint)?;
    url.path_segments_mut()
        .map_err(|_| {
            GrandPrizeError::Configuration(format!("endpoint '{endpoint}' cannot be a base URL"))
        })?
        .pop_if_empty()
        .extend(["v3", "grandprize"]);
    url.query_pairs_mut().append_pair("gameCode", game);
    Ok(url)
}

#[async_trait]
impl UpstreamClient for MuslClient {
    async fn fetch(&self, game: &str) -> Result<GrandPrizeResult, GrandPrizeError> {
        let (endpoint, api_key) = self.credentials()?;
        let url = grand_prize_url(endpoint, game)?;

        log::info!("Calling MUSL API for {game}.");
        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GrandPrizeError::Upstream(format!(
                "MUSL API returned {status} for {game}"
            )));
        }

        let body: GrandPrizeResponse = response.json().await?;
        Ok(GrandPrizeResult::new(game, &body.grand_prize.next_prize_text))
    }
}
