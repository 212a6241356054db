use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    chart::model::{Chart, PayloadError, parse_chart},
    config::Config,
};

pub const API_KEY_HEADER: &str = "api-key";

pub const FETCH_FAILED: &str = "Failed to fetch data";
pub const UNSUCCESSFUL_RESPONSE: &str = "API returned unsuccessful response";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with {0}")]
    Status(StatusCode),

    #[error(transparent)]
    Payload(#[from] PayloadError),
}

impl FetchError {
    /// The text shown to the user. Detail stays in the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Transport(_) | FetchError::Status(_) => FETCH_FAILED,
            FetchError::Payload(_) => UNSUCCESSFUL_RESPONSE,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

pub struct ApiService {
    client: Client,
    url: String,
    api_key: String,
}

impl ApiService {
    pub fn new(config: &Config) -> color_eyre::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch_chart(&self) -> Result<Chart, FetchError> {
        info!("Fetching chart from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .inspect_err(|e| warn!("Chart request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Chart request returned {}", status);
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        let chart = parse_chart(&body).inspect_err(|e| warn!("Rejected chart payload: {}", e))?;

        info!(
            "Chart for {} fetched with {} songs",
            chart.chart_date,
            chart.songs.len()
        );
        Ok(chart)
    }
}
