use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};

use crate::config::ApiConfig;
use crate::country::{CountryCode, CountryRecord};
use crate::lookup::{CountryLookup, LookupError};

const USER_AGENT: &str = concat!("country-picker/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy)]
pub struct TimeoutConfig {
    pub connect: Duration,
    pub request: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(5),
            request: Duration::from_secs(10),
        }
    }
}

impl From<&ApiConfig> for TimeoutConfig {
    fn from(api: &ApiConfig) -> Self {
        Self {
            connect: Duration::from_secs(api.connect_timeout_seconds as u64),
            request: Duration::from_secs(api.timeout_seconds as u64),
        }
    }
}

/// HTTP client for a REST Countries compatible endpoint.
pub struct RestCountriesClient {
    client: Client,
    base_url: String,
}

impl RestCountriesClient {
    pub fn new(base_url: impl Into<String>, timeouts: TimeoutConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.request)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self, reqwest::Error> {
        Self::new(api.base_url.clone(), TimeoutConfig::from(api))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the lookup for `code`.
    pub fn url_for(&self, code: CountryCode) -> String {
        format!("{}/alpha/{}", self.base_url, code.as_str())
    }
}

#[async_trait]
impl CountryLookup for RestCountriesClient {
    async fn lookup(&self, code: CountryCode) -> Result<CountryRecord, LookupError> {
        let url = self.url_for(code);
        let started = Instant::now();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Network {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        tracing::debug!(
            country = %code,
            status = status.as_u16(),
            latency_ms = started.elapsed().as_millis() as u64,
            "Lookup response received"
        );

        if !status.is_success() {
            return Err(LookupError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| LookupError::Network {
            url: url.clone(),
            message: e.to_string(),
        })?;

        let value: serde_json::Value =
            serde_json::from_slice(&body).map_err(|e| LookupError::Parse {
                url: url.clone(),
                message: e.to_string(),
            })?;

        Ok(CountryRecord::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_uses_upper_case_code_under_alpha() {
        let client = RestCountriesClient::new("http://localhost:9/v2", TimeoutConfig::default())
            .expect("client");
        assert_eq!(client.url_for(CountryCode::Ca), "http://localhost:9/v2/alpha/CA");
        assert_eq!(client.url_for(CountryCode::Co), "http://localhost:9/v2/alpha/CO");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = RestCountriesClient::new("http://localhost:9/", TimeoutConfig::default())
            .expect("client");
        assert_eq!(client.base_url(), "http://localhost:9");
    }

    #[test]
    fn timeouts_follow_api_config() {
        let api = ApiConfig {
            base_url: "http://localhost".into(),
            timeout_seconds: 3,
            connect_timeout_seconds: 1,
        };
        let timeouts = TimeoutConfig::from(&api);
        assert_eq!(timeouts.request, Duration::from_secs(3));
        assert_eq!(timeouts.connect, Duration::from_secs(1));
    }
}
