// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP implementation of the `ZAutomation` API.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};

use crate::credentials::Credentials;
use crate::error::{Error, ProtocolError};
use crate::model::{Device, Location, LocationsResponse};
use crate::protocol::{API_BASE_PATH, ZAutomationApi};
use crate::types::Action;

// ============================================================================
// HttpConfig - Connection settings for a Z-Way server
// ============================================================================

/// Configuration for the `ZAutomation` HTTP client.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use zwaveme_assist::Credentials;
/// use zwaveme_assist::protocol::HttpConfig;
///
/// let creds = Credentials::new("admin", "secret", "http://zway.local:8083/");
/// let config = HttpConfig::new(creds).with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.base_url(), "http://zway.local:8083/ZAutomation/api/v1");
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    credentials: Credentials,
    timeout: Duration,
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration with the default timeout.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the credentials.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the API base URL: the server URL without trailing slashes,
    /// followed by [`API_BASE_PATH`].
    #[must_use]
    pub fn base_url(&self) -> String {
        format!(
            "{}{API_BASE_PATH}",
            self.credentials.server_url().trim_end_matches('/')
        )
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the server URL is not an
    /// `http` or `https` URL, or `ProtocolError::Http` if the client cannot
    /// be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        let server_url = self.credentials.server_url();
        if !(server_url.starts_with("http://") || server_url.starts_with("https://")) {
            return Err(ProtocolError::InvalidAddress(server_url.to_string()));
        }

        let base_url = self.base_url();
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url,
            client,
            credentials: self.credentials,
        })
    }
}

// ============================================================================
// HttpClient
// ============================================================================

/// HTTP client for a Z-Way server.
///
/// Stateless apart from the reusable connection pool: nothing is cached
/// between calls.
///
/// # Examples
///
/// ```no_run
/// use zwaveme_assist::{Credentials, protocol::{HttpClient, ZAutomationApi}};
///
/// # async fn example() -> zwaveme_assist::Result<()> {
/// let client = HttpClient::new(Credentials::load_default()?)?;
/// for location in client.list_locations().await? {
///     println!("{location}: {} switches", location.switches()?.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    credentials: Credentials,
}

impl HttpClient {
    /// Creates a client with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`HttpConfig::into_client`].
    pub fn new(credentials: Credentials) -> Result<Self, ProtocolError> {
        HttpConfig::new(credentials).into_client()
    }

    /// Returns the API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn locations_url(&self) -> String {
        format!("{}/locations", self.base_url)
    }

    fn action_url(&self, device: &Device, action: Action) -> String {
        format!(
            "{}/devices/{}/command/{}",
            self.base_url,
            urlencoding::encode(device.id()),
            action.as_str()
        )
    }

    async fn get(&self, url: &str) -> Result<Response, ProtocolError> {
        tracing::debug!(url = %url, "Sending ZAutomation request");

        let response = self
            .client
            .get(url)
            .basic_auth(self.credentials.username(), Some(self.credentials.password()))
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ProtocolError::AuthenticationFailed);
        }

        if !status.is_success() {
            return Err(ProtocolError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        Ok(response)
    }
}

impl ZAutomationApi for HttpClient {
    async fn list_locations(&self) -> Result<Vec<Location>, Error> {
        let response = self.get(&self.locations_url()).await?;
        let body = response.text().await.map_err(ProtocolError::Http)?;

        let locations = LocationsResponse::from_body(&body)?.into_locations();
        tracing::debug!(count = locations.len(), "Received locations");

        Ok(locations)
    }

    async fn send_action(&self, device: &Device, action: Action) -> Result<(), Error> {
        let response = self.get(&self.action_url(device, action)).await?;
        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(device = %device, action = %action, body = %body, "Action accepted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(server_url: &str) -> Credentials {
        Credentials::new("admin", "secret", server_url)
    }

    #[test]
    fn http_config_default_timeout() {
        let config = HttpConfig::new(credentials("http://zway.local:8083"));
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.credentials().username(), "admin");
    }

    #[test]
    fn http_config_with_timeout() {
        let config =
            HttpConfig::new(credentials("http://zway.local")).with_timeout(Duration::from_secs(30));
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn base_url_trims_trailing_slash() {
        let config = HttpConfig::new(credentials("https://zway.local:8083//"));
        assert_eq!(config.base_url(), "https://zway.local:8083/ZAutomation/api/v1");
    }

    #[test]
    fn into_client_rejects_url_without_scheme() {
        let result = HttpConfig::new(credentials("zway.local:8083")).into_client();
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));
    }

    #[test]
    fn locations_url() {
        let client = HttpClient::new(credentials("http://zway.local:8083")).unwrap();
        assert_eq!(
            client.locations_url(),
            "http://zway.local:8083/ZAutomation/api/v1/locations"
        );
    }

    #[test]
    fn action_url() {
        let client = HttpClient::new(credentials("http://zway.local:8083")).unwrap();
        let device = Device::new("ZWayVDev_zway_2-0-37", "The Plug Switch");
        assert_eq!(
            client.action_url(&device, Action::Off),
            "http://zway.local:8083/ZAutomation/api/v1/devices/ZWayVDev_zway_2-0-37/command/off"
        );
    }

    #[test]
    fn action_url_encodes_device_id() {
        let client = HttpClient::new(credentials("http://zway.local")).unwrap();
        let device = Device::new("odd id/1", "Odd");
        assert_eq!(
            client.action_url(&device, Action::On),
            "http://zway.local/ZAutomation/api/v1/devices/odd%20id%2F1/command/on"
        );
    }
}
