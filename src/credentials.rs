// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ZAutomation` credentials and the file they are loaded from.
//!
//! The credential file is a JSON object with exactly three keys:
//!
//! ```json
//! {
//!   "username": "admin",
//!   "password": "secret",
//!   "server_url": "http://192.168.1.20:8083"
//! }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::Deserialize;

use crate::error::ConfigError;

/// Default location of the credential file.
pub const DEFAULT_CREDENTIALS_PATH: &str = "~/zaut_credentials.json";

/// Basic-auth credentials and base URL of a Z-Way server.
///
/// The password is redacted from `Debug` output.
///
/// # Examples
///
/// ```
/// use zwaveme_assist::Credentials;
///
/// let creds = Credentials::new("admin", "secret", "http://zway.local:8083");
/// assert_eq!(creds.server_url(), "http://zway.local:8083");
/// assert!(!format!("{creds:?}").contains("secret"));
/// ```
#[derive(Clone, Deserialize)]
pub struct Credentials {
    username: String,
    password: String,
    server_url: String,
}

impl Credentials {
    /// Creates credentials from their parts.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        server_url: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            server_url: server_url.into(),
        }
    }

    /// Loads credentials from [`DEFAULT_CREDENTIALS_PATH`].
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(DEFAULT_CREDENTIALS_PATH)
    }

    /// Loads credentials from a JSON file.
    ///
    /// A leading `~/` is expanded to the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read,
    /// `ConfigError::Json` if it is not a credential object, or
    /// `ConfigError::NoHomeDirectory` if `~` cannot be resolved.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let requested = path.as_ref();
        let path = expand_home(requested)?;
        tracing::debug!(
            requested = %requested.display(),
            path = %path.display(),
            "Loading credentials"
        );

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Json { path, source })
    }

    /// Returns the basic-auth username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the basic-auth password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the server base URL, e.g. `http://zway.local:8083`.
    #[must_use]
    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .field("server_url", &self.server_url)
            .finish()
    }
}

fn expand_home(path: &Path) -> Result<PathBuf, ConfigError> {
    match path.strip_prefix("~") {
        Ok(rest) => {
            let dirs = BaseDirs::new().ok_or(ConfigError::NoHomeDirectory)?;
            Ok(dirs.home_dir().join(rest))
        }
        Err(_) => Ok(path.to_path_buf()),
    }
}
