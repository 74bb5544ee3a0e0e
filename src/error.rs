// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `zwaveme_assist` library.
//!
//! This module provides the error hierarchy for everything that can fail
//! while talking to a Z-Way server: credential loading, HTTP transport,
//! response parsing, and argument validation.
//!
//! An unknown voice command is deliberately *not* an error: the
//! [`Assistant`](crate::Assistant) reports it and returns `false`.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument could not be converted into a typed value.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The `ZAutomation` server could not be reached or answered with a failure status.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The `ZAutomation` server answered with an unexpected payload.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The credential file could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to argument validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The action is not one of `on` / `off`.
    #[error("invalid action: {0}")]
    InvalidAction(String),
}

/// Errors related to HTTP communication with the `ZAutomation` server.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed before a status was received.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status} - {reason}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The canonical reason phrase for the status.
        reason: String,
    },

    /// The server rejected the basic-auth credentials.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The configured server URL is unusable.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing `ZAutomation` responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the payload.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// A field is present but holds the wrong kind of value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// Errors related to loading the credential file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not a valid credential object.
    #[error("invalid credential file {}: {source}", .path.display())]
    Json {
        /// The path that was parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// A `~/` path was given but no home directory could be resolved.
    #[error("cannot resolve the home directory")]
    NoHomeDirectory,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
