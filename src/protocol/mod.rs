// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Access to the `ZAutomation` REST API.
//!
//! # Endpoints
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`ZAutomationApi::list_locations`] | `GET {server}/ZAutomation/api/v1/locations` |
//! | [`ZAutomationApi::send_action`] | `GET {server}/ZAutomation/api/v1/devices/{id}/command/{on\|off}` |
//!
//! Every request carries HTTP basic authentication.

mod http;

pub use http::{HttpClient, HttpConfig};

use crate::error::Error;
use crate::model::{Device, Location};
use crate::types::Action;

/// Path prefix of the `ZAutomation` API on a Z-Way server.
pub const API_BASE_PATH: &str = "/ZAutomation/api/v1";

/// Trait for clients of the `ZAutomation` API.
///
/// [`HttpClient`] is the network implementation. The
/// [`Assistant`](crate::Assistant) is generic over this trait so it can be
/// driven by any other implementation.
#[allow(async_fn_in_trait)]
pub trait ZAutomationApi {
    /// Lists all locations with their device namespaces.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the request fails or the server answers
    /// with a non-success status, and `Error::Parse` if the body has no
    /// `data` array of locations.
    async fn list_locations(&self) -> Result<Vec<Location>, Error>;

    /// Sends an action to a single device.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the request fails or the server answers
    /// with a non-success status.
    async fn send_action(&self, device: &Device, action: Action) -> Result<(), Error>;
}
