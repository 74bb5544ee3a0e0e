// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed views over `ZAutomation` API payloads.
//!
//! The locations endpoint answers with an envelope:
//!
//! ```json
//! {
//!   "data": [
//!     {
//!       "id": 1,
//!       "title": "Living Room",
//!       "namespaces": [
//!         {
//!           "id": "devices_switchBinary",
//!           "params": [{"deviceId": "ZWayVDev_zway_2-0-37", "deviceName": "The Plug Switch"}]
//!         }
//!       ]
//!     }
//!   ],
//!   "code": 200,
//!   "message": "200 OK"
//! }
//! ```

mod device;
mod location;

pub use device::Device;
pub use location::{Location, Namespace, SWITCH_NAMESPACE};

use serde::Deserialize;

use crate::error::ParseError;

/// Body of a `GET /locations` response.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationsResponse {
    data: Vec<Location>,
}

impl LocationsResponse {
    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body is not JSON or has no `data`
    /// array of locations.
    pub fn from_body(body: &str) -> Result<Self, ParseError> {
        serde_json::from_str(body).map_err(Into::into)
    }

    /// Consumes the response and returns its locations.
    #[must_use]
    pub fn into_locations(self) -> Vec<Location> {
        self.data
    }
}
