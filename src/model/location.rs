// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Locations (rooms) and their device namespaces.

use std::fmt;
use std::sync::OnceLock;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ParseError;
use crate::model::Device;

/// Namespace id grouping the binary switches of a location.
pub const SWITCH_NAMESPACE: &str = "devices_switchBinary";

/// A room as returned by `GET /ZAutomation/api/v1/locations`.
///
/// The binary switches of the room are derived on first access to
/// [`switches`](Self::switches) and memoized.
///
/// # Examples
///
/// ```
/// use zwaveme_assist::model::Location;
///
/// let json = r#"{
///     "id": 1,
///     "title": "Living Room",
///     "namespaces": [{
///         "id": "devices_switchBinary",
///         "params": [{"deviceId": "ZWayVDev_zway_2-0-37", "deviceName": "The Plug Switch"}]
///     }]
/// }"#;
/// let location: Location = serde_json::from_str(json).unwrap();
/// assert_eq!(location.title(), "Living Room");
/// assert_eq!(location.switches().unwrap()[0].name(), "The Plug Switch");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    #[serde(default)]
    id: Option<u64>,
    title: String,
    #[serde(default)]
    namespaces: Vec<Namespace>,
    #[serde(skip)]
    switches: OnceLock<Vec<Device>>,
}

/// A group of devices inside a location, keyed by device kind.
///
/// `params` stays untyped: only switch namespaces are interpreted.
#[derive(Debug, Clone, Deserialize)]
pub struct Namespace {
    id: String,
    #[serde(default)]
    params: Value,
}

impl Location {
    /// Creates a location from its title and namespaces.
    #[must_use]
    pub fn new(title: impl Into<String>, namespaces: Vec<Namespace>) -> Self {
        Self {
            id: None,
            title: title.into(),
            namespaces,
            switches: OnceLock::new(),
        }
    }

    /// Returns the numeric location id, if the server sent one.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.id
    }

    /// Returns the room title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the raw namespaces of this location.
    #[must_use]
    pub fn namespaces(&self) -> &[Namespace] {
        &self.namespaces
    }

    /// Returns the binary switches of this location.
    ///
    /// Every namespace tagged [`SWITCH_NAMESPACE`] is flattened into
    /// devices. The result is computed once; later calls return the same
    /// slice. A parse failure is not memoized.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if a switch namespace has no `params` array or
    /// one of its entries is not a valid device.
    pub fn switches(&self) -> Result<&[Device], ParseError> {
        if let Some(switches) = self.switches.get() {
            return Ok(switches.as_slice());
        }

        let mut devices = Vec::new();
        for namespace in self.namespaces.iter().filter(|n| n.id == SWITCH_NAMESPACE) {
            devices.extend(namespace.devices()?);
        }

        Ok(self.switches.get_or_init(|| devices).as_slice())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.title)
    }
}

impl Namespace {
    /// Creates a namespace from its id and raw params.
    #[must_use]
    pub fn new(id: impl Into<String>, params: Value) -> Self {
        Self {
            id: id.into(),
            params,
        }
    }

    /// Returns the namespace id, e.g. [`SWITCH_NAMESPACE`].
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    fn devices(&self) -> Result<Vec<Device>, ParseError> {
        match &self.params {
            Value::Array(entries) => entries.iter().map(Device::from_value).collect(),
            Value::Null => Err(ParseError::MissingField("params".to_string())),
            other => Err(ParseError::InvalidValue {
                field: "params".to_string(),
                message: format!("expected an array, got {other}"),
            }),
        }
    }
}
