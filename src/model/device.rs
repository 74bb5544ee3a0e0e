// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Switch device entries.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde_json::Value;

use crate::error::ParseError;

/// A binary switch known to the `ZAutomation` server.
///
/// Two devices are equal when their API ids are equal; the display name
/// does not take part in identity.
///
/// # Examples
///
/// ```
/// use zwaveme_assist::model::Device;
///
/// let json = serde_json::json!({
///     "deviceId": "ZWayVDev_zway_2-0-37",
///     "deviceName": "The Plug Switch"
/// });
/// let device = Device::from_value(&json).unwrap();
/// assert_eq!(device.id(), "ZWayVDev_zway_2-0-37");
/// assert_eq!(device.name(), "The Plug Switch");
/// ```
#[derive(Debug, Clone, Eq)]
pub struct Device {
    id: String,
    name: String,
}

impl Device {
    const ID: &'static str = "deviceId";
    const NAME: &'static str = "deviceName";

    /// Creates a device from its API id and display name.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Builds a device from one entry of a switch namespace's `params` array.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if `deviceId` or `deviceName` is
    /// absent, or `ParseError::InvalidValue` if either is not a string.
    pub fn from_value(value: &Value) -> Result<Self, ParseError> {
        Ok(Self {
            id: string_field(value, Self::ID)?,
            name: string_field(value, Self::NAME)?,
        })
    }

    /// Returns the id used in `ZAutomation` command paths.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the human-readable device name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Device {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Hash for Device {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}[{}]'", self.name, self.id)
    }
}

fn string_field(value: &Value, field: &str) -> Result<String, ParseError> {
    match value.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ParseError::InvalidValue {
            field: field.to_string(),
            message: format!("expected a string, got {other}"),
        }),
        None => Err(ParseError::MissingField(field.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn from_value_reads_both_fields() {
        let device = Device::from_value(&json!({
            "deviceId": "ZWayVDev_zway_5-0-37",
            "deviceName": "Desk Lamp",
            "deviceType": "switchBinary"
        }))
        .unwrap();

        assert_eq!(device.id(), "ZWayVDev_zway_5-0-37");
        assert_eq!(device.name(), "Desk Lamp");
    }

    #[test]
    fn from_value_missing_name() {
        let err = Device::from_value(&json!({ "deviceId": "x" })).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(ref f) if f == "deviceName"));
    }

    #[test]
    fn from_value_missing_id() {
        let err = Device::from_value(&json!({ "deviceName": "Lamp" })).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(ref f) if f == "deviceId"));
    }

    #[test]
    fn from_value_wrong_type() {
        let err = Device::from_value(&json!({ "deviceId": 12, "deviceName": "Lamp" })).unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { ref field, .. } if field == "deviceId"));
    }

    #[test]
    fn identity_is_the_id() {
        let a = Device::new("dev-1", "Lamp");
        let b = Device::new("dev-1", "Renamed Lamp");
        let c = Device::new("dev-2", "Lamp");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display() {
        let device = Device::new("dev-1", "Lamp");
        assert_eq!(device.to_string(), "'Lamp[dev-1]'");
    }
}
