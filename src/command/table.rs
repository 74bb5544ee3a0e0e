// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The phrase → action table.

use indexmap::IndexMap;

use crate::command::phrase;
use crate::error::{Error, ParseError};
use crate::model::{Device, Location};
use crate::protocol::ZAutomationApi;
use crate::types::Action;

/// What a phrase resolves to: an action on one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    /// The action to send.
    pub action: Action,
    /// The target device.
    pub device: Device,
}

/// Insertion-ordered mapping from phrase to [`CommandEntry`].
///
/// Every (location, switch, action word) triple yields one phrase. Phrases
/// are grouped by action word: all `on` phrases first, then `off`, then
/// `of`. When two
/// triples produce the same phrase (same device name in two locations with
/// the same title) the later one wins.
///
/// # Examples
///
/// ```
/// use zwaveme_assist::command::CommandTable;
/// use zwaveme_assist::model::Location;
/// use zwaveme_assist::types::Action;
///
/// let location: Location = serde_json::from_value(serde_json::json!({
///     "title": "Living Room",
///     "namespaces": [{
///         "id": "devices_switchBinary",
///         "params": [{"deviceId": "ZWayVDev_zway_2-0-37", "deviceName": "Plug"}]
///     }]
/// })).unwrap();
///
/// let table = CommandTable::from_locations(&[location]).unwrap();
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.get("wave of plug in living room").unwrap().action, Action::Off);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    entries: IndexMap<String, CommandEntry>,
}

impl CommandTable {
    /// Lists the locations through `api` and builds the table from them.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`ZAutomationApi::list_locations`] and
    /// of [`Location::switches`].
    pub async fn build<A: ZAutomationApi>(api: &A) -> Result<Self, Error> {
        let locations = api.list_locations().await?;
        let table = Self::from_locations(&locations)?;
        tracing::info!(
            locations = locations.len(),
            commands = table.len(),
            "Command table built"
        );
        Ok(table)
    }

    /// Builds the table from already fetched locations.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if a location's switch namespace is malformed.
    pub fn from_locations(locations: &[Location]) -> Result<Self, ParseError> {
        let mut table = Self::default();

        for action in Action::ALL {
            for word in action.words() {
                for location in locations {
                    for device in location.switches()? {
                        table.insert(
                            phrase(word, device.name(), location.title()),
                            CommandEntry {
                                action,
                                device: device.clone(),
                            },
                        );
                    }
                }
            }
        }

        Ok(table)
    }

    fn insert(&mut self, phrase: String, entry: CommandEntry) {
        tracing::debug!(phrase = %phrase, device = %entry.device, "New command");
        if let Some(previous) = self.entries.insert(phrase, entry) {
            tracing::debug!(device = %previous.device, "Command phrase overwritten");
        }
    }

    /// Looks up a phrase exactly as given.
    #[must_use]
    pub fn get(&self, phrase: &str) -> Option<&CommandEntry> {
        self.entries.get(phrase)
    }

    /// Returns the phrases in insertion order.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the phrases and their entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CommandEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of phrases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no phrase is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
