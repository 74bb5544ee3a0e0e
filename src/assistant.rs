// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Voice command dispatch.
//!
//! The [`Assistant`] owns a `ZAutomation` client and a command table that is
//! built on first use. The table has two states, uninitialized and built;
//! once built it is never refreshed, so devices added on the server later
//! are only picked up by a new `Assistant`.

use tokio::sync::OnceCell;

use crate::command::{CommandTable, normalize};
use crate::credentials::Credentials;
use crate::error::Error;
use crate::protocol::{HttpClient, ZAutomationApi};

/// Resolves spoken phrases to switch actions and sends them.
///
/// # Examples
///
/// ```no_run
/// use zwaveme_assist::{Assistant, Credentials};
///
/// # async fn example() -> zwaveme_assist::Result<()> {
/// let assistant = Assistant::http(Credentials::load_default()?)?;
///
/// for phrase in assistant.list_commands().await? {
///     println!("{phrase}");
/// }
///
/// let done = assistant
///     .execute("'wave on the plug switch in the living room'")
///     .await?;
/// assert!(done);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Assistant<A: ZAutomationApi> {
    api: A,
    table: OnceCell<CommandTable>,
}

impl Assistant<HttpClient> {
    /// Creates an assistant talking HTTP to the server in `credentials`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the HTTP client cannot be created.
    pub fn http(credentials: Credentials) -> Result<Self, Error> {
        Ok(Self::new(HttpClient::new(credentials)?))
    }
}

impl<A: ZAutomationApi> Assistant<A> {
    /// Creates an assistant with an uninitialized command table.
    pub fn new(api: A) -> Self {
        Self {
            api,
            table: OnceCell::new(),
        }
    }

    /// Returns the underlying API client.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Returns `true` once the command table has been built.
    pub fn is_initialized(&self) -> bool {
        self.table.initialized()
    }

    /// Builds the command table if it has not been built yet.
    ///
    /// Concurrent callers share a single build. If the build fails the
    /// assistant stays uninitialized and the next call retries.
    ///
    /// # Errors
    ///
    /// Propagates transport and parse errors from listing the locations.
    pub async fn initialize(&self) -> Result<&CommandTable, Error> {
        self.table
            .get_or_try_init(|| CommandTable::build(&self.api))
            .await
    }

    /// Returns every known phrase, in the order they were generated.
    ///
    /// # Errors
    ///
    /// See [`initialize`](Self::initialize).
    pub async fn list_commands(&self) -> Result<Vec<&str>, Error> {
        Ok(self.initialize().await?.phrases().collect())
    }

    /// Executes a spoken phrase.
    ///
    /// The phrase is [normalized](normalize) and looked up exactly. Returns
    /// `Ok(true)` once the matching action has been accepted by the server,
    /// or `Ok(false)` without any further request if the phrase is unknown.
    ///
    /// # Errors
    ///
    /// Propagates transport and parse errors from building the table or
    /// sending the action.
    pub async fn execute(&self, phrase: &str) -> Result<bool, Error> {
        let table = self.initialize().await?;
        let phrase = normalize(phrase);

        let Some(entry) = table.get(phrase) else {
            tracing::warn!(phrase = %phrase, "Unknown command");
            return Ok(false);
        };

        tracing::info!(
            phrase = %phrase,
            device = %entry.device,
            action = %entry.action,
            "Executing command"
        );
        self.api.send_action(&entry.device, entry.action).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;
    use serde_json::json;

    use super::*;
    use crate::error::ProtocolError;
    use crate::model::{Device, Location, Namespace, SWITCH_NAMESPACE};
    use crate::types::Action;

    /// In-memory API recording every call.
    #[derive(Default)]
    struct FakeApi {
        locations: Vec<Location>,
        fail_listing: bool,
        list_calls: Mutex<usize>,
        actions: Mutex<Vec<(String, Action)>>,
    }

    impl FakeApi {
        fn with_plug() -> Self {
            Self {
                locations: vec![Location::new(
                    "The Living Room",
                    vec![Namespace::new(
                        SWITCH_NAMESPACE,
                        json!([{"deviceId": "ZWayVDev_zway_2-0-37", "deviceName": "The Plug Switch"}]),
                    )],
                )],
                ..Self::default()
            }
        }

        fn list_calls(&self) -> usize {
            *self.list_calls.lock()
        }

        fn actions(&self) -> Vec<(String, Action)> {
            self.actions.lock().clone()
        }
    }

    impl ZAutomationApi for FakeApi {
        async fn list_locations(&self) -> Result<Vec<Location>, Error> {
            *self.list_calls.lock() += 1;
            // Suspend like a real request so concurrent callers interleave.
            tokio::task::yield_now().await;
            if self.fail_listing {
                return Err(ProtocolError::Status {
                    status: 500,
                    reason: "Internal Server Error".to_string(),
                }
                .into());
            }
            Ok(self.locations.clone())
        }

        async fn send_action(&self, device: &Device, action: Action) -> Result<(), Error> {
            self.actions.lock().push((device.id().to_string(), action));
            Ok(())
        }
    }

    #[tokio::test]
    async fn table_is_lazy() {
        let assistant = Assistant::new(FakeApi::with_plug());
        assert!(!assistant.is_initialized());
        assert_eq!(assistant.api().list_calls(), 0);

        assistant.initialize().await.unwrap();
        assert!(assistant.is_initialized());
        assert_eq!(assistant.api().list_calls(), 1);
    }

    #[tokio::test]
    async fn table_is_built_once() {
        let assistant = Assistant::new(FakeApi::with_plug());

        assistant.list_commands().await.unwrap();
        for _ in 0..3 {
            assistant
                .execute("wave on the plug switch in the living room")
                .await
                .unwrap();
        }

        assert_eq!(assistant.api().list_calls(), 1);
    }

    #[tokio::test]
    async fn concurrent_first_calls_share_one_build() {
        let assistant = Assistant::new(FakeApi::with_plug());

        let (on, unknown, commands) = tokio::join!(
            assistant.execute("wave on the plug switch in the living room"),
            assistant.execute("wave on nothing in nowhere"),
            assistant.list_commands(),
        );

        assert!(on.unwrap());
        assert!(!unknown.unwrap());
        assert_eq!(commands.unwrap().len(), 3);
        assert_eq!(assistant.api().list_calls(), 1);
        assert_eq!(assistant.api().actions().len(), 1);
    }

    #[tokio::test]
    async fn empty_table_stays_built() {
        let assistant = Assistant::new(FakeApi::default());

        for _ in 0..3 {
            assert!(!assistant.execute("turn on nothing").await.unwrap());
        }

        assert!(assistant.is_initialized());
        assert_eq!(assistant.api().list_calls(), 1);
        assert!(assistant.api().actions().is_empty());
    }

    #[tokio::test]
    async fn list_commands_end_to_end() {
        let assistant = Assistant::new(FakeApi::with_plug());
        let mut commands = assistant.list_commands().await.unwrap();
        commands.sort_unstable();

        assert_eq!(
            commands,
            [
                "wave of the plug switch in the living room",
                "wave off the plug switch in the living room",
                "wave on the plug switch in the living room",
            ]
        );
    }

    #[tokio::test]
    async fn execute_quoted_phrase() {
        let assistant = Assistant::new(FakeApi::with_plug());
        let spoken = "'Wave On The Plug Switch In The Living Room'".to_lowercase();

        assert!(assistant.execute(&spoken).await.unwrap());
        assert_eq!(
            assistant.api().actions(),
            [("ZWayVDev_zway_2-0-37".to_string(), Action::On)]
        );
    }

    #[tokio::test]
    async fn off_aliases_send_one_off_each() {
        let assistant = Assistant::new(FakeApi::with_plug());

        assert!(
            assistant
                .execute("wave off the plug switch in the living room")
                .await
                .unwrap()
        );
        assert_eq!(assistant.api().actions().len(), 1);

        assert!(
            assistant
                .execute("wave of the plug switch in the living room")
                .await
                .unwrap()
        );
        let actions = assistant.api().actions();
        assert_eq!(actions.len(), 2);
        assert!(actions.iter().all(|(_, action)| *action == Action::Off));
    }

    #[tokio::test]
    async fn unknown_phrase_sends_nothing() {
        let assistant = Assistant::new(FakeApi::with_plug());

        assert!(
            !assistant
                .execute("wave on the toaster in the living room")
                .await
                .unwrap()
        );
        // Upper case is not folded here.
        assert!(
            !assistant
                .execute("Wave on the plug switch in the living room")
                .await
                .unwrap()
        );
        assert!(assistant.api().actions().is_empty());
    }

    #[tokio::test]
    async fn failed_build_propagates_and_stays_uninitialized() {
        let api = FakeApi {
            fail_listing: true,
            ..FakeApi::default()
        };
        let assistant = Assistant::new(api);

        let err = assistant.execute("wave on x in y").await.unwrap_err();
        assert!(matches!(err, Error::Protocol(ProtocolError::Status { status: 500, .. })));
        assert!(!assistant.is_initialized());

        assert!(assistant.list_commands().await.is_err());
        assert_eq!(assistant.api().list_calls(), 2);
    }
}
