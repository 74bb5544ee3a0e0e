// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `zwaveme_assist` - voice-style commands for Z-Way binary switches.
//!
//! This library lists the rooms and binary switches of a Z-Way server
//! through its `ZAutomation` HTTP API, turns them into spoken command phrases
//! and sends the matching on/off action when a phrase is recognized.
//!
//! # Supported Features
//!
//! - **Credentials**: load `username` / `password` / `server_url` from a JSON file
//! - **Locations**: list rooms and their binary switches
//! - **Vocabulary**: `wave on|off|of <device> in <room>` for every switch
//! - **Dispatch**: execute a phrase, tolerating enclosing single quotes
//!
//! # Quick Start
//!
//! ```no_run
//! use zwaveme_assist::{Assistant, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> zwaveme_assist::Result<()> {
//!     // Reads ~/zaut_credentials.json
//!     let assistant = Assistant::http(Credentials::load_default()?)?;
//!
//!     // The first call lists the locations and builds the command table
//!     for phrase in assistant.list_commands().await? {
//!         println!("{phrase}");
//!     }
//!
//!     // Unknown phrases return false instead of failing
//!     if !assistant.execute("wave on the plug switch in the living room").await? {
//!         eprintln!("not understood");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Direct API Access
//!
//! ```no_run
//! use zwaveme_assist::protocol::{HttpClient, ZAutomationApi};
//! use zwaveme_assist::{Action, Credentials};
//!
//! # async fn example() -> zwaveme_assist::Result<()> {
//! let client = HttpClient::new(Credentials::load("/etc/zway/credentials.json")?)?;
//! for location in client.list_locations().await? {
//!     for device in location.switches()? {
//!         client.send_action(device, Action::Off).await?;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod assistant;
pub mod command;
mod credentials;
pub mod error;
pub mod model;
pub mod protocol;
pub mod types;

pub use assistant::Assistant;
pub use command::{CommandEntry, CommandTable, normalize};
pub use credentials::{Credentials, DEFAULT_CREDENTIALS_PATH};
pub use error::{ConfigError, Error, ParseError, ProtocolError, Result, ValueError};
pub use model::{Device, Location};
pub use protocol::{HttpClient, HttpConfig, ZAutomationApi};
pub use types::Action;
