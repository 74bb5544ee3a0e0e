// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Switch actions.
//!
//! A binary switch only understands two commands. Each action also carries
//! the words a speaker may use for it, which is where speech-recognition
//! quirks are absorbed.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// An action that can be sent to a binary switch.
///
/// # Examples
///
/// ```
/// use zwaveme_assist::types::Action;
///
/// assert_eq!(Action::On.as_str(), "on");
/// assert_eq!(Action::Off.as_str(), "off");
/// assert_eq!("OFF".parse::<Action>().unwrap(), Action::Off);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Turn the switch on.
    On,
    /// Turn the switch off.
    Off,
}

impl Action {
    /// All actions, in the order phrases are generated.
    pub const ALL: [Self; 2] = [Self::On, Self::Off];

    /// Returns the value used in the `ZAutomation` command path.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }

    /// Returns every spoken word that maps to this action.
    ///
    /// The first word is the canonical one. `Off` also accepts `"of"`:
    /// speech recognizers with a constrained vocabulary transcribe the
    /// spoken "off" that way.
    #[must_use]
    pub const fn words(&self) -> &'static [&'static str] {
        match self {
            Self::On => &["on"],
            Self::Off => &["off", "of"],
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            _ => Err(ValueError::InvalidAction(s.to_string())),
        }
    }
}

impl From<bool> for Action {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}
