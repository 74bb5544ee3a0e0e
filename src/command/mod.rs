// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Voice command vocabulary.
//!
//! Each binary switch of each location yields one phrase per action word:
//!
//! | Action | Phrase |
//! |--------|--------|
//! | [`Action::On`](crate::types::Action::On) | `wave on <device> in <room>` |
//! | [`Action::Off`](crate::types::Action::Off) | `wave off <device> in <room>` |
//! | [`Action::Off`](crate::types::Action::Off) | `wave of <device> in <room>` |
//!
//! All phrases are lower-cased. The `of` variant exists because speech
//! recognizers often transcribe a spoken "off" that way.

mod phrase;
mod table;

pub use phrase::{BASE_ORDER, normalize, phrase};
pub use table::{CommandEntry, CommandTable};
