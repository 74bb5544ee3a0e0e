// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Phrase construction and normalization.

/// Word every command phrase starts with.
pub const BASE_ORDER: &str = "wave";

/// Builds the lower-cased phrase for an action word, a device and a room.
///
/// # Examples
///
/// ```
/// use zwaveme_assist::command::phrase;
///
/// assert_eq!(
///     phrase("on", "The Plug Switch", "The Living Room"),
///     "wave on the plug switch in the living room"
/// );
/// ```
#[must_use]
pub fn phrase(action_word: &str, device_name: &str, room_title: &str) -> String {
    format!("{BASE_ORDER} {action_word} {device_name} in {room_title}").to_lowercase()
}

/// Strips one layer of enclosing single quotes.
///
/// Quotes are removed only when the phrase both starts and ends with `'`;
/// a lone `'` counts as both and normalizes to an empty phrase. Nothing
/// else is trimmed and the case is left untouched.
///
/// # Examples
///
/// ```
/// use zwaveme_assist::command::normalize;
///
/// assert_eq!(normalize("'wave on x in y'"), "wave on x in y");
/// assert_eq!(normalize("wave on x in y"), "wave on x in y");
/// assert_eq!(normalize("'unterminated"), "'unterminated");
/// ```
#[must_use]
pub fn normalize(phrase: &str) -> &str {
    if phrase == "'" {
        return "";
    }
    phrase
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .unwrap_or(phrase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_is_lowercased() {
        assert_eq!(
            phrase("off", "Desk LAMP", "Office"),
            "wave off desk lamp in office"
        );
    }

    #[test]
    fn phrase_keeps_room_inside_device_name() {
        assert_eq!(
            phrase("on", "Kitchen Light", "Kitchen"),
            "wave on kitchen light in kitchen"
        );
    }

    #[test]
    fn normalize_strips_quotes() {
        assert_eq!(normalize("'wave on x in y'"), "wave on x in y");
    }

    #[test]
    fn normalize_unquoted_is_noop() {
        assert_eq!(normalize("wave on x in y"), "wave on x in y");
    }

    #[test]
    fn normalize_requires_both_quotes() {
        assert_eq!(normalize("'unterminated"), "'unterminated");
        assert_eq!(normalize("unopened'"), "unopened'");
    }

    #[test]
    fn normalize_strips_only_one_layer() {
        assert_eq!(normalize("''nested''"), "'nested'");
    }

    #[test]
    fn normalize_does_not_trim_or_fold_case() {
        assert_eq!(normalize(" 'Wave On' "), " 'Wave On' ");
        assert_eq!(normalize("'Wave On'"), "Wave On");
    }

    #[test]
    fn normalize_edge_lengths() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("''"), "");
    }

    #[test]
    fn normalize_lone_quote_is_empty() {
        // A lone quote is both the first and the last character.
        assert_eq!(normalize("'"), "");
    }
}
