// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text cleanup and word splitting.
//!
//! Chat platforms sprinkle their own markup into messages: `<@123>` user
//! mentions, `<#456>` channel links, `<@&789>` role pings, and bare `@handle`
//! mentions. None of that is vocabulary, so it gets stripped before the query
//! is tokenized.
//!
//! Two tokenizers live here on purpose:
//! - [`tokenize`] splits on whitespace only. This is what line matching uses,
//!   so punctuation stays attached to words ("entry." vs "entry") and the
//!   fuzzy comparison absorbs the difference.
//! - [`gate_tokens`] splits on word boundaries (anything that is not a letter,
//!   digit or underscore). The query gate uses it so "how?" still counts as
//!   the keyword "how".

use regex::Regex;
use std::sync::LazyLock;

/// `<@123>` and `<@!123>` user mentions.
static USER_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<@!?\d+>").expect("valid user mention pattern"));

/// `<#123>` channel references.
static CHANNEL_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<#\d+>").expect("valid channel pattern"));

/// `<@&123>` role references.
static ROLE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<@&\d+>").expect("valid role pattern"));

/// `@handle` at the start of the text or after whitespace. The leading
/// whitespace is consumed along with the handle. Handles are ASCII word
/// characters only, so `@café` leaves `é` behind.
static HANDLE_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)@(?-u:\w)+").expect("valid handle pattern"));

/// Strip platform mention markup and trim surrounding whitespace.
///
/// Text without any markup comes back unchanged apart from trimming.
///
/// ```
/// use fuzzline::normalize;
///
/// assert_eq!(normalize("<@123> how does the cache work?"), "how does the cache work?");
/// assert_eq!(normalize("hey @bot explain eviction"), "hey explain eviction");
/// ```
pub fn normalize(text: &str) -> String {
    let cleaned = USER_MENTION.replace_all(text, "");
    let cleaned = CHANNEL_REF.replace_all(&cleaned, "");
    let cleaned = ROLE_REF.replace_all(&cleaned, "");
    let cleaned = HANDLE_MENTION.replace_all(&cleaned, "");
    cleaned.trim().to_string()
}

/// Lowercase and split on runs of whitespace. Empty tokens never appear.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Lowercase and split on word boundaries.
///
/// A word character is a letter, a digit, or `_`. Everything else separates
/// tokens.
pub fn gate_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokenize and drop repeated words, keeping first-occurrence order.
pub fn distinct_words(text: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for word in tokenize(text) {
        if !words.contains(&word) {
            words.push(word);
        }
    }
    words
}
