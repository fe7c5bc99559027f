// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how line matches get their numbers and their order.
//!
//! A line's score is a plain mean of pair similarities. Ranking is a stable
//! sort on that one number, so ties keep corpus order and then line order.

mod core;
pub mod ranking;

pub use core::*;
