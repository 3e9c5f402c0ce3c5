// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Hit type discriminator.
//!
//! The type is fixed at hit construction time and doubles as the value of
//! the `t` wire parameter. The stats gatherer uses it to pick a counter;
//! wire-level validation is deliberately not performed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of analytics hit being posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitType {
	Pageview,
	Appview,
	Event,
	Item,
	Transaction,
	Social,
	Timing,
	Exception,
}

impl HitType {
	/// Returns the lowercase value sent as the `t` parameter.
	pub fn wire_value(self) -> &'static str {
		match self {
			HitType::Pageview => "pageview",
			HitType::Appview => "appview",
			HitType::Event => "event",
			HitType::Item => "item",
			HitType::Transaction => "transaction",
			HitType::Social => "social",
			HitType::Timing => "timing",
			HitType::Exception => "exception",
		}
	}
}

impl std::fmt::Display for HitType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.wire_value())
	}
}

/// Error returned when parsing an unknown hit type string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown hit type: {0}")]
pub struct ParseHitTypeError(String);

impl std::str::FromStr for HitType {
	type Err = ParseHitTypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"pageview" => Ok(HitType::Pageview),
			"appview" => Ok(HitType::Appview),
			"event" => Ok(HitType::Event),
			"item" => Ok(HitType::Item),
			"transaction" => Ok(HitType::Transaction),
			"social" => Ok(HitType::Social),
			"timing" => Ok(HitType::Timing),
			"exception" => Ok(HitType::Exception),
			other => Err(ParseHitTypeError(other.to_string())),
		}
	}
}
