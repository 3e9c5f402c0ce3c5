// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Merges the client's default hit with a per-call hit into the flat
//! string map that gets posted.
//!
//! Two different override rules apply, and the asymmetry is intentional:
//! named parameters fall back to the default only when the hit's own value
//! is empty or absent, while custom dimensions and metrics always take the
//! hit's value on an index collision, even an empty one.

use std::collections::BTreeMap;

use crate::hit::Hit;

/// Produces the posted-parameter map for one hit.
///
/// Neither input is mutated; the result is built fresh on every call.
/// Emptiness means absent or zero-length. A parameter that is empty in
/// both inputs is emitted as the hit's empty string when the hit carries
/// it, and omitted entirely when only the default does.
pub fn merge(defaults: &Hit, hit: &Hit) -> BTreeMap<String, String> {
	let mut posted = BTreeMap::new();

	for (param, value) in hit.params() {
		posted.insert(param.wire_name().to_string(), value.clone());
	}

	for (param, fallback) in defaults.params() {
		if fallback.is_empty() {
			continue;
		}
		if hit.param(*param).is_none_or(str::is_empty) {
			posted.insert(param.wire_name().to_string(), fallback.clone());
		}
	}

	for (index, value) in defaults.custom_dimensions() {
		posted.insert(format!("cd{index}"), value.clone());
	}
	for (index, value) in hit.custom_dimensions() {
		posted.insert(format!("cd{index}"), value.clone());
	}

	for (index, value) in defaults.custom_metrics() {
		posted.insert(format!("cm{index}"), value.clone());
	}
	for (index, value) in hit.custom_metrics() {
		posted.insert(format!("cm{index}"), value.clone());
	}

	posted
}
