// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The result of posting one hit.

use std::collections::BTreeMap;

/// Outcome of a single post, returned to the caller for inspection.
///
/// A missing status code means the call never completed at the network
/// layer: the client was disabled or closed, or the transport failed.
/// Callers who care about delivery must check [`Response::was_sent`];
/// nothing else signals failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
	status: Option<u16>,
	posted: BTreeMap<String, String>,
}

impl Response {
	/// A response for a post that was skipped entirely.
	pub(crate) fn empty() -> Self {
		Self::default()
	}

	/// A response for a post that reached the endpoint.
	pub(crate) fn sent(status: u16, posted: BTreeMap<String, String>) -> Self {
		Self {
			status: Some(status),
			posted,
		}
	}

	/// A response for a post whose transport failed after merging.
	pub(crate) fn unsent(posted: BTreeMap<String, String>) -> Self {
		Self {
			status: None,
			posted,
		}
	}

	/// HTTP status code, when the request reached the endpoint.
	pub fn status(&self) -> Option<u16> {
		self.status
	}

	/// The flat parameter map that was (or would have been) transmitted.
	pub fn posted_params(&self) -> &BTreeMap<String, String> {
		&self.posted
	}

	/// True when the hit reached the endpoint and a status came back.
	pub fn was_sent(&self) -> bool {
		self.status.is_some()
	}
}
