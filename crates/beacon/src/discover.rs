// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Default-hit parameter discovery.
//!
//! A discoverer runs once at client construction and backfills default-hit
//! fields the host did not set. It never overrides a non-empty value.

use beacon_core::{Hit, Param};

/// Populates environment-derived fields on the default hit.
pub trait ParameterDiscoverer: Send + Sync {
	/// Backfills empty fields on `defaults`.
	fn discover(&self, defaults: &mut Hit);
}

/// Discoverer reading from process environment variables.
///
/// Fills document encoding, user language (from `LC_ALL`/`LANG`, e.g.
/// `en_US.UTF-8` becomes `en-us`) and the document host name when
/// `HOSTNAME` is set.
#[derive(Debug, Default)]
pub struct EnvironmentDiscoverer;

impl ParameterDiscoverer for EnvironmentDiscoverer {
	fn discover(&self, defaults: &mut Hit) {
		backfill(defaults, Param::DocumentEncoding, || {
			Some("UTF-8".to_string())
		});
		backfill(defaults, Param::UserLanguage, || {
			std::env::var("LC_ALL")
				.or_else(|_| std::env::var("LANG"))
				.ok()
				.and_then(|locale| normalize_locale(&locale))
		});
		backfill(defaults, Param::DocumentHostName, || {
			std::env::var("HOSTNAME").ok().filter(|h| !h.is_empty())
		});
	}
}

fn backfill(defaults: &mut Hit, param: Param, value: impl FnOnce() -> Option<String>) {
	let current = defaults.param(param);
	if current.is_none_or(str::is_empty) {
		if let Some(discovered) = value() {
			defaults.set(param, discovered);
		}
	}
}

/// Turns a POSIX locale like `en_US.UTF-8` into the wire form `en-us`.
fn normalize_locale(locale: &str) -> Option<String> {
	let base = locale.split('.').next().unwrap_or(locale);
	if base.is_empty() || base == "C" || base == "POSIX" {
		return None;
	}
	Some(base.replace('_', "-").to_ascii_lowercase())
}
