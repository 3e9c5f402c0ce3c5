// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the beacon analytics client.
//!
//! This crate holds the wire-parameter model, the hit builder, and the
//! merge engine that flattens a default hit plus a per-call hit into the
//! posted form body. It has no I/O; the HTTP side lives in the `beacon`
//! crate.

mod hit;
mod hit_type;
mod merge;
mod param;

pub use hit::Hit;
pub use hit_type::{HitType, ParseHitTypeError};
pub use merge::merge;
pub use param::Param;
