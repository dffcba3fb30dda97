//! Navigation logic for DuoFM.
//!
//! This module contains the pane navigation store ([`pane::PaneStore`] and
//! its observable [`pane::PaneState`]), back/forward [`history::History`],
//! per-path [`cursor::CursorMemory`], and the canonical listing
//! [`sort`] order.

pub mod cursor;
pub mod history;
pub mod pane;
pub mod sort;
