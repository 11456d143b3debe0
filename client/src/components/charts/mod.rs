//! Dashboard chart widgets, rendered as plain inline SVG.
//!
//! Each container fetches its aggregate, falls back to built-in sample
//! data when the backend is unreachable, and hands the numbers to a small
//! presentational component. No charting library.

pub mod attendance;
pub mod count;
pub mod finance;
