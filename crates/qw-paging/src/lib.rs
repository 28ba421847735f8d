#![forbid(unsafe_code)]

//! Pagination window computation for QuoteWeave.
//!
//! Every listing page (quotes, collections, tags) renders the same kind of
//! pagination control: first page, last page, a window of pages around the
//! current one, and ellipses for whatever is elided. This crate is the
//! single source of truth for that computation, replacing the per-page
//! copies that had drifted apart.
//!
//! - [`plan`] turns `(current_page, total_pages, surrounding)` into an
//!   ordered sequence of [`PageMarker`]s.
//! - [`parse_page_number`] coerces the raw route segment into a usable
//!   page number before it reaches the planner.
//! - [`Pager`] holds a normalized pagination position and drives
//!   Previous/Next navigation and item offsets.
//!
//! The crate is pure: no I/O, no shared state, safe to call from any
//! number of rendering contexts concurrently.

pub mod pager;
pub mod parse;
pub mod plan;

pub use pager::{DEFAULT_PAGE_SIZE, Pager, page_count, page_offset};
pub use parse::parse_page_number;
pub use plan::{PageMarker, PlanError, plan, plan_clamped};
