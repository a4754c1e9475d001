//! Marker-based text block patching.
//!
//! A patch locates a textual anchor in a document and edits around it. There
//! is no understanding of the document's language: markers are substrings (or
//! regular expressions) and the first match always wins.
//!
//! # Operations
//!
//! - [`insert_line_before`] inserts one line in front of the first line the
//!   marker matches.
//! - [`replace_span`] replaces everything from the first start-marker match up
//!   to the next end-marker match. The end marker itself is kept unless the
//!   span is [`EndBound::Inclusive`].
//!
//! Both are pure functions over `&str`. [`Patcher`] wraps them in a
//! read-locate-transform-write cycle against a file, and [`PatchPlan`] runs a
//! sequence of such edits described in a TOML, JSON or YAML file.
//!
//! ```
//! use patch_core::{EndBound, Marker, replace_span};
//!
//! let patched = replace_span(
//!     "AAAxxxBBByyy",
//!     &Marker::literal("xxx"),
//!     &Marker::literal("yyy"),
//!     "ZZZ",
//!     EndBound::Exclusive,
//! )
//! .unwrap();
//! assert_eq!(patched.content, "AAAZZZyyy");
//! ```

pub mod diff;
pub mod error;
pub mod insert;
pub mod marker;
pub mod patcher;
pub mod plan;
pub mod span;

pub use diff::{DiffStat, unified_diff};
pub use error::{Error, MarkerRole, Result};
pub use insert::insert_line_before;
pub use marker::Marker;
pub use patcher::{Location, PatchOp, PatchOptions, PatchReport, Patched, Patcher, patch_file};
pub use plan::{PatchPlan, PlanStep, StepAction};
pub use span::{EndBound, locate_span, replace_span};
