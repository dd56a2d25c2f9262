//! # Gather
//!
//! A **fluent collection library** for Rust: an ordered key-value container
//! with a chainable pipeline of transformation, query, grouping, set and
//! statistics operations, in the spirit of the collection utilities found in
//! dynamic-language ecosystems.
//!
//! ## Key Features
//!
//! - **Ordered container** - insertion order is iteration order and survives
//!   every non-reordering operation
//! - **Chainable pipeline** - filter, map, reduce, sort, group, pluck,
//!   set-like operations and statistics as plain method chains
//! - **Mixed keys** - integer array-index keys and string map keys coexist;
//!   appends auto-increment past the largest integer key
//! - **Dynamic values** - entries are [`serde_json::Value`] trees, so
//!   heterogeneous and nested data needs no schema
//! - **Dot-paths** - `"user.address.city"` field resolution with a `*`
//!   wildcard that fans out and collapses
//! - **Stable ordering** - every sort is explicitly stabilized; equal
//!   elements keep their original relative order
//! - **Extensions** - register named operations once, call them on any
//!   collection in the process
//! - **Serialization** - JSON views plus an envelope form that round-trips
//!   integer/string key identity
//!
//! ## Quick Start
//!
//! ```
//! use gather::Collection;
//! use serde_json::json;
//!
//! let orders = Collection::from(json!([
//!     {"product": "chair", "price": 120, "qty": 2},
//!     {"product": "desk",  "price": 480, "qty": 1},
//!     {"product": "lamp",  "price": 45,  "qty": 4},
//! ]));
//!
//! let affordable = orders
//!     .where_by("price", "<", &json!(200))
//!     .sort_by("price")
//!     .pluck("product");
//!
//! assert_eq!(affordable.to_value(), json!(["lamp", "chair"]));
//! assert_eq!(orders.sum_by("price"), 645.0);
//! ```
//!
//! ## Core Concepts
//!
//! ### Collection
//!
//! A [`Collection`] owns an ordered map from [`Key`] (integer or string) to
//! [`Value`]. Most operations are pure: they read the current entries and
//! build a new collection, leaving the receiver untouched. The documented
//! mutating subset (`push`, `pop`, `shift`, `pull`, `put`, `forget`,
//! `remove`, `prepend`, `splice`, `transform`) works in place and chains via
//! `&mut Self`.
//!
//! ### Construction
//!
//! Every accepted input shape is a [`Source`] variant with one explicit
//! conversion rule — sequences, keyed entries, other collections, JSON
//! values or text, single scalars, thunks. `From` impls cover the common
//! shapes:
//!
//! ```
//! use gather::Collection;
//! use serde_json::json;
//!
//! let from_array = Collection::from(json!([1, 2, 3]));
//! let from_object = Collection::from(json!({"a": 1, "b": 2}));
//! let from_nothing = Collection::new();
//! assert_eq!(from_nothing.len(), 0);
//! # let _ = (from_array, from_object);
//! ```
//!
//! ### Selectors
//!
//! Operations that look *into* entries (`sort_by`, `group_by`, `sum_by`,
//! `unique_by`, …) take a [`Selector`]: a dot-path string, or
//! [`Selector::func`] for computed lookups.
//!
//! ### Loose vs strict
//!
//! Like its dynamic-language ancestors, the library distinguishes loose
//! comparison (`1 == "1"`, see [`loose_eq`]) from strict structural
//! equality, and most membership/filter operations come in both flavors.
//!
//! ### Extensions
//!
//! [`Collection::extend`] registers a named closure in the process-wide
//! [`Registry`]; [`Collection::call`] invokes it with the receiver bound.
//! Unknown names fail with [`Error::UnknownOperation`].
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result`] with a typed [`Error`]. Direct
//! `c[key]` indexing panics on absent keys with the missing-key message;
//! [`Collection::get`] and [`Collection::get_or`] are the total
//! alternatives. Nothing is retried or recovered internally.
//!
//! ## Module Overview
//!
//! - [`collection`] - the core container and element access
//! - [`ops`] (flattened into inherent methods) - the operation families:
//!   queries, filtering, transforms, statistics, ordering, grouping, set
//!   algebra, mutation
//! - [`path`] - dot-path resolution and selectors
//! - [`registry`] - the process-wide extension registry
//! - [`source`] - construction inputs and normalization
//! - [`value`] - truthiness, loose equality and the total value order

pub mod collection;
pub mod error;
pub mod key;
pub mod ops;
pub mod path;
pub mod registry;
pub mod serial;
pub mod source;
pub mod value;

mod rng;

// General re-exports
pub use collection::Collection;
pub use error::{Error, Result};
pub use key::Key;
pub use ops::CmpOp;
pub use path::{Selector, resolve as resolve_path};
pub use registry::{ExtensionFn, Registry};
pub use source::Source;
pub use value::{Value, is_truthy, loose_cmp, loose_eq, value_cmp};
