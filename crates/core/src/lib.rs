//! Core library for the ifpa client
//!
//! This crate implements the **Functional Core** of the ifpa client,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The ifpa project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`ifpa_core`** (this crate): Pure data types and decisions with zero I/O
//! - **`ifpa`**: Transport, query builders, page traversal and the CLI (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`params`]: The ordered Parameter Set a query builder carries and its query-string form
//! - [`envelope`]: Known response envelope shapes and the item extractor
//! - [`pagination`]: Cursor arithmetic, page termination and result bounds
//! - [`error`]: The error taxonomy shared by the whole client
//! - [`models`]: Response models for each remote resource family
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use ifpa_core::envelope::{extract_items, RawPage};
//!
//! let page: RawPage<u64> = serde_json::from_str(r#"{"search": [1, 2, 3]}"#)?;
//! assert_eq!(extract_items(page), vec![1, 2, 3]);
//! ```

pub mod envelope;
pub mod error;
pub mod models;
pub mod pagination;
pub mod params;

pub use error::{ApiError, Error, ErrorKind, Result};
