//! # Stocky Architecture
//!
//! Stocky is a **UI-agnostic inventory-tracking library** with a CLI client.
//! The CLI is a thin shell; every rule lives in the library so the same core
//! could back any other front end.
//!
//! ## Layers
//!
//! ```text
//! CLI (main.rs + args.rs)      argument parsing, terminal output, exit codes
//!   └── API (api.rs)           thin facade, input normalization
//!         └── Commands         the screens' logic: validation, add/list/
//!             (commands/*.rs)  edit/delete flows, structured results
//!               ├── Inventory  canonical collection; read-full, compute,
//!               │   (inventory.rs)  write-full over the blob store
//!               ├── Query      pure filter/sort derivation of the
//!               │   (query.rs) displayed list
//!               └── Storage    BlobStore trait; FileStore (production),
//!                   (store/)   InMemoryStore (testing)
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments, returns plain
//! `Result<CmdResult>` values, and never touches stdout, stderr, or
//! `std::process::exit`.
//!
//! ## The Handle System
//!
//! Items carry stable UUID ids at the storage level; the CLI shows 1-based
//! handles assigned against the full insertion-ordered collection, so a
//! handle printed by a filtered list still refers to the same item.
//!
//! ## Testing Strategy
//!
//! - **Commands** (`commands/*.rs`): unit tests of the flows against
//!   `InMemoryStore`. The lion's share of testing.
//! - **Inventory and query** (`inventory.rs`, `query.rs`): unit tests of the
//!   collection contract and the view derivation.
//! - **Integration** (`tests/`): `FileStore` round-trips through a temp dir
//!   and end-to-end binary runs.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod model;
pub mod query;
pub mod store;
