//! # registry-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that adapters must implement
//!   (driven/outbound port):
//!   - `StudentRepository` — CRUD for student rows
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `StudentService` — create, get, list, patch-update, delete, with
//!     the not-found and duplicate-id business rules
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `registry-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
