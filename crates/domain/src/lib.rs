//! # registry-domain
//!
//! Pure domain model for the student registry service.
//!
//! ## Responsibilities
//! - Foundational types: the typed [`StudentId`](id::StudentId) identifier
//!   and error conventions
//! - Define the **Student** record and its invariants
//! - Define the **StudentPatch** partial-update value
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod student;
