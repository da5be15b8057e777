//! # registry-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON REST API for student records
//!   (`/student/{id}`, `/students`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses and status codes
//!   (200/201/204/400/404/409)
//!
//! ## Dependency rule
//! Depends on `registry-app` (for the port trait and service) and
//! `registry-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
