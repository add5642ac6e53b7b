//! Card Cost API
//!
//! A small HTTP service managing per-country card transaction cost records
//! and resolving payment card numbers to those costs via an external BIN
//! lookup service.
//!
//! # Architecture
//!
//! The crate follows an onion layout:
//!
//! - **Domain**: the `CardCost` record and the error taxonomy
//! - **Application**: payload validation, CRUD orchestration, and the
//!   payment cost resolution engine
//! - **Infrastructure**: configuration, the record store (trait + in-memory
//!   implementation with optimistic locking), and the BIN lookup client
//! - **API**: axum routes, handlers, DTOs and domain-to-HTTP error mapping
//!
//! Dependencies flow inward only; the application layer sees the record
//! store and lookup client exclusively through traits, wired explicitly at
//! startup.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
