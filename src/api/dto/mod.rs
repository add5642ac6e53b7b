//! Request and response DTOs for the HTTP surface.

pub mod requests;
pub mod responses;
