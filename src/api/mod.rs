//! API layer: HTTP routes, handlers, DTOs and error translation.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
