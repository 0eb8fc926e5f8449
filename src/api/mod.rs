//! API module - HTTP routes, handlers, pages and models

pub mod handlers;
pub mod models;
pub mod pages;
pub mod routes;
