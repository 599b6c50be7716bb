//! HTTP request handlers

pub mod common;
pub mod health;
pub mod inputs;
pub mod page;
pub mod route;
pub mod sessions;
