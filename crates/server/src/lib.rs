//! Stylefront server library.
//!
//! This crate provides the storefront API as a library, allowing the router
//! to be assembled in-process for integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod search;
pub mod services;
pub mod state;
pub mod store;
