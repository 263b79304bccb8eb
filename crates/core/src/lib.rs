//! Stylefront Core - Shared types library.
//!
//! This crate provides the domain types shared between the server and the
//! integration tests:
//!
//! - [`Email`] - validated, lowercased user identity
//! - [`ProductId`] - string-typed product identity
//! - [`Product`] / [`CartItem`] - the catalog and cart data model
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
