//! Networking modules for the photo listing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the one-shot listing fetch and `types` defines the listing
//! schema shared with the server proxy.

pub mod api;
pub mod types;
