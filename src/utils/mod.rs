//! Request helpers shared by the HTTP layers.
//!
//! - [`client_ip`] - Visitor address resolution from proxy headers
//! - [`cookies`] - Cookie header lookup

pub mod client_ip;
pub mod cookies;
