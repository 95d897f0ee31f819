//! Version negotiation - semantic versions and the compatibility rule
//!
//! The compatibility rule is deliberately two-sided: the client must be
//! acceptable to the server, and the server must satisfy any minimum the
//! client declares. Collapsing it into an equality check loses both halves.

pub mod acceptance;
pub mod api_version;

pub use acceptance::*;
pub use api_version::*;
