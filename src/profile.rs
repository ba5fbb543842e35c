//! ID-token claims, the affiliation parser, and profile mappers.

pub mod affiliation;
pub mod claims;
pub mod mapper;

pub use affiliation::*;
pub use claims::*;
pub use mapper::*;
