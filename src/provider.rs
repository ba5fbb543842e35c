//! Provider-facing descriptors (data), caller options, and the Shibboleth factory.
//!
//! `descriptor` exposes [`ProviderDescriptor`], the read-only record a host OAuth client keeps
//! for the process lifetime. `options` holds the caller-supplied client configuration that is
//! passed through untouched, and `shibboleth` wires both into the fixed bridge configuration.

pub mod descriptor;
pub mod id;
pub mod options;
pub mod shibboleth;

pub use descriptor::*;
pub use id::*;
pub use options::*;
pub use shibboleth::*;
