//! Shibboleth provider adapter for OAuth/OIDC clients talking to a Cognito user pool that
//! bridges an institutional Shibboleth SSO.
//!
//! The stock Cognito driver drops the custom attributes released by Shibboleth. This crate
//! builds a [`provider::ProviderDescriptor`] for the bridge and maps raw ID-token claims into a
//! [`profile::ShibbolethProfile`] that keeps them.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod error;
pub mod obs;
pub mod profile;
pub mod provider;

pub use profile::{ShibbolethProfile, parse_affiliation};
pub use provider::{ProviderDescriptor, ProviderOptions, shibboleth_provider};

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use oauth2;
pub use url;
#[cfg(test)] use color_eyre as _;
