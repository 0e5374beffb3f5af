//! # verparse
//!
//! A library for parsing free-form version strings and ordering them.
//!
//! Instead of insisting on one versioning scheme, this library reads whatever it can out of a
//! version string (`1.5.2`, `v2.0.0-rc1`, `4.0 SP2`, ...) into six components, and packs those
//! into a single integer that totally orders versions.
//!
//! ## Examples
//!
//! Compare versions of inconsistent format:
//!
//! ```
//! use verparse::prelude::*;
//!
//! let installed = Version::parse("v2.0.0-rc1");
//! let available = Version::parse("2.0 final");
//! assert!(available.greater(&installed).unwrap());
//! assert!(installed < available);
//!
//! // trailing zeros don't matter
//! assert_eq!(Version::parse("1.0"), Version::parse("1.0.0"));
//! ```
//!
//! Derive the next version:
//!
//! ```
//! use verparse::prelude::*;
//!
//! let version = Version::parse("1.4.9-beta2");
//! let next = version.next(&Level::Minor).unwrap();
//! assert_eq!("1.5", next.to_string());
//! assert!(next > version);
//! ```
//!
//! ## Important Terms
//!
//! - **Component**: One of the six ordered fields of a version: *major*, *minor*, *maintenance*,
//!   *build*, *state* and *substate*. Modeled by [`Component`].
//! - **State**: A release state like `alpha`, `rc` or `sp`, read from the letters after the
//!   numbers. Modeled by [`State`]. Versions store a [scaled](State::scaled) state value.
//! - **Canonical integer**: The 48-bit key that packs all six components, 8 bits each, most
//!   significant first. Versions compare by this key. See [`encoding`].
//!
//! ## Grammar
//!
//! ```text
//! [v] MAJOR [.] [MINOR] [.] [MAINTENANCE] [.] [BUILD] [.] [-| ] [STATE] [-| ] [SUBSTATE]
//! ```
//!
//! Only the major number is required, and text after the match is ignored. Matching is
//! case-insensitive. By default parsing is permissive: anything that can't be read is zero. See
//! [`ParseMode`] and [`Version::parse_strict`] for strict parsing.
//!
//! ## States
//!
//! | State | Tokens | Scaled value |
//! |---|---|---|
//! | [`State::Development`] | `dev`, `development`, no state, or unknown | 0 |
//! | [`State::Alpha`] | `alpha`, `alpha2` | 36 |
//! | [`State::Beta`] | `beta`, `beta2` | 73 |
//! | [`State::ReleaseCandidate`] | `rc`, `rc2`, `release candidate` | 109 |
//! | [`State::Final`] | `final`, `stable`, `0`, a single letter (`u` included) | 146 |
//! | [`State::Update`] | `u2`, `update`, `update2` | 182 |
//! | [`State::ServicePack`] | `sp`, `sp2`, `service pack` | 219 |
//!
//! ## Features
//!
//! - `tracing` (default): emits [tracing](https://docs.rs/tracing) events when input falls back to
//!   defaults or can't be encoded. No subscriber is installed.
//!
//! ## Prelude
//!
//! verparse provides a prelude module for convenience. It contains everything needed to interact
//! with the library.
//!
//! Use it with:
//!
//! ```
//! use verparse::prelude::*;
//! ```
#![warn(missing_docs)]

mod builder;
mod component;
pub mod encoding;
mod error;
mod grammar;
mod state;
mod version;

pub use crate::builder::VersionBuilder;
pub use crate::component::{Component, Level};
pub use crate::encoding::Components;
pub use crate::error::VersionError;
pub use crate::grammar::is_valid_version_string;
pub use crate::state::State;
pub use crate::version::{ParseMode, Version};

/// A convenience module appropriate for glob imports (`use verparse::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::is_valid_version_string;
    #[doc(no_inline)]
    pub use crate::Component;
    #[doc(no_inline)]
    pub use crate::Components;
    #[doc(no_inline)]
    pub use crate::Level;
    #[doc(no_inline)]
    pub use crate::ParseMode;
    #[doc(no_inline)]
    pub use crate::State;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::VersionBuilder;
    #[doc(no_inline)]
    pub use crate::VersionError;
}
