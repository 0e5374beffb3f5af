use crate::component::Component;

/// Errors raised when a version cannot be encoded, derived, or strictly parsed.
///
/// Permissive parsing ([Version::parse](crate::Version::parse)) never produces these: malformed
/// input just defaults its missing components to zero.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// A component does not fit its slot in the canonical key. Encoding it anyway would corrupt
    /// the ordering, so it is rejected instead of truncated.
    #[error("Component `{component}` has value `{value}`, which exceeds the maximum of `{max}`")]
    ComponentOutOfRange {
        /// The offending component.
        component: Component,
        /// Its value.
        value: u32,
        /// The largest value the component can hold.
        max: u32,
    },

    /// Incrementing a component overflowed its integer type.
    #[error("Incrementing component `{component}` overflowed")]
    Overflow {
        /// The component that was being incremented.
        component: Component,
    },

    /// In strict mode, the input should start with the major number (optionally prefixed with
    /// `v`).
    #[error("Version string `{input}` should start with a major number")]
    MissingMajor {
        /// The version string.
        input: String,
    },

    /// In strict mode, the whole input should be consumed by the version grammar.
    #[error("Version string `{input}` has unexpected trailing text `{remainder}` at offset {offset}")]
    TrailingInput {
        /// The version string.
        input: String,
        /// Byte offset where the unmatched text starts.
        offset: usize,
        /// The unmatched text.
        remainder: String,
    },

    /// In strict mode, the state token should be one of the known states.
    #[error("Unknown state `{token}`")]
    UnknownState {
        /// The unrecognized token.
        token: String,
    },
}
