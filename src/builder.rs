use crate::{
    component::Component,
    encoding::{encode, Components},
    error::VersionError,
    state::State,
    version::Version,
};

/// Builds a [Version] one component at a time.
///
/// Setters accept any `u32`. Ranges are only checked when the builder is encoded or
/// [built](VersionBuilder::build), so a half-built version is never compared by accident.
///
/// ```
/// use verparse::prelude::*;
///
/// let version = VersionBuilder::new()
///     .set_major(1)
///     .set_minor(2)
///     .set_state_kind(State::ReleaseCandidate)
///     .set_substate(1)
///     .build()
///     .unwrap();
/// assert_eq!(Version::parse("1.2-rc1"), version);
///
/// let too_big = Version::parse("1.2").to_builder().set_minor(256).build();
/// assert!(matches!(too_big, Err(VersionError::ComponentOutOfRange { .. })));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionBuilder {
    components: Components,
}

impl VersionBuilder {
    /// Returns a builder with all components zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `component` to `value`.
    pub fn set(&mut self, component: Component, value: u32) -> &mut Self {
        *self.components.get_mut(component) = value;
        self
    }

    /// Sets the major component.
    pub fn set_major(&mut self, value: u32) -> &mut Self {
        self.set(Component::Major, value)
    }

    /// Sets the minor component.
    pub fn set_minor(&mut self, value: u32) -> &mut Self {
        self.set(Component::Minor, value)
    }

    /// Sets the maintenance component.
    pub fn set_maintenance(&mut self, value: u32) -> &mut Self {
        self.set(Component::Maintenance, value)
    }

    /// Sets the build component.
    pub fn set_build(&mut self, value: u32) -> &mut Self {
        self.set(Component::Build, value)
    }

    /// Sets the state component to an already-scaled `value`. Prefer
    /// [VersionBuilder::set_state_kind], which scales a [State] for you.
    pub fn set_state(&mut self, value: u32) -> &mut Self {
        self.set(Component::State, value)
    }

    /// Sets the state component to the scaled value of `state`.
    pub fn set_state_kind(&mut self, state: State) -> &mut Self {
        self.set(Component::State, state.scaled())
    }

    /// Sets the substate component.
    pub fn set_substate(&mut self, value: u32) -> &mut Self {
        self.set(Component::Substate, value)
    }

    /// The current value of `component`.
    pub fn get(&self, component: Component) -> u32 {
        self.components.get(component)
    }

    /// The canonical integer the built version would have.
    ///
    /// # Errors
    ///
    /// - If a component doesn't fit in 8 bits, returns a [VersionError::ComponentOutOfRange].
    pub fn canonical_integer(&self) -> Result<u64, VersionError> {
        encode(&self.components)
    }

    /// Finishes the version. See [Version::from_components].
    ///
    /// # Errors
    ///
    /// - If a component doesn't fit in 8 bits, returns a [VersionError::ComponentOutOfRange].
    pub fn build(&self) -> Result<Version, VersionError> {
        Version::from_components(self.components)
    }
}

impl From<Components> for VersionBuilder {
    fn from(components: Components) -> Self {
        Self { components }
    }
}
