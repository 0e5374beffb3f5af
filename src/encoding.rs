//! Packing of the six version components into the canonical sort key.
//!
//! Every component gets a [BITS]-wide slot, most significant component first:
//!
//! ```text
//! | major | minor | maintenance | build | state | substate |
//!  47   40 39   32 31         24 23   16 15   8 7        0
//! ```
//!
//! Comparing two keys as integers is the same as comparing the components lexicographically, as
//! long as every component fits its slot. Components that don't fit are rejected rather than
//! masked, since masking would silently reorder versions.

use crate::{component::Component, error::VersionError};

/// Width in bits of each component's slot in the canonical key.
pub const BITS: u32 = 8;

/// The largest value a component can hold and still be encoded.
pub const COMPONENT_MAX: u32 = (1 << BITS) - 1;

/// The six components of a version, by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Components {
    /// The major part.
    pub major: u32,
    /// The minor part.
    pub minor: u32,
    /// The maintenance part.
    pub maintenance: u32,
    /// The build part.
    pub build: u32,
    /// The scaled state value.
    pub state: u32,
    /// The substate part.
    pub substate: u32,
}

impl Components {
    /// Returns the value of `component`.
    pub fn get(&self, component: Component) -> u32 {
        match component {
            Component::Major => self.major,
            Component::Minor => self.minor,
            Component::Maintenance => self.maintenance,
            Component::Build => self.build,
            Component::State => self.state,
            Component::Substate => self.substate,
        }
    }

    /// Returns a mutable reference to the value of `component`.
    pub(crate) fn get_mut(&mut self, component: Component) -> &mut u32 {
        match component {
            Component::Major => &mut self.major,
            Component::Minor => &mut self.minor,
            Component::Maintenance => &mut self.maintenance,
            Component::Build => &mut self.build,
            Component::State => &mut self.state,
            Component::Substate => &mut self.substate,
        }
    }

    /// Checks that every component fits its slot, reporting the most significant offender.
    pub fn validate(&self) -> Result<(), VersionError> {
        match Component::ALL
            .into_iter()
            .find(|&component| self.get(component) > COMPONENT_MAX)
        {
            Some(component) => Err(VersionError::ComponentOutOfRange {
                component,
                value: self.get(component),
                max: COMPONENT_MAX,
            }),
            None => Ok(()),
        }
    }
}

/// Packs `components` into the canonical key.
///
/// # Errors
///
/// - Returns [VersionError::ComponentOutOfRange] if a component exceeds [COMPONENT_MAX].
pub fn encode(components: &Components) -> Result<u64, VersionError> {
    if let Err(err) = components.validate() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Refusing to encode {components:?}: {err}");
        return Err(err);
    }

    let key = Component::ALL.into_iter().fold(0u64, |key, component| {
        (key << BITS) | components.get(component) as u64
    });
    Ok(key)
}

/// Unpacks a canonical key into its components. Bits above the six slots are ignored.
pub fn decode(key: u64) -> Components {
    let mut components = Components::default();
    let slots = Component::ALL.len() as u32;
    for component in Component::ALL {
        let shift = BITS * (slots - 1 - component.index() as u32);
        *components.get_mut(component) = ((key >> shift) & COMPONENT_MAX as u64) as u32;
    }
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[fixture]
    fn components() -> Components {
        Components {
            major: 1,
            minor: 2,
            maintenance: 3,
            build: 4,
            state: 5,
            substate: 6,
        }
    }

    #[rstest]
    fn test_encode_layout(components: Components) {
        assert_eq!(Ok(0x01_02_03_04_05_06), encode(&components));
    }

    #[test]
    fn test_encode_zero() {
        assert_eq!(Ok(0), encode(&Components::default()));
    }

    #[test]
    fn test_encode_max() {
        let components = decode(u64::MAX);
        assert_eq!(COMPONENT_MAX, components.major);
        assert_eq!(COMPONENT_MAX, components.substate);
        assert_eq!(Ok((1 << 48) - 1), encode(&components));
    }

    #[rstest]
    fn test_decode_inverts_encode(components: Components) {
        let key = encode(&components).unwrap();
        assert_eq!(components, decode(key));
    }

    #[rstest]
    #[case(Component::Major)]
    #[case(Component::Minor)]
    #[case(Component::Maintenance)]
    #[case(Component::Build)]
    #[case(Component::State)]
    #[case(Component::Substate)]
    fn test_out_of_range(components: Components, #[case] component: Component) {
        let mut components = components;
        *components.get_mut(component) = COMPONENT_MAX + 1;
        assert_eq!(
            Err(VersionError::ComponentOutOfRange {
                component,
                value: 256,
                max: 255
            }),
            encode(&components)
        );
    }

    #[test]
    fn test_most_significant_offender_is_reported() {
        let components = Components {
            minor: 300,
            build: 1000,
            ..Default::default()
        };
        assert!(matches!(
            encode(&components),
            Err(VersionError::ComponentOutOfRange {
                component: Component::Minor,
                value: 300,
                ..
            })
        ));
    }

    #[rstest]
    fn test_key_order_is_lexicographic(components: Components) {
        let mut bigger_minor = components;
        bigger_minor.minor += 1;
        let mut max_tail = components;
        max_tail.maintenance = COMPONENT_MAX;
        max_tail.build = COMPONENT_MAX;
        max_tail.state = COMPONENT_MAX;
        max_tail.substate = COMPONENT_MAX;
        assert!(encode(&bigger_minor).unwrap() > encode(&max_tail).unwrap());
    }
}
