use crate::{
    builder::VersionBuilder,
    component::{Component, Level},
    encoding::{decode, encode, Components},
    error::VersionError,
    grammar::{digits_value, match_version, Captures},
    state::State,
};
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};

/// How strictly a version string is parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Never fails. Whatever the grammar can't find defaults to zero, unknown states classify as
    /// [State::Development], and trailing text is ignored.
    #[default]
    Permissive,

    /// Fails if the input doesn't start with a major number, has text the grammar doesn't match,
    /// has an unknown state, or has a component that can't be encoded.
    Strict,
}

/// Renders the first `depth` numeric components, joined by dots.
fn dotted_string(components: &Components, depth: usize) -> String {
    let mut dotted = String::new();
    for (idx, component) in Component::ALL[..depth.clamp(1, 4)].iter().enumerate() {
        if idx > 0 {
            dotted.push('.');
        }
        dotted.push_str(&components.get(*component).to_string());
    }
    dotted
}

/// Number of numeric components needed to render `components` without trailing zeros. Always at
/// least one, for the major.
fn trimmed_depth(components: &Components) -> usize {
    Component::ALL[..4]
        .iter()
        .rposition(|component| components.get(*component) != 0)
        .map_or(1, |idx| idx + 1)
}

/// A version parsed from a free-form string like `1.5.2`, `v2.0.0-rc1` or `3.1 SP2`.
///
/// A Version is made of six components, from most to least significant: *major*, *minor*,
/// *maintenance*, *build*, *state* and *substate*. The state is stored as its
/// [scaled value](State::scaled). The string the version was parsed from is kept verbatim and is
/// what [Display] renders.
///
/// Versions are ordered by their [canonical integer](Version::canonical_integer), which packs the
/// six components into one key. This only works while every component fits its 8-bit slot, so all
/// comparisons are fallible. The [PartialOrd] and [PartialEq] impls treat versions that can't be
/// encoded as incomparable.
///
/// Versions are immutable. Use a [VersionBuilder] (e.g. from [Version::to_builder]) to set
/// components individually.
///
/// # Examples
///
/// ```
/// use verparse::prelude::*;
///
/// let cur = Version::parse("1.4.9-beta2");
/// assert_eq!(2, cur.substate());
/// assert_eq!(Some(State::Beta), cur.state_kind());
///
/// let next = cur.next_minor().unwrap();
/// assert_eq!("1.5", next.to_dotted_string());
/// assert!(next.greater(&cur).unwrap());
/// assert!(cur < next);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Version {
    components: Components,
    original: String,
}

impl Version {
    /// Parses `input` permissively. This never fails: components the grammar can't find are zero,
    /// so e.g. `""` and `"garbage"` both parse to an all-zero version.
    ///
    /// ```
    /// use verparse::Version;
    ///
    /// let version = Version::parse("v2.0.1-rc1");
    /// assert_eq!((2, 0, 1, 0), (version.major(), version.minor(), version.maintenance(), version.build()));
    /// assert_eq!(Version::parse("1.0"), Version::parse("1.0.0"));
    /// assert_eq!(Ok(0), Version::parse("garbage").canonical_integer());
    /// ```
    pub fn parse(input: &str) -> Self {
        let captures = match_version(input);

        #[cfg(feature = "tracing")]
        if captures.is_none() {
            tracing::debug!("Version string `{input}` has no major number, defaulting to zero");
        }

        Self::from_captures(input, captures)
    }

    /// Parses `input` strictly.
    ///
    /// ```
    /// use verparse::{Version, VersionError};
    ///
    /// assert!(Version::parse_strict("1.2.3-beta2").is_ok());
    /// assert!(matches!(
    ///     Version::parse_strict("1.2.3 (nightly)"),
    ///     Err(VersionError::TrailingInput { .. })
    /// ));
    /// ```
    ///
    /// # Errors
    ///
    /// - If `input` doesn't start with a major number, returns a [VersionError::MissingMajor].
    /// - If the grammar doesn't match all of `input`, returns a [VersionError::TrailingInput].
    /// - If the state isn't a known [State], returns a [VersionError::UnknownState].
    /// - If a component doesn't fit its slot in the canonical integer, returns a
    ///   [VersionError::ComponentOutOfRange].
    pub fn parse_strict(input: &str) -> Result<Self, VersionError> {
        let captures = match_version(input).ok_or_else(|| VersionError::MissingMajor {
            input: input.to_owned(),
        })?;

        if captures.end < input.len() {
            return Err(VersionError::TrailingInput {
                input: input.to_owned(),
                offset: captures.end,
                remainder: input[captures.end..].to_owned(),
            });
        }

        if let Some(token) = captures.state {
            if State::recognize(token).is_none() {
                return Err(VersionError::UnknownState {
                    token: token.to_owned(),
                });
            }
        }

        let version = Self::from_captures(input, Some(captures));
        version.components.validate()?;
        Ok(version)
    }

    /// Parses `input` with the given [ParseMode].
    ///
    /// # Errors
    ///
    /// Only in [ParseMode::Strict]. See [Version::parse_strict].
    pub fn parse_with(input: &str, mode: ParseMode) -> Result<Self, VersionError> {
        match mode {
            ParseMode::Permissive => Ok(Self::parse(input)),
            ParseMode::Strict => Self::parse_strict(input),
        }
    }

    fn from_captures(input: &str, captures: Option<Captures<'_>>) -> Self {
        let components = captures.map_or_else(Components::default, |captures| Components {
            major: digits_value(Some(captures.major)),
            minor: digits_value(captures.minor),
            maintenance: digits_value(captures.maintenance),
            build: digits_value(captures.build),
            state: State::classify(captures.state.unwrap_or_default()).scaled(),
            substate: digits_value(captures.substate),
        });

        #[cfg(feature = "tracing")]
        tracing::trace!("Parsed `{input}` into {components:?}");

        Self {
            components,
            original: input.to_owned(),
        }
    }

    /// Creates a version from already-known components. The original string is synthesized from
    /// them, e.g. `1.2-beta-3`, and parses back to the same components as long as the state is
    /// the scaled value of a [State].
    ///
    /// # Errors
    ///
    /// - If a component doesn't fit its slot in the canonical integer, returns a
    ///   [VersionError::ComponentOutOfRange].
    pub fn from_components(components: Components) -> Result<Self, VersionError> {
        components.validate()?;

        let mut original = dotted_string(&components, trimmed_depth(&components));
        if let Some(state) = State::from_scaled(components.state) {
            if state != State::Development {
                original.push_str(&format!("-{state}"));
            }
        }
        if components.substate > 0 {
            original.push_str(&format!("-{}", components.substate));
        }

        Ok(Self {
            components,
            original,
        })
    }

    /// Creates a version from a [canonical integer](Version::canonical_integer). Bits above the
    /// 48 bits of the key are ignored.
    ///
    /// ```
    /// use verparse::Version;
    ///
    /// let version = Version::parse("3.1.4-rc1");
    /// let key = version.canonical_integer().unwrap();
    /// assert_eq!(version, Version::from_canonical(key));
    /// ```
    pub fn from_canonical(key: u64) -> Self {
        let components = decode(key);
        // decoded components always fit, so validation can't fail; fall back to zero regardless
        Self::from_components(components).unwrap_or_default()
    }

    /// Returns a [VersionBuilder] seeded with this version's components.
    pub fn to_builder(&self) -> VersionBuilder {
        VersionBuilder::from(self.components)
    }

    /// The major component.
    pub fn major(&self) -> u32 {
        self.components.major
    }

    /// The minor component.
    pub fn minor(&self) -> u32 {
        self.components.minor
    }

    /// The maintenance component.
    pub fn maintenance(&self) -> u32 {
        self.components.maintenance
    }

    /// The build component.
    pub fn build(&self) -> u32 {
        self.components.build
    }

    /// The scaled state value. See [Version::state_kind] for the [State] itself.
    pub fn state(&self) -> u32 {
        self.components.state
    }

    /// The substate component.
    pub fn substate(&self) -> u32 {
        self.components.substate
    }

    /// The value of `component`.
    pub fn get(&self, component: Component) -> u32 {
        self.components.get(component)
    }

    /// All six components.
    pub fn components(&self) -> &Components {
        &self.components
    }

    /// The [State] whose scaled value is this version's state, if any.
    pub fn state_kind(&self) -> Option<State> {
        State::from_scaled(self.components.state)
    }

    /// The string this version was parsed from, verbatim.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Packs the six components into the key that orders versions. See
    /// [encode](crate::encoding::encode).
    ///
    /// # Errors
    ///
    /// - If a component doesn't fit in 8 bits, returns a [VersionError::ComponentOutOfRange].
    pub fn canonical_integer(&self) -> Result<u64, VersionError> {
        encode(&self.components)
    }

    /// Compares the canonical integers of two versions.
    ///
    /// # Errors
    ///
    /// - If either version has a component that doesn't fit in 8 bits, returns a
    ///   [VersionError::ComponentOutOfRange].
    pub fn compare(&self, other: &Version) -> Result<Ordering, VersionError> {
        Ok(self.canonical_integer()?.cmp(&other.canonical_integer()?))
    }

    /// Returns whether both versions have the same canonical integer. See [Version::compare].
    pub fn equals(&self, other: &Version) -> Result<bool, VersionError> {
        self.compare(other).map(Ordering::is_eq)
    }

    /// Returns whether this version's canonical integer is greater. See [Version::compare].
    pub fn greater(&self, other: &Version) -> Result<bool, VersionError> {
        self.compare(other).map(Ordering::is_gt)
    }

    /// Returns whether this version's canonical integer is lower. See [Version::compare].
    pub fn lower(&self, other: &Version) -> Result<bool, VersionError> {
        self.compare(other).map(Ordering::is_lt)
    }

    /// Returns a new version where the component of `level` is incremented, more significant
    /// components are kept, and all less significant ones (including state and substate) are
    /// reset to zero. The new version's original string is its dotted form, e.g. `1.5` for the
    /// next minor of `1.4.9-beta`.
    ///
    /// ```
    /// use verparse::{Level, Version};
    ///
    /// let version = Version::parse("1.2.3.4-rc1");
    /// assert_eq!("2", version.next(&Level::Major).unwrap().original());
    /// assert_eq!("1.3", version.next(&Level::Minor).unwrap().original());
    /// assert_eq!("1.2.4", version.next(&Level::Maintenance).unwrap().original());
    /// assert_eq!("1.2.3.5", version.next(&Level::Build).unwrap().original());
    /// ```
    ///
    /// # Errors
    ///
    /// - If the new version has a component that doesn't fit in 8 bits, returns a
    ///   [VersionError::ComponentOutOfRange].
    /// - If the incremented component overflows a `u32`, returns a [VersionError::Overflow].
    pub fn next(&self, level: &Level) -> Result<Self, VersionError> {
        let component = level.component();
        let mut components = self.components;
        let value = components.get_mut(component);
        *value = value
            .checked_add(1)
            .ok_or(VersionError::Overflow { component })?;

        let next = Self::parse(&dotted_string(&components, level.depth()));
        next.components.validate()?;
        Ok(next)
    }

    /// [Self::next] with [Level::Major].
    pub fn next_major(&self) -> Result<Self, VersionError> {
        self.next(&Level::Major)
    }

    /// [Self::next] with [Level::Minor].
    pub fn next_minor(&self) -> Result<Self, VersionError> {
        self.next(&Level::Minor)
    }

    /// [Self::next] with [Level::Maintenance].
    pub fn next_maintenance(&self) -> Result<Self, VersionError> {
        self.next(&Level::Maintenance)
    }

    /// [Self::next] with [Level::Build].
    pub fn next_build(&self) -> Result<Self, VersionError> {
        self.next(&Level::Build)
    }

    /// Renders the major, minor, maintenance and build components with dots, leaving out trailing
    /// zeros. State and substate are never included.
    ///
    /// ```
    /// use verparse::Version;
    ///
    /// assert_eq!("1.2.3", Version::parse("1.2.3").to_dotted_string());
    /// assert_eq!("1", Version::parse("1.0.0").to_dotted_string());
    /// assert_eq!("1.0.0.4", Version::parse("v1.0.0.4-beta").to_dotted_string());
    /// ```
    pub fn to_dotted_string(&self) -> String {
        dotted_string(&self.components, trimmed_depth(&self.components))
    }

    /// Renders the numeric components with dots, from major through `level`, zeros included.
    pub fn to_dotted_string_through(&self, level: &Level) -> String {
        dotted_string(&self.components, level.depth())
    }
}

impl PartialEq for Version {
    /// Versions are equal if their canonical integers are. Versions that can't be encoded are
    /// not equal to anything, themselves included.
    fn eq(&self, other: &Self) -> bool {
        self.compare(other).is_ok_and(Ordering::is_eq)
    }
}

impl PartialOrd for Version {
    /// Returns `None` if either version can't be encoded.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl Display for Version {
    /// Renders the original string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl From<&str> for Version {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl From<String> for Version {
    fn from(input: String) -> Self {
        let mut version = Self::parse(&input);
        version.original = input;
        version
    }
}

impl FromStr for Version {
    type Err = VersionError;

    /// Parses strictly. Use [Version::parse] or [From] for permissive parsing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}
