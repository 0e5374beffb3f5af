use core::{
    cmp::Ordering,
    fmt::{self, Display},
};

/// One of the six ordered fields of a [Version](crate::Version), from most to least significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// The major part of a version.
    Major,
    /// The minor part of a version.
    Minor,
    /// The maintenance part of a version (often called "patch").
    Maintenance,
    /// The build part of a version.
    Build,
    /// The scaled state value, e.g. the `beta` in `1.0-beta2`.
    State,
    /// The number following the state, e.g. the `2` in `1.0-beta2`.
    Substate,
}

impl Component {
    /// All components, most significant first.
    pub const ALL: [Component; 6] = [
        Component::Major,
        Component::Minor,
        Component::Maintenance,
        Component::Build,
        Component::State,
        Component::Substate,
    ];

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Maintenance => "maintenance",
            Component::Build => "build",
            Component::State => "state",
            Component::Substate => "substate",
        }
    }

    /// Position of this component in the packed key, counting from the most significant.
    pub(crate) fn index(&self) -> usize {
        match self {
            Component::Major => 0,
            Component::Minor => 1,
            Component::Maintenance => 2,
            Component::Build => 3,
            Component::State => 4,
            Component::Substate => 5,
        }
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A level that can be incremented to derive a new version: `major`, `minor`, `maintenance` or
/// `build`. Levels order by significance, so `Level::Major > Level::Build`.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Level {
    /// The major level. It is greater than all other levels.
    Major,
    /// The minor level. It is less than the major level and greater than the rest.
    Minor,
    /// The maintenance level. It is less than the major and minor levels and greater than the
    /// build level.
    Maintenance,
    /// The build level. It is less than all other levels.
    Build,
}

impl Level {
    /// All levels, most significant first.
    pub const ALL: [Level; 4] = [Level::Major, Level::Minor, Level::Maintenance, Level::Build];

    /// The component this level increments.
    pub fn component(&self) -> Component {
        match self {
            Level::Major => Component::Major,
            Level::Minor => Component::Minor,
            Level::Maintenance => Component::Maintenance,
            Level::Build => Component::Build,
        }
    }

    /// Number of dotted fields needed to render a version through this level.
    pub(crate) fn depth(&self) -> usize {
        self.component().index() + 1
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.component().name())
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        // reverse it so e.g. major > minor
        other.depth().cmp(&self.depth())
    }
}
