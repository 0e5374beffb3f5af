use crate::encoding::COMPONENT_MAX;
use core::fmt::{self, Display};

/// The release state of a version, like `alpha` or `rc`. States order by their position in
/// [State::TABLE]: `Development < Alpha < Beta < ReleaseCandidate < Final < Update < ServicePack`.
///
/// A parsed [Version](crate::Version) does not store the state itself but its
/// [scaled value](State::scaled), which spreads the states evenly over the range of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State {
    /// `development` or `dev`. Also the state of versions without (or with an unknown) state.
    Development,
    /// `alpha`, optionally followed by a number.
    Alpha,
    /// `beta`, optionally followed by a number.
    Beta,
    /// `rc` or `release candidate`, optionally followed by a number.
    ReleaseCandidate,
    /// `final`, `stable`, `0`, or a single letter. A lone `u` is final too, since this state is
    /// tested before [State::Update].
    Final,
    /// `update`, optionally followed by a number, or `u` followed by a number.
    Update,
    /// `sp` or `service pack`, optionally followed by a number.
    ServicePack,
}

/// Returns true if `token` is `word`, optionally followed by a number that may be separated by a
/// single space (e.g. `beta`, `beta2`, `beta 2`).
fn is_word_with_number(token: &str, word: &str) -> bool {
    let Some(rest) = token.strip_prefix(word) else {
        return false;
    };
    let digits = rest.strip_prefix(' ').unwrap_or(rest);
    rest.is_empty() || (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

impl State {
    /// The fixed precedence table, tested in order when classifying a token.
    pub const TABLE: [State; 7] = [
        State::Development,
        State::Alpha,
        State::Beta,
        State::ReleaseCandidate,
        State::Final,
        State::Update,
        State::ServicePack,
    ];

    /// Position of this state in [State::TABLE].
    pub fn ordinal(&self) -> u32 {
        match self {
            State::Development => 0,
            State::Alpha => 1,
            State::Beta => 2,
            State::ReleaseCandidate => 3,
            State::Final => 4,
            State::Update => 5,
            State::ServicePack => 6,
        }
    }

    /// The ordinal mapped proportionally into a component's range:
    /// `round(COMPONENT_MAX / TABLE.len() * ordinal)`.
    ///
    /// ```
    /// use verparse::State;
    ///
    /// let scaled: Vec<u32> = State::TABLE.iter().map(State::scaled).collect();
    /// assert_eq!(vec![0, 36, 73, 109, 146, 182, 219], scaled);
    /// ```
    pub fn scaled(&self) -> u32 {
        let count = Self::TABLE.len() as u32;
        // exact integer form of round(max * ordinal / count)
        (2 * COMPONENT_MAX * self.ordinal() + count) / (2 * count)
    }

    /// Inverse of [State::scaled]. Returns `None` if `value` is not the scaled value of any state.
    pub fn from_scaled(value: u32) -> Option<State> {
        Self::TABLE.into_iter().find(|state| state.scaled() == value)
    }

    /// Returns true if `token` (already lowercase) denotes this state.
    fn matches(&self, token: &str) -> bool {
        match self {
            State::Development => token == "development" || token == "dev",
            State::Alpha => is_word_with_number(token, "alpha"),
            State::Beta => is_word_with_number(token, "beta"),
            State::ReleaseCandidate => {
                is_word_with_number(token, "release candidate") || is_word_with_number(token, "rc")
            }
            State::Final => match token.as_bytes() {
                [b'0'] => true,
                [letter] => letter.is_ascii_lowercase(),
                _ => token == "final" || token == "stable",
            },
            State::Update => {
                is_word_with_number(token, "update") || is_word_with_number(token, "u")
            }
            State::ServicePack => {
                is_word_with_number(token, "sp")
                    || is_word_with_number(token, "service pack")
                    || is_word_with_number(token, "servicepack")
            }
        }
    }

    /// Finds the first state in [State::TABLE] that `token` denotes, ignoring case. Returns `None`
    /// for empty or unknown tokens.
    ///
    /// ```
    /// use verparse::State;
    ///
    /// assert_eq!(Some(State::ReleaseCandidate), State::recognize("RC2"));
    /// assert_eq!(Some(State::ServicePack), State::recognize("Service Pack 3"));
    /// assert_eq!(None, State::recognize("nightly"));
    /// ```
    pub fn recognize(token: &str) -> Option<State> {
        let token = token.to_ascii_lowercase();
        Self::TABLE.into_iter().find(|state| state.matches(&token))
    }

    /// Like [State::recognize], but empty or unknown tokens classify as [State::Development].
    pub fn classify(token: &str) -> State {
        Self::recognize(token).unwrap_or_else(|| {
            #[cfg(feature = "tracing")]
            if !token.is_empty() {
                tracing::debug!("Unknown state `{token}`, treating it as development");
            }
            State::Development
        })
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            State::Development => "dev",
            State::Alpha => "alpha",
            State::Beta => "beta",
            State::ReleaseCandidate => "rc",
            State::Final => "final",
            State::Update => "update",
            State::ServicePack => "sp",
        }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rstest::*;

    #[rstest]
    #[case("development", State::Development)]
    #[case("dev", State::Development)]
    #[case("alpha", State::Alpha)]
    #[case("alpha12", State::Alpha)]
    #[case("Alpha 1", State::Alpha)]
    #[case("beta", State::Beta)]
    #[case("BETA3", State::Beta)]
    #[case("rc", State::ReleaseCandidate)]
    #[case("rc1", State::ReleaseCandidate)]
    #[case("release candidate 2", State::ReleaseCandidate)]
    #[case("final", State::Final)]
    #[case("Stable", State::Final)]
    #[case("a", State::Final)]
    #[case("0", State::Final)]
    #[case("u", State::Final)]
    #[case("u7", State::Update)]
    #[case("update", State::Update)]
    #[case("sp", State::ServicePack)]
    #[case("sp1", State::ServicePack)]
    #[case("servicepack", State::ServicePack)]
    #[case("service pack 2", State::ServicePack)]
    fn test_recognize(#[case] token: &str, #[case] expected: State) {
        assert_eq!(Some(expected), State::recognize(token));
    }

    #[rstest]
    #[case("")]
    #[case("nightly")]
    #[case("beta-2")]
    #[case("alpha  1")]
    #[case("devel")]
    #[case("1")]
    fn test_unknown_defaults_to_development(#[case] token: &str) {
        assert_eq!(None, State::recognize(token));
        assert_eq!(State::Development, State::classify(token));
    }

    /// A bare letter is final, and final comes before update in the table, so only a `u` followed
    /// by a number is an update.
    #[test]
    fn test_bare_u_is_final() {
        assert_eq!(Some(State::Final), State::recognize("u"));
        assert_eq!(State::Final, State::classify("U"));
        assert_eq!(Some(State::Update), State::recognize("u1"));
        assert_eq!(Some(State::Update), State::recognize("u 1"));
    }

    #[test]
    fn test_ordinals_follow_table() {
        for (idx, state) in State::TABLE.iter().enumerate() {
            assert_eq!(idx as u32, state.ordinal());
        }
    }

    #[test]
    fn test_scaling_is_strictly_monotonic() {
        for (lower, higher) in State::TABLE.iter().tuple_windows() {
            assert!(lower.scaled() < higher.scaled());
            assert!(lower < higher);
        }
        assert!(State::ServicePack.scaled() <= COMPONENT_MAX);
    }

    #[test]
    fn test_from_scaled() {
        for state in State::TABLE {
            assert_eq!(Some(state), State::from_scaled(state.scaled()));
        }
        assert_eq!(None, State::from_scaled(1));
        assert_eq!(None, State::from_scaled(255));
    }

    #[test]
    fn test_display_round_trips() {
        for state in State::TABLE {
            assert_eq!(Some(state), State::recognize(&state.to_string()));
        }
    }
}
