//! The extraction grammar for version strings.
//!
//! A version string is scanned left to right for six slots:
//!
//! ```text
//! [v] MAJOR [.] [MINOR] [.] [MAINTENANCE] [.] [BUILD] [.] [-| ] [STATE] [-| ] [SUBSTATE]
//! ```
//!
//! - `MAJOR`, `MINOR`, `MAINTENANCE`, `BUILD` and `SUBSTATE` are runs of ASCII digits.
//! - `STATE` is a run of at least two ASCII letters.
//! - The leading `v` and the letters are matched case-insensitively.
//!
//! Only `MAJOR` is required. Every other element is optional and greedy, and since nothing after
//! `MAJOR` is required, the first greedy path through the grammar is always the match. The scan
//! is anchored at the start of the input but does not need to consume all of it.

/// Raw slot values of a matched version string. Absent or empty slots are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Captures<'vs> {
    pub(crate) major: &'vs str,
    pub(crate) minor: Option<&'vs str>,
    pub(crate) maintenance: Option<&'vs str>,
    pub(crate) build: Option<&'vs str>,
    pub(crate) state: Option<&'vs str>,
    pub(crate) substate: Option<&'vs str>,

    /// Byte offset just past the matched text.
    pub(crate) end: usize,
}

struct Cursor<'vs> {
    input: &'vs str,
    pos: usize,
}

impl<'vs> Cursor<'vs> {
    fn new(input: &'vs str) -> Self {
        Self { input, pos: 0 }
    }

    /// Consumes one byte if it satisfies `pred`.
    fn eat(&mut self, pred: impl Fn(u8) -> bool) -> bool {
        match self.input.as_bytes().get(self.pos) {
            Some(&b) if pred(b) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Consumes the longest run of bytes satisfying `pred`, but only if it is at least `min_len`
    /// long. Otherwise nothing is consumed.
    fn run(&mut self, pred: impl Fn(u8) -> bool, min_len: usize) -> Option<&'vs str> {
        let input = self.input;
        let start = self.pos;
        let len = input.as_bytes()[start..]
            .iter()
            .take_while(|&&b| pred(b))
            .count();
        if len == 0 || len < min_len {
            return None;
        }
        self.pos += len;
        // only ascii bytes were consumed, so these are char boundaries
        Some(&input[start..self.pos])
    }
}

fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

fn is_dot(b: u8) -> bool {
    b == b'.'
}

fn is_state_separator(b: u8) -> bool {
    b == b'-' || b == b' '
}

/// Applies the grammar to `input`. Returns `None` if `input` does not start with a major number
/// (optionally prefixed with `v`).
pub(crate) fn match_version(input: &str) -> Option<Captures<'_>> {
    let mut cursor = Cursor::new(input);

    cursor.eat(|b| b.eq_ignore_ascii_case(&b'v'));
    let major = cursor.run(is_digit, 1)?;
    cursor.eat(is_dot);

    let mut numeric = [None; 3];
    for slot in numeric.iter_mut() {
        *slot = cursor.run(is_digit, 1);
        cursor.eat(is_dot);
    }
    let [minor, maintenance, build] = numeric;

    cursor.eat(is_state_separator);
    let state = cursor.run(|b| b.is_ascii_alphabetic(), 2);

    cursor.eat(is_state_separator);
    let substate = cursor.run(is_digit, 1);

    Some(Captures {
        major,
        minor,
        maintenance,
        build,
        state,
        substate,
        end: cursor.pos,
    })
}

/// Parses a run of ascii digits, saturating at `u32::MAX` instead of overflowing. An absent slot
/// is zero.
pub(crate) fn digits_value(digits: Option<&str>) -> u32 {
    digits.map_or(0, |digits| {
        digits.bytes().fold(0u32, |value, next| {
            value.saturating_mul(10).saturating_add((next - b'0') as u32)
        })
    })
}

/// Returns true if the grammar produced any non-empty capture for `input`.
///
/// This is a weak check: any string that starts with a number (optionally prefixed with `v`)
/// passes, whatever follows it. Use [Version::parse_strict](crate::Version::parse_strict) to
/// also reject trailing text, unknown states, and out-of-range components.
///
/// ```
/// use verparse::is_valid_version_string;
///
/// assert!(is_valid_version_string("v1.2"));
/// assert!(is_valid_version_string("1.2 and then some"));
/// assert!(!is_valid_version_string("garbage"));
/// assert!(!is_valid_version_string(""));
/// ```
pub fn is_valid_version_string(input: &str) -> bool {
    match_version(input).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("1", "1", None, None, None, None, None)]
    #[case("1.2.3", "1", Some("2"), Some("3"), None, None, None)]
    #[case("v2.0.0-rc1", "2", Some("0"), Some("0"), None, Some("rc"), Some("1"))]
    #[case("V10.20", "10", Some("20"), None, None, None, None)]
    #[case("2.0.1-beta3", "2", Some("0"), Some("1"), None, Some("beta"), Some("3"))]
    #[case("1.0 Final", "1", Some("0"), None, None, Some("Final"), None)]
    #[case("1.2.3.4 sp 2", "1", Some("2"), Some("3"), Some("4"), Some("sp"), Some("2"))]
    #[case("1.2-3", "1", Some("2"), None, None, None, Some("3"))]
    fn test_match_slots(
        #[case] input: &str,
        #[case] major: &str,
        #[case] minor: Option<&str>,
        #[case] maintenance: Option<&str>,
        #[case] build: Option<&str>,
        #[case] state: Option<&str>,
        #[case] substate: Option<&str>,
    ) {
        let captures = match_version(input).unwrap();
        assert_eq!(major, captures.major);
        assert_eq!(minor, captures.minor);
        assert_eq!(maintenance, captures.maintenance);
        assert_eq!(build, captures.build);
        assert_eq!(state, captures.state);
        assert_eq!(substate, captures.substate);
    }

    /// Each numeric slot is followed by its own optional dot, so empty slots shift later digits
    /// down, and digits past the build slot land in the substate.
    #[test]
    fn test_greedy_quirks() {
        let captures = match_version("1..2").unwrap();
        assert_eq!(None, captures.minor);
        assert_eq!(Some("2"), captures.maintenance);

        let captures = match_version("1.2.3.4.5").unwrap();
        assert_eq!(Some("4"), captures.build);
        assert_eq!(None, captures.state);
        assert_eq!(Some("5"), captures.substate);
    }

    #[test]
    fn test_single_letter_is_not_a_state() {
        let captures = match_version("1.0-a").unwrap();
        assert_eq!(None, captures.state);
        assert_eq!(None, captures.substate);
        // the separator was consumed, the letter was not
        assert_eq!(4, captures.end);
    }

    #[test]
    fn test_trailing_text_is_ignored() {
        let captures = match_version("1.2.3 (build from main)").unwrap();
        assert_eq!(Some("3"), captures.maintenance);
        assert_eq!(6, captures.end);
    }

    #[rstest]
    #[case("")]
    #[case("garbage")]
    #[case("v")]
    #[case("version 1.2")]
    #[case(".1")]
    fn test_no_match(#[case] input: &str) {
        assert_eq!(None, match_version(input));
        assert!(!is_valid_version_string(input));
    }

    #[test]
    fn test_digits_value_saturates() {
        assert_eq!(0, digits_value(None));
        assert_eq!(42, digits_value(Some("042")));
        assert_eq!(u32::MAX, digits_value(Some("99999999999999999999")));
    }

    #[test]
    fn test_unicode_after_match() {
        let captures = match_version("1.2🎉").unwrap();
        assert_eq!(Some("2"), captures.minor);
        assert_eq!(3, captures.end);
    }
}
