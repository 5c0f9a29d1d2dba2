use crate::scan::{Scanner, BUILD_METADATA, DOT, PRE_RELEASE};

/// The parts of a version string, in the order they are parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
    PreReleaseIdentifiers,
    BuildMetadataIdentifiers,
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
            Self::PreReleaseIdentifiers => "pre-release identifiers",
            Self::BuildMetadataIdentifiers => "build metadata identifiers",
        })
    }
}

/// Everything extracted from a version string so far.
///
/// On success major, minor and patch are always present. On failure this holds
/// whatever was parsed before the failure point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    pub major: Option<u64>,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
    pub pre_release: Option<Vec<String>>,
    pub build_metadata: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to parse {component} at offset {offset}")]
pub struct ParseError {
    offset: usize,
    component: Component,
    parsed: ParseResult,
}

impl ParseError {
    /// 0-based character offset where parsing stopped
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// the component that was being parsed when parsing stopped
    pub fn component(&self) -> Component {
        self.component
    }

    /// the components parsed before the failure
    pub fn parsed(&self) -> &ParseResult {
        &self.parsed
    }

    pub fn into_parsed(self) -> ParseResult {
        self.parsed
    }
}

/// How to treat a version string that does not fully parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// any failure is an error
    #[default]
    Strict,
    /// keep what was parsed and default the rest, only a missing major is an error
    Lenient,
}

impl ParseMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "strict" => Some(Self::Strict),
            "lenient" => Some(Self::Lenient),
            _ => None,
        }
    }
}

/// Parse a version string into its components.
///
/// Parsing stops at the first problem. The error reports where, in which
/// component, and carries everything parsed before that point.
pub fn parse(input: &str) -> Result<ParseResult, ParseError> {
    Parser::new(input).run()
}

struct Parser<'a> {
    scanner: Scanner<'a>,
    result: ParseResult,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            scanner: Scanner::new(input),
            result: ParseResult::default(),
        }
    }

    fn run(mut self) -> Result<ParseResult, ParseError> {

        let major = self.number(Component::Major)?;
        self.result.major = Some(major);
        self.delimiter(DOT, Component::Major)?;

        let minor = self.number(Component::Minor)?;
        self.result.minor = Some(minor);
        self.delimiter(DOT, Component::Minor)?;

        let patch = self.number(Component::Patch)?;
        self.result.patch = Some(patch);

        // the section trailing garbage gets blamed on
        let mut section = Component::Patch;

        if self.scanner.scan_literal(PRE_RELEASE) {
            section = Component::PreReleaseIdentifiers;
            let (ids, complete) = self.identifiers();
            self.result.pre_release = (!ids.is_empty()).then_some(ids);
            if !complete {
                return Err(self.fail(section));
            }
        }

        if self.scanner.scan_literal(BUILD_METADATA) {
            section = Component::BuildMetadataIdentifiers;
            let (ids, complete) = self.identifiers();
            self.result.build_metadata = (!ids.is_empty()).then_some(ids);
            if !complete {
                return Err(self.fail(section));
            }
        }

        if !self.scanner.is_at_end() {
            return Err(self.fail(section));
        }

        Ok(self.result)
    }

    fn number(&mut self, component: Component) -> Result<u64, ParseError> {
        let start = self.scanner.position();
        let digits = self.scanner.scan_digits();

        if digits.is_empty() {
            return Err(self.fail(component));
        }

        // "1b", "3alpha", "1_", "2é": only a separator or the end may follow a number
        if self.scanner.peek().is_some_and(|c| !matches!(c, '.' | '-' | '+')) {
            return Err(self.fail(component));
        }

        match digits.parse::<u64>() {
            Ok(n) => Ok(n),
            Err(_) => {
                // too wide for u64
                self.scanner.rewind(start);
                Err(self.fail(component))
            }
        }
    }

    fn delimiter(&mut self, delimiter: &str, component: Component) -> Result<(), ParseError> {
        if self.scanner.scan_literal(delimiter) {
            return Ok(());
        }
        Err(self.fail(component))
    }

    /// Scan dot separated identifiers. Returns the non-empty identifiers found and
    /// whether the list ended cleanly. On an empty identifier the cursor is left
    /// where that identifier should have started.
    fn identifiers(&mut self) -> (Vec<String>, bool) {
        let mut ids = Vec::new();
        loop {
            let id = self.scanner.scan_identifier();
            if id.is_empty() {
                return (ids, false);
            }
            ids.push(id.to_string());
            if !self.scanner.scan_literal(DOT) {
                return (ids, true);
            }
        }
    }

    fn fail(&mut self, component: Component) -> ParseError {
        let offset = self.scanner.position();
        tracing::trace!(offset, component = %component, "version parsing stopped");
        ParseError {
            offset,
            component,
            parsed: std::mem::take(&mut self.result),
        }
    }
}

#[cfg(test)]
mod test {

    use super::*;

    fn ids(v: &[&str]) -> Option<Vec<String>> {
        Some(v.iter().map(|s| s.to_string()).collect())
    }

    fn fails(input: &str, component: Component, offset: usize) -> ParseResult {
        let err = parse(input).expect_err(input);
        assert_eq!(err.component(), component, "component for {input:?}");
        assert_eq!(err.offset(), offset, "offset for {input:?}");
        err.into_parsed()
    }

    #[test]
    fn basic() {
        let r = parse("1.2.3").unwrap();
        assert_eq!(r, ParseResult {
            major: Some(1),
            minor: Some(2),
            patch: Some(3),
            pre_release: None,
            build_metadata: None,
        });
    }

    #[test]
    fn identifiers() {
        let r = parse("0.12.75-alpha1").unwrap();
        assert_eq!(r.pre_release, ids(&["alpha1"]));
        assert_eq!(r.build_metadata, None);

        let r = parse("0.0.1234-alpha.log-fix").unwrap();
        assert_eq!(r.patch, Some(1234));
        assert_eq!(r.pre_release, ids(&["alpha", "log-fix"]));

        let r = parse("1.0.6+staging").unwrap();
        assert_eq!(r.pre_release, None);
        assert_eq!(r.build_metadata, ids(&["staging"]));

        let r = parse("1.1234.6678+timestamp.1168336800").unwrap();
        assert_eq!(r.minor, Some(1234));
        assert_eq!(r.build_metadata, ids(&["timestamp", "1168336800"]));

        let r = parse("0.12.75-alpha1+staging").unwrap();
        assert_eq!(r.pre_release, ids(&["alpha1"]));
        assert_eq!(r.build_metadata, ids(&["staging"]));

        let r = parse("0.0.7-alpha2.hotfix+staging.api7").unwrap();
        assert_eq!(r.pre_release, ids(&["alpha2", "hotfix"]));
        assert_eq!(r.build_metadata, ids(&["staging", "api7"]));

        // hyphens are identifier characters, even leading ones
        let r = parse("1.0.0--x-.1").unwrap();
        assert_eq!(r.pre_release, ids(&["-x-", "1"]));
    }

    #[test]
    fn leading_zeros() {
        let r = parse("01.002.3-007").unwrap();
        assert_eq!((r.major, r.minor, r.patch), (Some(1), Some(2), Some(3)));
        assert_eq!(r.pre_release, ids(&["007"]));
    }

    #[test]
    fn incomplete() {
        let r = fails("4", Component::Major, 1);
        assert_eq!(r.major, Some(4));
        assert_eq!(r.minor, None);

        let r = fails("10.", Component::Minor, 3);
        assert_eq!(r.major, Some(10));
        assert_eq!(r.minor, None);

        let r = fails("8.2", Component::Minor, 3);
        assert_eq!((r.major, r.minor, r.patch), (Some(8), Some(2), None));

        let r = fails("999.60.", Component::Patch, 7);
        assert_eq!((r.major, r.minor, r.patch), (Some(999), Some(60), None));

        let r = fails("", Component::Major, 0);
        assert_eq!(r, ParseResult::default());
    }

    #[test]
    fn trailing() {
        let r = fails("0.6.12.100", Component::Patch, 6);
        assert_eq!((r.major, r.minor, r.patch), (Some(0), Some(6), Some(12)));

        let r = fails("1.2.3-beta!", Component::PreReleaseIdentifiers, 10);
        assert_eq!(r.pre_release, ids(&["beta"]));

        let r = fails("1.2.3+b.c!", Component::BuildMetadataIdentifiers, 9);
        assert_eq!(r.build_metadata, ids(&["b", "c"]));

        let r = fails("1.2.3 ", Component::Patch, 5);
        assert_eq!((r.major, r.minor, r.patch), (Some(1), Some(2), None));
    }

    #[test]
    fn empty_identifiers() {
        let r = fails("1.4.3-", Component::PreReleaseIdentifiers, 6);
        assert_eq!(r.patch, Some(3));
        assert_eq!(r.pre_release, None);

        let r = fails("1.4.3-beta..", Component::PreReleaseIdentifiers, 11);
        assert_eq!(r.pre_release, ids(&["beta"]));

        let r = fails("1.4.3-beta.", Component::PreReleaseIdentifiers, 11);
        assert_eq!(r.pre_release, ids(&["beta"]));

        let r = fails("1.4.3-beta.+x", Component::PreReleaseIdentifiers, 11);
        assert_eq!(r.pre_release, ids(&["beta"]));
        assert_eq!(r.build_metadata, None);

        let r = fails("1.4.3-+x", Component::PreReleaseIdentifiers, 6);
        assert_eq!(r.pre_release, None);

        let r = fails("1.4.3-beta+", Component::BuildMetadataIdentifiers, 11);
        assert_eq!(r.pre_release, ids(&["beta"]));
        assert_eq!(r.build_metadata, None);

        let r = fails("1.4.3-beta+test1..test2", Component::BuildMetadataIdentifiers, 17);
        assert_eq!(r.pre_release, ids(&["beta"]));
        assert_eq!(r.build_metadata, ids(&["test1"]));

        let r = fails("1.4.3+meta.", Component::BuildMetadataIdentifiers, 11);
        assert_eq!(r.build_metadata, ids(&["meta"]));

        fails("1.2.3-é", Component::PreReleaseIdentifiers, 6);
    }

    #[test]
    fn malformed_numbers() {
        let r = fails("+1.2.3", Component::Major, 0);
        assert_eq!(r, ParseResult::default());

        // a number glued to letters is not a number
        let r = fails("1b.2.3", Component::Major, 1);
        assert_eq!(r.major, None);

        let r = fails("1.-2.3", Component::Minor, 2);
        assert_eq!((r.major, r.minor), (Some(1), None));

        let r = fails("1.2b.3", Component::Minor, 3);
        assert_eq!((r.major, r.minor), (Some(1), None));

        let r = fails("1.2.patch3", Component::Patch, 4);
        assert_eq!((r.major, r.minor, r.patch), (Some(1), Some(2), None));

        let r = fails("1.2.3alpha", Component::Patch, 5);
        assert_eq!((r.major, r.minor, r.patch), (Some(1), Some(2), None));

        // anything but a separator counts as glued, not only ASCII letters
        for input in ["1é.2.3", "1_.2.3", "1 .2.3", "1!"] {
            let r = fails(input, Component::Major, 1);
            assert_eq!(r.major, None, "{input:?}");
        }

        let r = fails("1.2_.3", Component::Minor, 3);
        assert_eq!((r.major, r.minor), (Some(1), None));

        // a separator in the wrong place keeps the number
        let r = fails("1-2.3", Component::Major, 1);
        assert_eq!(r.major, Some(1));

        fails("v1.2.3", Component::Major, 0);
        fails(" 1.2.3", Component::Major, 0);
    }

    #[test]
    fn overflow() {
        let r = parse("18446744073709551615.0.0").unwrap();
        assert_eq!(r.major, Some(u64::MAX));

        let r = fails("18446744073709551616.0.0", Component::Major, 0);
        assert_eq!(r.major, None);

        let r = fails("1.2.99999999999999999999", Component::Patch, 4);
        assert_eq!((r.major, r.minor, r.patch), (Some(1), Some(2), None));
    }

    #[test]
    fn error_message() {
        let err = parse("8.2").unwrap_err();
        assert_eq!(err.to_string(), "failed to parse minor at offset 3");

        let err = parse("1.4.3-beta..").unwrap_err();
        assert_eq!(err.to_string(), "failed to parse pre-release identifiers at offset 11");
    }

    #[test]
    fn modes() {
        assert_eq!(ParseMode::default(), ParseMode::Strict);
        assert_eq!(ParseMode::from_name("strict"), Some(ParseMode::Strict));
        assert_eq!(ParseMode::from_name("lenient"), Some(ParseMode::Lenient));
        assert_eq!(ParseMode::from_name("loose"), None);
    }
}
