use crate::parse::{parse, ParseError, ParseMode, ParseResult};
use crate::scan::CharClass;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An identifier given to a builder that could not be parsed back,
/// empty or with characters outside `[0-9A-Za-z-]`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier {0:?}")]
pub struct InvalidIdentifier(pub String);

fn checked<I, S>(ids: I) -> Result<Vec<String>, InvalidIdentifier>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ids.into_iter()
        .map(Into::into)
        .map(|id: String| {
            if CharClass::Identifier.matches(&id) {
                return Ok(id);
            }
            Err(InvalidIdentifier(id))
        })
        .collect()
}

/// A semantic version.
///
/// `None` for the identifier lists means the section is absent. Build metadata is
/// carried along but never takes part in equality or ordering.
#[derive(Debug, Clone, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Option<Vec<String>>,
    pub build_metadata: Option<Vec<String>>,
}

impl Version {

    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: None,
            build_metadata: None,
        }
    }

    /// the semantic versioning specification implemented here
    pub const fn specification() -> Self {
        Self::new(2, 0, 0)
    }

    /// Set the pre-release identifiers.
    ///
    /// Each identifier must be non-empty and made of `[0-9A-Za-z-]`, checked in debug
    /// builds only. Use [Version::try_with_pre_release] for identifiers from outside.
    pub fn with_pre_release<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        debug_assert!(ids.iter().all(|id| CharClass::Identifier.matches(id)), "invalid pre-release identifiers {ids:?}");
        self.pre_release = Some(ids);
        self
    }

    /// same rules as [Version::with_pre_release]
    pub fn with_build_metadata<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        debug_assert!(ids.iter().all(|id| CharClass::Identifier.matches(id)), "invalid build metadata identifiers {ids:?}");
        self.build_metadata = Some(ids);
        self
    }

    pub fn try_with_pre_release<I, S>(mut self, ids: I) -> Result<Self, InvalidIdentifier>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pre_release = Some(checked(ids)?);
        Ok(self)
    }

    pub fn try_with_build_metadata<I, S>(mut self, ids: I) -> Result<Self, InvalidIdentifier>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.build_metadata = Some(checked(ids)?);
        Ok(self)
    }

    /// strict parse, any deviation from the grammar is an error
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, ParseMode::Strict)
    }

    /// Lenient parse, "2" is 2.0.0 and "1.1" is 1.1.0.
    /// Fails only if no major version could be read.
    pub fn parse_lenient(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, ParseMode::Lenient)
    }

    pub fn parse_with(input: &str, mode: ParseMode) -> Result<Self, ParseError> {
        match parse(input) {
            Ok(parsed) => Ok(parsed.into()),
            Err(err) if mode == ParseMode::Lenient && err.parsed().major.is_some() => {
                tracing::debug!("lenient parse of {input:?}: {err}, using the parsed components");
                Ok(err.into_parsed().into())
            }
            Err(err) => Err(err),
        }
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre_release_identifiers().is_empty()
    }

    pub fn pre_release_identifiers(&self) -> &[String] {
        self.pre_release.as_deref().unwrap_or_default()
    }

    pub fn build_metadata_identifiers(&self) -> &[String] {
        self.build_metadata.as_deref().unwrap_or_default()
    }

    /// same major, minor and patch, identifiers are not looked at
    pub fn same_release(&self, other: &Version) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
    }
}

impl From<ParseResult> for Version {
    fn from(parsed: ParseResult) -> Self {
        Self {
            major: parsed.major.unwrap_or(0),
            minor: parsed.minor.unwrap_or(0),
            patch: parsed.patch.unwrap_or(0),
            pre_release: parsed.pre_release,
            build_metadata: parsed.build_metadata,
        }
    }
}

impl std::str::FromStr for Version {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        let pre = self.pre_release_identifiers();
        if !pre.is_empty() {
            write!(f, "-{}", pre.join("."))?;
        }
        let build = self.build_metadata_identifiers();
        if !build.is_empty() {
            write!(f, "+{}", build.join("."))?;
        }
        Ok(())
    }
}

impl std::hash::Hash for Version {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release_identifiers().hash(state);
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Version::parse(&s).map_err(serde::de::Error::custom)
    }
}
