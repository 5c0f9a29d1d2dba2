use crate::version::Version;

/// Anything that knows a major, minor and patch number, like an operating system
/// version or a platform descriptor.
///
/// Descriptors are not comparable with each other or with [Version]. Lift them with
/// [VersionDescriptor::to_version] and compare the results.
pub trait VersionDescriptor {
    fn major(&self) -> u64;
    fn minor(&self) -> u64;
    fn patch(&self) -> u64;

    fn to_version(&self) -> Version {
        Version::new(self.major(), self.minor(), self.patch())
    }
}

impl From<(u64, u64, u64)> for Version {
    fn from((major, minor, patch): (u64, u64, u64)) -> Self {
        Version::new(major, minor, patch)
    }
}

impl From<[u64; 3]> for Version {
    fn from([major, minor, patch]: [u64; 3]) -> Self {
        Version::new(major, minor, patch)
    }
}

#[cfg(test)]
mod test {

    use super::*;

    struct OsVersion {
        major_version: u32,
        minor_version: u32,
        patch_version: u32,
    }

    impl VersionDescriptor for OsVersion {
        fn major(&self) -> u64 { self.major_version.into() }
        fn minor(&self) -> u64 { self.minor_version.into() }
        fn patch(&self) -> u64 { self.patch_version.into() }
    }

    #[test]
    fn lift() {
        let os = OsVersion { major_version: 8, minor_version: 2, patch_version: 1 };
        let v = os.to_version();
        assert_eq!(v, Version::new(8, 2, 1));
        assert!(!v.is_prerelease());
        assert!(v.build_metadata_identifiers().is_empty());

        // a release sorts after its own pre-releases
        assert!(Version::parse("8.2.1-beta.3").unwrap() < v);
        assert!(Version::parse("8.2.0").unwrap() < v);
    }

    #[test]
    fn triples() {
        assert_eq!(Version::from((1, 2, 3)), Version::new(1, 2, 3));
        assert_eq!(Version::from([4, 5, 6]), Version::new(4, 5, 6));
    }
}
