// semantic versioning 2.0.0
//
// --- General rules ---
//
// 1. major, minor, patch are compared numerically, in that order
// 2.   prerel is LESS than non-prerel (1.0.0-rc.1 < 1.0.0)
// 3.  numeric identifiers are LESS than non-numeric identifiers
// 4. fewer identifiers is LESS than more identifiers when all shared ones are equal
// 5. build metadata is ignored for ordering and equality
//
// --- General Form ---
//
// numbers                              example: 1.2.3
// numbers "-" prerelease               example: 1.2.3-rc.1
// numbers "+" build                    example: 1.2.3+20250102
// numbers "-" prerelease "+" build     example: 1.2.3-rc.1+20250102
//
// Exactly three dot separated numbers
// - followed by optional prerelease identifiers (indicated by "-" separator)
// - followed by optional build identifiers (indicated by "+" separator)
//
// --- Differences from Semver ---
//
// 1. Leading zeros in numbers are accepted, 01.002.3 parses as 1.2.3
//
// 2. A lenient parse accepts missing minor and patch numbers
//    example: "2" -> 2.0.0, "1.1" -> 1.1.0
//
// --- Grammar ---
//
// <version> = <version_core>
//           | <version_core> "-" <pre_release>
//           | <version_core> "+" <build>
//           | <version_core> "-" <pre_release> "+" <build>
//
// <version_core> = <major> "." <minor> "." <patch>
//
// <major> = <digits>
// <minor> = <digits>
// <patch> = <digits>
//
// <pre_release> = <identifier>
//               | <identifier> "." <pre_release>
//
// <build> = <identifier>
//         | <identifier> "." <build>
//
// <identifier> = <identifier_character>
//              | <identifier_character> <identifier>
//
// <identifier_character> = <digit> | <letter> | "-"

mod compare;
mod descriptor;
mod literal;
mod parse;
mod scan;
mod version;

pub use compare::{identifier_cmp, pre_release_cmp};
pub use descriptor::VersionDescriptor;
pub use parse::{parse, Component, ParseError, ParseMode, ParseResult};
pub use scan::{CharClass, Scanner};
pub use version::{InvalidIdentifier, Version};
