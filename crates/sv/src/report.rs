use semantic_versioning::{ParseError, ParseResult};

/// what was parsed before a failure, "major 8, minor 2"
pub fn describe(parsed: &ParseResult) -> String {
    let mut parts = Vec::new();
    if let Some(n) = parsed.major {
        parts.push(format!("major {n}"));
    }
    if let Some(n) = parsed.minor {
        parts.push(format!("minor {n}"));
    }
    if let Some(n) = parsed.patch {
        parts.push(format!("patch {n}"));
    }
    if let Some(ids) = &parsed.pre_release {
        parts.push(format!("pre-release {}", ids.join(".")));
    }
    if let Some(ids) = &parsed.build_metadata {
        parts.push(format!("build {}", ids.join(".")));
    }
    if parts.is_empty() {
        return "nothing".into();
    }
    parts.join(", ")
}

/// Render a parse failure with the input and a caret under the failure offset.
///
/// ```text
/// error: invalid version "1.4.3-beta.."
///   1.4.3-beta..
///              ^ failed to parse pre-release identifiers at offset 11
///   parsed: major 1, minor 4, patch 3, pre-release beta
/// ```
pub fn explain(input: &str, err: &ParseError) -> String {
    // everything before the offset is ASCII, one column per char
    let pad = " ".repeat(err.offset());
    format!(
        "error: invalid version {input:?}\n  {input}\n  {pad}^ {err}\n  parsed: {}",
        describe(err.parsed()),
    )
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn caret() {
        let input = "1.4.3-beta..";
        let err = semantic_versioning::parse(input).unwrap_err();
        let text = explain(input, &err);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, [
            "error: invalid version \"1.4.3-beta..\"",
            "  1.4.3-beta..",
            "             ^ failed to parse pre-release identifiers at offset 11",
            "  parsed: major 1, minor 4, patch 3, pre-release beta",
        ]);
    }

    #[test]
    fn caret_at_start() {
        let err = semantic_versioning::parse("+1.2.3").unwrap_err();
        let text = explain("+1.2.3", &err);
        assert!(text.contains("\n  ^ failed to parse major at offset 0\n"));
        assert!(text.ends_with("parsed: nothing"));
    }

    #[test]
    fn partial() {
        let err = semantic_versioning::parse("1.4.3-beta+test1..test2").unwrap_err();
        assert_eq!(describe(err.parsed()), "major 1, minor 4, patch 3, pre-release beta, build test1");
    }
}
