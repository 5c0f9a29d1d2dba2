use clap::Command;
use clap::arg;
use anyhow::Result;
use anyhow::Context;
use semantic_versioning::Version;
use std::io::IsTerminal;
use std::io::Write;

use crate::config;
use crate::report;

pub fn args() -> Command {
    Command::new("parse")
        .about("Parse versions and show their parts")
        .long_about("Parse each version and print its components, one line per version")
        .arg(arg!(versions: <version>... "Versions to parse"))
        .arg(arg!(--json "Output as JSON lines"))
        .args(config::mode_args())
}

pub fn main(matches: &clap::ArgMatches) -> Result<()> {

    let inputs = matches.get_many::<String>("versions").context("version expected")?;
    let json = matches.get_flag("json");
    let mode = config::parse_mode(matches);

    let mut parsed = Vec::new();
    let mut err = 0;
    for input in inputs {
        match Version::parse_with(input, mode) {
            Ok(v) => parsed.push((input.as_str(), v)),
            Err(e) => {
                eprintln!("{}", report::explain(input, &e));
                err += 1;
            }
        }
    }

    if json {
        for (input, v) in &parsed {
            println!("{}", json_line(input, v));
        }
    } else {
        let header = std::io::stdout().is_terminal();
        let mut tw = tabwriter::TabWriter::new(std::io::stdout());
        write_table(&mut tw, &parsed, header)?;
        tw.flush()?;
    }

    if err > 0 {
        anyhow::bail!("{err} invalid version(s)");
    }

    Ok(())
}

fn write_table<W: Write>(w: &mut W, parsed: &[(&str, Version)], header: bool) -> Result<()> {
    if header {
        writeln!(w, "input\tversion\tmajor\tminor\tpatch\tpre-release\tbuild")?;
    }
    for (input, v) in parsed {
        writeln!(w, "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            input,
            v,
            v.major,
            v.minor,
            v.patch,
            v.pre_release_identifiers().join("."),
            v.build_metadata_identifiers().join("."),
        )?;
    }
    Ok(())
}

fn json_line(input: &str, v: &Version) -> serde_json::Value {
    serde_json::json!({
        "input": input,
        "version": v.to_string(),
        "major": v.major,
        "minor": v.minor,
        "patch": v.patch,
        "prerelease": v.is_prerelease(),
        "pre_release": v.pre_release_identifiers(),
        "build_metadata": v.build_metadata_identifiers(),
    })
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn table() {
        let parsed = vec![
            ("1.0.0-rc.1+b.5", Version::parse("1.0.0-rc.1+b.5").unwrap()),
            ("02.1.0", Version::parse("02.1.0").unwrap()),
        ];
        let mut out = Vec::new();
        write_table(&mut out, &parsed, true).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, [
            "input\tversion\tmajor\tminor\tpatch\tpre-release\tbuild",
            "1.0.0-rc.1+b.5\t1.0.0-rc.1+b.5\t1\t0\t0\trc.1\tb.5",
            "02.1.0\t2.1.0\t2\t1\t0\t\t",
        ]);
    }

    #[test]
    fn json() {
        let v = Version::parse("1.4.3-beta.2+exp.sha.5114f85").unwrap();
        let j = json_line("1.4.3-beta.2+exp.sha.5114f85", &v);
        assert_eq!(j["version"], "1.4.3-beta.2+exp.sha.5114f85");
        assert_eq!(j["major"], 1);
        assert_eq!(j["minor"], 4);
        assert_eq!(j["patch"], 3);
        assert_eq!(j["prerelease"], true);
        assert_eq!(j["pre_release"], serde_json::json!(["beta", "2"]));
        assert_eq!(j["build_metadata"], serde_json::json!(["exp", "sha", "5114f85"]));

        let v = Version::parse_lenient("3").unwrap();
        let j = json_line("3", &v);
        assert_eq!(j["version"], "3.0.0");
        assert_eq!(j["prerelease"], false);
        assert_eq!(j["pre_release"], serde_json::json!([]));
    }
}
