use clap::Command;
use clap::arg;
use anyhow::Result;
use anyhow::Context;
use semantic_versioning::{ParseError, ParseMode, Version};

use crate::config;
use crate::report;

pub fn args() -> Command {
    Command::new("sort")
        .about("Sort versions by precedence")
        .long_about("Take a list of versions, sort and print them in descending order. Versions of equal precedence are printed once.")
        .visible_alias("vc")
        .arg(arg!(versions: <version>... "Versions to sort"))
        .arg(arg!(--"skip-invalid" "Skip invalid versions"))
        .arg(arg!(--canonical "Print the canonical form instead of the input"))
        .arg(arg!(--ascending "output in ascending order")
            .overrides_with("descending")
        )
        .arg(arg!(--descending "output in descending order (default)")
            .overrides_with("ascending")
        )
        .args(config::mode_args())
}

pub fn main(matches: &clap::ArgMatches) -> Result<()> {

    let inputs = matches.get_many::<String>("versions").context("version expected")?;
    let skip_invalid = matches.get_flag("skip-invalid");
    let canonical = matches.get_flag("canonical");
    let mode = config::parse_mode(matches);

    let descending = if matches.get_flag("ascending") {
        false
    } else if matches.get_flag("descending") {
        true
    } else {
        config::global().descending
    };

    let mut versions = match sort_versions(inputs.map(String::as_str), mode, skip_invalid) {
        Ok(versions) => versions,
        Err(errors) => {
            for (input, e) in &errors {
                eprintln!("{}", report::explain(input, e));
            }
            std::process::exit(1);
        }
    };

    if descending {
        versions.reverse();
    }

    for (input, v) in versions {
        if canonical {
            println!("{v}");
        } else {
            println!("{input}");
        }
    }

    Ok(())
}

type Sorted<'a> = Vec<(&'a str, Version)>;

/// Parse and sort ascending, keeping the first of each run of equal versions.
/// Without `skip_invalid` every parse failure is returned instead.
fn sort_versions<'a, I>(inputs: I, mode: ParseMode, skip_invalid: bool) -> Result<Sorted<'a>, Vec<(&'a str, ParseError)>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut versions = Vec::new();
    let mut errors = Vec::new();

    for input in inputs {
        match Version::parse_with(input, mode) {
            Ok(v) => versions.push((input, v)),
            Err(e) if skip_invalid => {
                tracing::debug!("skipping {input:?} {e}");
            }
            Err(e) => errors.push((input, e)),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // stable, so equal versions keep their input order
    versions.sort_by(|a, b| a.1.cmp(&b.1));
    versions.dedup_by(|a, b| a.1 == b.1);

    Ok(versions)
}
