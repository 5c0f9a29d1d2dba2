use clap::Command;
use clap::arg;
use anyhow::Result;
use anyhow::Context;
use semantic_versioning::{ParseError, ParseMode, Version};

use crate::config;
use crate::report;

pub fn args() -> Command {
    Command::new("check")
        .about("Validate versions")
        .long_about("Check that every argument is a valid semantic version, exit 1 if any is not")
        .arg(arg!(versions: <version>... "Versions to check"))
        .arg(arg!(-q --quiet "Print nothing, only set the exit code"))
        .args(config::mode_args())
}

pub fn main(matches: &clap::ArgMatches) -> Result<()> {

    let inputs = matches.get_many::<String>("versions").context("version expected")?;
    let quiet = matches.get_flag("quiet");
    let mode = config::parse_mode(matches);

    let failures = check(inputs.map(String::as_str), mode);

    if quiet {
        if !failures.is_empty() {
            std::process::exit(1);
        }
        return Ok(());
    }

    for (input, e) in &failures {
        eprintln!("{}", report::explain(input, e));
    }

    if !failures.is_empty() {
        anyhow::bail!("{} invalid version(s)", failures.len());
    }

    Ok(())
}

/// inputs that fail to parse, in order
fn check<'a, I>(inputs: I, mode: ParseMode) -> Vec<(&'a str, ParseError)>
where
    I: IntoIterator<Item = &'a str>,
{
    inputs
        .into_iter()
        .filter_map(|input| {
            let e = Version::parse_with(input, mode).err()?;
            tracing::debug!("invalid {input:?} {e}");
            Some((input, e))
        })
        .collect()
}
