use clap::Command;
use clap::arg;
use anyhow::Result;
use anyhow::Context;
use semantic_versioning::{ParseMode, Version};
use std::cmp::Ordering;

use crate::config;
use crate::report;

pub fn args() -> Command {
    Command::new("compare")
        .about("Compare two versions")
        .long_about("Compare two versions by precedence and print <, = or > between them. Build metadata is ignored.")
        .visible_alias("cmp")
        .arg(arg!(left: <left> "First version"))
        .arg(arg!(right: <right> "Second version"))
        .args(config::mode_args())
}

pub fn main(matches: &clap::ArgMatches) -> Result<()> {

    let left = matches.get_one::<String>("left").context("left version expected")?;
    let right = matches.get_one::<String>("right").context("right version expected")?;
    let mode = config::parse_mode(matches);

    let a = parse(left, mode)?;
    let b = parse(right, mode)?;

    println!("{left} {} {right}", symbol(a.cmp(&b)));
    Ok(())
}

fn parse(input: &str, mode: ParseMode) -> Result<Version> {
    Version::parse_with(input, mode).map_err(|e| anyhow::anyhow!(report::explain(input, &e)))
}

fn symbol(ord: Ordering) -> &'static str {
    match ord {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}
