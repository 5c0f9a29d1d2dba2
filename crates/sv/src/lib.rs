use clap::Command;
use anyhow::Result;

pub mod config;
mod report;

mod sv_parse;
mod sv_check;
mod sv_sort;
mod sv_compare;

pub fn get_cli() -> Command {
    build_cli(Command::new("sv"))
}

pub fn build_cli(cmd: clap::Command) -> clap::Command {
    cmd
        .about("Parse, check, sort and compare semantic versions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(sv_parse::args())
        .subcommand(sv_check::args())
        .subcommand(sv_sort::args())
        .subcommand(sv_compare::args())
}

pub fn main_cli(matches: &clap::ArgMatches) -> Result<()> {

    match matches.subcommand() {

        Some(("parse", matches)) => {
            return sv_parse::main(matches);
        }

        Some(("check", matches)) => {
            return sv_check::main(matches);
        }

        Some(("sort", matches)) => {
            return sv_sort::main(matches);
        }

        Some(("compare", matches)) => {
            return sv_compare::main(matches);
        }

        _ =>  {
            anyhow::bail!("no subcmd");
        }
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn cli() {
        get_cli().debug_assert();
    }

    #[test]
    fn aliases() {
        let m = get_cli().get_matches_from(["sv", "vc", "1.0.0", "2.0.0"]);
        assert_eq!(m.subcommand_name(), Some("sort"));

        let m = get_cli().get_matches_from(["sv", "cmp", "1.0.0", "2.0.0"]);
        assert_eq!(m.subcommand_name(), Some("compare"));
    }
}
