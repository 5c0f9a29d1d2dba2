use clap::arg;
use semantic_versioning::ParseMode;
use std::sync::OnceLock;

const DEFAULT_MODE  : &str = "strict";
const DEFAULT_ORDER : &str = "descending";

/// defaults that command line flags can override
#[derive(Debug, PartialEq)]
pub struct Config {
    pub mode: ParseMode,
    pub descending: bool,
}

/// read once from the environment
///   SV_MODE  = strict | lenient
///   SV_ORDER = ascending | descending
pub fn global() -> &'static Config {
    static INSTANCE : OnceLock<Config> = OnceLock::new();
    INSTANCE.get_or_init(|| Config::from_vars(|key| std::env::var(key).ok()))
}

impl Config {
    fn from_vars<F: Fn(&str) -> Option<String>>(var: F) -> Self {

        let mode = var("SV_MODE");
        let mode = mode.as_deref().unwrap_or(DEFAULT_MODE);
        let mode = ParseMode::from_name(mode).unwrap_or_else(|| {
            tracing::warn!("unknown SV_MODE {mode:?}, using {DEFAULT_MODE}");
            ParseMode::Strict
        });

        let descending = match var("SV_ORDER").as_deref().unwrap_or(DEFAULT_ORDER) {
            "asc"  | "ascending"  => false,
            "desc" | "descending" => true,
            other => {
                tracing::warn!("unknown SV_ORDER {other:?}, using {DEFAULT_ORDER}");
                true
            }
        };

        Self { mode, descending }
    }
}

pub fn mode_args() -> [clap::Arg; 2] {
    [
        arg!(--lenient "Accept incomplete versions, missing numbers default to 0")
            .overrides_with("strict"),
        arg!(--strict "Require complete, well formed versions (default)")
            .overrides_with("lenient"),
    ]
}

/// --lenient / --strict, falling back to SV_MODE
pub fn parse_mode(matches: &clap::ArgMatches) -> ParseMode {
    if matches.get_flag("lenient") {
        ParseMode::Lenient
    } else if matches.get_flag("strict") {
        ParseMode::Strict
    } else {
        global().mode
    }
}
