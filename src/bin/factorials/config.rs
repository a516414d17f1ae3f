use factorials::calculator::{Calculator, CalculatorBuilder, Strategy};
use factorials::directories::CONFIG_DIR;
use factorials::dynamic::Value;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use structopt::clap::AppSettings::{AllowNegativeNumbers, ColoredHelp};
use structopt::StructOpt;

pub const CONFIG_PATH_VAR: &str = "FACTORIALS_CONFIG_PATH";

pub fn config_file() -> PathBuf {
    locate_config(std::env::var_os(CONFIG_PATH_VAR).map(PathBuf::from))
}

/// An override only wins when it names an existing file.
fn locate_config(overridden: Option<PathBuf>) -> PathBuf {
    match overridden {
        Some(path) if path.is_file() => path,
        _ => CONFIG_DIR.join("config"),
    }
}

/// Arguments stored in the config file at `path`.
///
/// Blank lines and lines starting with `#` are skipped, the rest are split like
/// a shell would. One malformed line discards the whole file.
pub fn read_args(path: &Path) -> Vec<OsString> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return vec![],
    };

    let mut args = vec![];
    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match shell_words::split(line) {
            Ok(words) => args.extend(words.into_iter().map(OsString::from)),
            Err(e) => {
                warn!("ignoring {}: {}", path.display(), e);
                return vec![];
            }
        }
    }
    args
}

/// Program name, then the config file arguments, then the rest of the command line.
pub fn merge_args<I>(from_file: Vec<OsString>, cli: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut cli = cli.into_iter();
    let mut args = vec![cli.next().unwrap_or_else(|| "factorials".into())];
    args.extend(from_file);
    args.extend(cli);
    args
}

#[derive(StructOpt, Debug)]
#[structopt(name = "factorials")]
#[structopt(global_setting(ColoredHelp), setting(AllowNegativeNumbers))]
pub struct Config {
    /// The number to take the factorial of.
    #[structopt(value_name = "N", parse(from_str), required_unless = "config-file")]
    pub value: Option<Value>,

    /// Use arbitrary precision instead of 64-bit integers.
    #[structopt(long, conflicts_with = "prefixes")]
    pub big: bool,

    /// Show the path of factorials config file
    #[structopt(long)]
    pub config_file: bool,

    /// Split point for the `split` strategy. Defaults to N / 2.
    #[structopt(long, value_name = "PIVOT")]
    pub pivot: Option<u64>,

    /// Print every factorial from 0! up to N!.
    #[structopt(long)]
    pub prefixes: bool,

    /// How to compute the factorial.
    #[structopt(
        long,
        short,
        value_name = "STRATEGY",
        default_value = "iterative",
        possible_values = Strategy::NAMES,
        case_insensitive = true
    )]
    pub strategy: Strategy,

    /// Number of ranges for the `fanout` strategy and for --big
    #[structopt(long, short, value_name = "WORKERS", default_value = "2")]
    pub workers: usize,
}

impl Config {
    pub fn get_calculator(&self) -> Calculator {
        let builder = CalculatorBuilder::new()
            .strategy(self.strategy)
            .workers(self.workers);

        match self.pivot {
            Some(pivot) => builder.pivot(pivot).build(),
            None => builder.build(),
        }
    }
}
