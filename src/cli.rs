// Command line front end: apply one filter to one URL

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches};
use serde_json::Value;

use crate::{FilterConfig, FilterOutput, FilterRegistry};

pub fn command() -> clap::Command {
    clap::Command::new("urlparamfilter")
        .about("Read or rewrite the query, path parameters or fragment of a URL")
        .arg(
            Arg::new("filter")
                .value_name("FILTER")
                .required(true)
                .help("Filter to apply: query, param or fragment"),
        )
        .arg(
            Arg::new("url")
                .value_name("URL")
                .required(true)
                .help("Complete or partial URL to filter"),
        )
        .arg(
            Arg::new("a")
                .value_name("A")
                .help("First filter argument (false, null and {...} JSON objects are typed)"),
        )
        .arg(
            Arg::new("b")
                .value_name("B")
                .help("Second filter argument"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("CONFIG")
                .help("Path to a YAML file with system.param_sep"),
        )
        .arg(
            Arg::new("delimiter")
                .short('d')
                .long("delimiter")
                .value_name("DELIMITER")
                .help("Path parameter delimiter, overrides the config file"),
        )
}

/// Parse the command line and run the requested filter, returning what to print
pub fn run_from_args() -> Result<Option<String>> {
    run(&command().get_matches())
}

pub fn run(matches: &ArgMatches) -> Result<Option<String>> {
    let config = load_config(matches)?;

    let filter = matches
        .get_one::<String>("filter")
        .context("missing filter name")?;
    let url = matches.get_one::<String>("url").context("missing url")?;
    let a = matches
        .get_one::<String>("a")
        .map(|raw| parse_argument(raw))
        .transpose()?;
    let b = matches
        .get_one::<String>("b")
        .map(|raw| parse_argument(raw))
        .transpose()?;

    let output = FilterRegistry::new().apply(filter, url, a.as_ref(), b.as_ref(), &config)?;
    render_output(output)
}

fn load_config(matches: &ArgMatches) -> Result<FilterConfig> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => FilterConfig::from_file(path)
            .with_context(|| format!("could not load config from {}", path))?,
        None => FilterConfig::default(),
    };

    match matches.get_one::<String>("delimiter") {
        Some(delimiter) => Ok(FilterConfig::with_param_sep(delimiter)?),
        None => Ok(config),
    }
}

/// Turn a raw command line argument into a filter argument.
///
/// `false` and `null` keep their JSON meaning and `{...}` is parsed as an
/// object. Everything else, numbers included, is a plain string.
pub fn parse_argument(raw: &str) -> Result<Value> {
    match raw {
        "false" => Ok(Value::Bool(false)),
        "null" => Ok(Value::Null),
        _ if raw.trim_start().starts_with('{') => {
            serde_json::from_str(raw)
                .with_context(|| format!("invalid JSON object argument: {}", raw))
        }
        _ => Ok(Value::String(raw.to_string())),
    }
}

/// Text to print for a filter result; `None` when the result is absent
pub fn render_output(output: FilterOutput) -> Result<Option<String>> {
    Ok(match output {
        FilterOutput::Url(url) => Some(url),
        FilterOutput::Value(value) => value,
        FilterOutput::Map(Some(map)) => Some(serde_json::to_string(&map)?),
        FilterOutput::Map(None) => None,
    })
}
