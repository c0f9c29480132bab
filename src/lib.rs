// URL decomposition and recomposition filters for template engines
//
// `query`, `param` and `fragment` read or rewrite one piece of a URL. The
// path parameter delimiter is passed in through `FilterConfig`.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod validation;

pub use config::FilterConfig;
pub use domain::filter::{fragment, param, query};
pub use domain::{
    FilterOutput, FilterRegistry, FragmentArgs, MapArgs, ParamMap, UrlFilter, UrlPieces,
};
pub use error::Error;
