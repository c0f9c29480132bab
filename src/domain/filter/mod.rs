// URL filters: `query`, `param` and `fragment`
//
// Each filter splits the URL, reads or rewrites one piece and, for writes,
// assembles it again. Argument shapes a filter does not understand return the
// input URL unchanged.

mod args;
mod operations;
mod output;
mod registry;

pub use args::{FragmentArgs, MapArgs};
pub use operations::{fragment, param, query};
pub use output::FilterOutput;
pub use registry::{FilterRegistry, FragmentFilter, ParamFilter, QueryFilter, UrlFilter};
