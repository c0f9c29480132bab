pub mod filter;
pub mod url;

pub use self::filter::{FilterOutput, FilterRegistry, FragmentArgs, MapArgs, UrlFilter};
pub use self::url::{ParamMap, UrlPieces};
