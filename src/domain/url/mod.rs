// URL model: splitting a URL into pieces and assembling it back
//
// The splitter and assembler are inverses for any pieces the splitter can
// produce. Neither ever fails; malformed input degrades to absent pieces.

mod assembler;
mod param_map;
mod pieces;
mod sanitize;
mod splitter;

pub use assembler::assemble;
pub use param_map::ParamMap;
pub use pieces::UrlPieces;
pub use splitter::split;
