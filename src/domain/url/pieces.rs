// Structured view of a (complete or partial) URL

use super::param_map::ParamMap;

/// A URL broken into its parts. Pieces missing from the source URL stay `None`.
///
/// `path_params` and `query` distinguish "not present" (`None`) from
/// "present but empty" (`Some` of an empty map).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlPieces {
    pub scheme: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: String,
    pub path_params: Option<ParamMap>,
    pub query: Option<ParamMap>,
    pub fragment: Option<String>,
}

impl UrlPieces {
    /// True when any of user, password, host or port is set
    pub fn has_authority(&self) -> bool {
        self.host.is_some() || self.user.is_some() || self.password.is_some() || self.port.is_some()
    }
}
