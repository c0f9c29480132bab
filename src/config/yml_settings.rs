use serde::{Deserialize, Serialize};

/// On-disk settings file. Only the `system.param_sep` key is read; any other
/// keys a host keeps in the same file are ignored.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct YmlSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemSettings>,
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct SystemSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param_sep: Option<String>,
}

impl YmlSettings {
    pub fn param_sep(&self) -> Option<&str> {
        self.system.as_ref()?.param_sep.as_deref()
    }
}
