use serde::{Deserialize, Serialize};

fn default_actions() -> Vec<String> {
    ["leave", "resolve", "reassign", "split"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FormConfig {
    pub version: u32,

    /// Ticket actions offered in the action group, in display order.
    #[serde(default = "default_actions")]
    pub actions: Vec<String>,

    /// Action selected when the form opens.
    #[serde(default)]
    pub default_action: Option<String>,

    /// Whether the split controls start out visible. Not derived from
    /// `default_action`.
    #[serde(default)]
    pub split_controls_visible: bool,

    /// Endpoint that receives the submitted form fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_url: Option<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            version: 1,
            actions: default_actions(),
            default_action: Some("leave".to_string()),
            split_controls_visible: false,
            submit_url: None,
        }
    }
}
