use serde::Serialize;

use crate::board::render::Fragment;

pub const NO_RESULTS: &str = "No results.";

/// What a search screen shows once its request settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResultsPanel {
    Results { fragments: Vec<Fragment> },
    Empty { message: String },
}

impl ResultsPanel {
    pub fn from_fragments(fragments: Vec<Fragment>) -> Self {
        if fragments.is_empty() {
            ResultsPanel::Empty {
                message: NO_RESULTS.to_string(),
            }
        } else {
            ResultsPanel::Results { fragments }
        }
    }
}

/// A panel plus the caller's request sequence number, echoed so the UI can
/// discard a response that lost the race against a newer request.
#[derive(Debug, Clone, Serialize)]
pub struct PanelResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<u64>,
    #[serde(flatten)]
    pub panel: ResultsPanel,
}

/// Confirmation shown after a create. The edit token is never shown again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreationReceipt {
    pub id: i64,
    pub edit_token: String,
    pub message: String,
}

impl CreationReceipt {
    pub fn guild(id: i64, edit_token: String) -> Self {
        let message = format!(
            "Guild saved.\nGuild ID: {id}\nEdit Token: {edit_token}\n\
             Important: store the token, otherwise you cannot edit the guild later."
        );
        Self {
            id,
            edit_token,
            message,
        }
    }

    pub fn player(id: i64, edit_token: String) -> Self {
        let message = format!("Profile saved.\nPlayer ID: {id}\nEdit Token: {edit_token}\n");
        Self {
            id,
            edit_token,
            message,
        }
    }
}

/// The text that replaces the loading placeholder when an action fails.
pub fn error_message(message: &str) -> String {
    format!("Error: {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_results_become_message() {
        assert_eq!(
            ResultsPanel::from_fragments(vec![]),
            ResultsPanel::Empty {
                message: NO_RESULTS.to_string()
            }
        );
    }

    #[test]
    fn test_panel_response_shape() {
        let response = PanelResponse {
            seq: Some(4),
            panel: ResultsPanel::from_fragments(vec![]),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["seq"], 4);
        assert_eq!(json["state"], "empty");
        assert_eq!(json["message"], NO_RESULTS);
    }

    #[test]
    fn test_guild_receipt_mentions_token() {
        let receipt = CreationReceipt::guild(12, "abc".to_string());
        assert!(receipt.message.starts_with("Guild saved.\nGuild ID: 12\nEdit Token: abc\n"));
        assert!(receipt.message.contains("store the token"));
    }

    #[test]
    fn test_player_receipt() {
        let receipt = CreationReceipt::player(5, "xyz".to_string());
        assert_eq!(receipt.message, "Profile saved.\nPlayer ID: 5\nEdit Token: xyz\n");
    }

    #[test]
    fn test_error_message_prefix() {
        assert_eq!(error_message("boom"), "Error: boom");
    }
}
