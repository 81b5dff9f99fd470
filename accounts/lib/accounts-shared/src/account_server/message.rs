use serde::{Deserialize, Serialize};

/// The body the account api answers with, for success
/// and failure alike. The message is optional and meant
/// to be shown to the user as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// Human readable text, if the account api provided one.
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageResponse {
    /// The message, unless it is missing or empty.
    /// An empty message counts as no message.
    pub fn into_message(self) -> Option<String> {
        self.message.filter(|msg| !msg.is_empty())
    }
}

#[cfg(test)]
mod test {
    use super::MessageResponse;

    #[test]
    fn message_is_optional() {
        let res: MessageResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(res.into_message(), None);

        let res: MessageResponse = serde_json::from_str(r#"{"message":null}"#).unwrap();
        assert_eq!(res.into_message(), None);

        let res: MessageResponse = serde_json::from_str(r#"{"message":""}"#).unwrap();
        assert_eq!(res.into_message(), None);

        let res: MessageResponse =
            serde_json::from_str(r#"{"message":"Done","extra":1}"#).unwrap();
        assert_eq!(res.into_message(), Some("Done".to_string()));
    }
}
