//! # Projection Messages
//!
//! The closed set of messages the editor posts to the preview. On the wire a
//! message is `{ "type": <tag>, "valeur": <payload> }`; anything else is
//! rejected at decode time.

use crate::model::{PortfolioData, Section};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const FULL_UPDATE: &str = "MISE_A_JOUR_PORTFOLIO";
pub const MICRO_UPDATE: &str = "MICRO_UPDATE";
pub const UPDATE_THEME: &str = "UPDATE_THEME";
pub const SCROLL_TO_SECTION: &str = "SCROLL_TO_SECTION";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "valeur")]
pub enum Message {
    /// Whole snapshot; replaces everything the preview shows
    #[serde(rename = "MISE_A_JOUR_PORTFOLIO")]
    FullUpdate(PortfolioData),

    /// One field of one record
    #[serde(rename = "MICRO_UPDATE")]
    MicroUpdate {
        section: Section,
        index: usize,
        field: String,
        content: String,
    },

    /// CSS custom properties for the root element, in order
    #[serde(rename = "UPDATE_THEME")]
    UpdateTheme(IndexMap<String, String>),

    /// Section id to bring into view
    #[serde(rename = "SCROLL_TO_SECTION")]
    ScrollToSection(String),
}

impl Message {
    /// Validate the shape of an incoming value.
    ///
    /// Returns `None` for unknown tags, a missing payload or a payload that
    /// does not fit the tag.
    pub fn decode(value: &Value) -> Option<Message> {
        let object = value.as_object()?;
        object.get("type")?.as_str()?;
        object.get("valeur")?;
        serde_json::from_value(value.clone()).ok()
    }

    pub fn encode(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Message::FullUpdate(_) => FULL_UPDATE,
            Message::MicroUpdate { .. } => MICRO_UPDATE,
            Message::UpdateTheme(_) => UPDATE_THEME,
            Message::ScrollToSection(_) => SCROLL_TO_SECTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let value = Message::ScrollToSection("projects".into()).encode();
        assert_eq!(value, json!({ "type": "SCROLL_TO_SECTION", "valeur": "projects" }));

        let value = Message::MicroUpdate {
            section: Section::Projects,
            index: 0,
            field: "title".into(),
            content: "Shop".into(),
        }
        .encode();
        assert_eq!(value["valeur"]["section"], "projects");
    }

    #[test]
    fn test_decode_full_update_with_partial_payload() {
        let value = json!({ "type": "MISE_A_JOUR_PORTFOLIO", "valeur": { "nomComplet": "Ada" } });
        match Message::decode(&value) {
            Some(Message::FullUpdate(data)) => {
                assert_eq!(data.name, "Ada");
                assert!(data.skills.is_empty());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_decode_full_update_with_null_fields() {
        let value = json!({
            "type": "MISE_A_JOUR_PORTFOLIO",
            "valeur": { "nomComplet": "Ada", "titrePage": null, "skills": [{ "title": "Design", "item2": null }] }
        });
        let Some(Message::FullUpdate(data)) = Message::decode(&value) else {
            panic!("snapshot with null fields rejected");
        };
        assert_eq!(data.name, "Ada");
        assert_eq!(data.page_title, "");
        assert_eq!(data.skills[0].item2, "");
    }

    #[test]
    fn test_decode_theme_keeps_order() {
        let value = json!({ "type": "UPDATE_THEME", "valeur": { "--b": "1", "--a": "2" } });
        let Some(Message::UpdateTheme(vars)) = Message::decode(&value) else {
            panic!("expected theme");
        };
        assert_eq!(vars.keys().collect::<Vec<_>>(), vec!["--b", "--a"]);
    }

    #[test]
    fn test_malformed_messages_rejected() {
        let rejects = [
            json!(null),
            json!("MISE_A_JOUR_PORTFOLIO"),
            json!({ "valeur": {} }),
            json!({ "type": "MISE_A_JOUR_PORTFOLIO" }),
            json!({ "type": "RELOAD", "valeur": {} }),
            json!({ "type": 3, "valeur": {} }),
            json!({ "type": "SCROLL_TO_SECTION", "valeur": 12 }),
            json!({ "type": "MICRO_UPDATE", "valeur": { "section": "blog", "index": 0, "field": "title", "content": "" } }),
            json!({ "type": "MICRO_UPDATE", "valeur": { "section": "skills", "index": -1, "field": "title", "content": "" } }),
        ];
        for value in rejects {
            assert!(Message::decode(&value).is_none(), "accepted {}", value);
        }
    }

    #[test]
    fn test_kind_matches_wire_tag() {
        let messages = [
            Message::FullUpdate(PortfolioData::blank()),
            Message::UpdateTheme(IndexMap::new()),
            Message::ScrollToSection("about".into()),
        ];
        for message in messages {
            assert_eq!(message.encode()["type"], message.kind());
        }
    }
}
