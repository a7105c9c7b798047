//! OA approval-apply event wire model.
//!
//! This module defines the JSON representation of one approval application as
//! the OA API consumes it, aligned to the upstream `applyevent` schema.
//!
//! Responsibilities:
//! - Define a strict wire model ([`ApplyEvent`]) for serialisation and
//!   deserialisation.
//! - Preserve the API's key names and nesting exactly (`creator_userid`,
//!   `new_number`, `new_money`, `s_timestamp`, `children`, ...).
//!
//! Notes:
//! - [`ContentValue`] is a tagged union: exactly one variant key appears in
//!   the serialized `value` object. An entry with no value at all omits the
//!   `value` key (`Content::value` is `Option`).

use serde::{Deserialize, Serialize};

/// One approval application, ready for submission.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ApplyEvent {
    #[serde(rename = "creator_userid")]
    pub creator_user_id: String,
    pub template_id: String,
    /// 0 = use the approvers below, 1 = use the template's approval flow.
    pub use_template_approver: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub approver: Vec<Approver>,
    /// API spelling.
    #[serde(rename = "notifyer", default, skip_serializing_if = "Vec::is_empty")]
    pub notifier: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_type: Option<u8>,
    pub apply_data: ApplyData,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub summary_list: Vec<SummaryList>,
}

/// One approval node.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Approver {
    /// 1 = any listed member may approve, 2 = all must approve.
    pub attr: u8,
    #[serde(rename = "userid")]
    pub user_ids: Vec<String>,
}

/// Container for the submitted form contents.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ApplyData {
    pub contents: Vec<Content>,
}

/// One form control's submitted value: `{control, id, value}`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Content {
    pub control: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ContentValue>,
}

/// The polymorphic control value. Serialized externally tagged, so exactly
/// one of the API's value keys appears.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ContentValue {
    Text(String),
    #[serde(rename = "new_number")]
    Number(String),
    #[serde(rename = "new_money")]
    Money(String),
    Date(DateValue),
    Selector(SelectorValue),
    Members(Vec<Member>),
    Departments(Vec<Department>),
    Files(Vec<FileRef>),
    #[serde(rename = "children")]
    Table(Vec<TableRow>),
}

/// A date control value: granularity plus epoch seconds as a string.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DateValue {
    #[serde(rename = "type")]
    pub date_type: String,
    #[serde(rename = "s_timestamp")]
    pub timestamp: String,
}

/// A selector control value: single/multi plus the chosen option keys.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SelectorValue {
    #[serde(rename = "type")]
    pub selector_type: String,
    pub options: Vec<SelectorOption>,
}

/// One chosen selector option.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SelectorOption {
    pub key: String,
}

/// A contact control member entry.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Member {
    #[serde(rename = "userid")]
    pub user_id: String,
}

/// A contact control department entry.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Department {
    #[serde(rename = "openapi_id")]
    pub open_api_id: String,
}

/// A file control entry.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileRef {
    pub file_id: String,
}

/// One table-control row: the row's contents in sub-field order.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TableRow {
    pub list: Vec<Content>,
}

/// One summary line shown in the approval list view.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SummaryList {
    pub summary_info: Vec<SummaryInfo>,
}

/// Localised summary text.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SummaryInfo {
    pub text: String,
    pub lang: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn content_value_uses_api_key_names() {
        let cases = [
            (ContentValue::Text("hi".into()), r#"{"text":"hi"}"#),
            (ContentValue::Number("12".into()), r#"{"new_number":"12"}"#),
            (ContentValue::Money("1234.50".into()), r#"{"new_money":"1234.50"}"#),
            (
                ContentValue::Date(DateValue {
                    date_type: "day".into(),
                    timestamp: "1700000000".into(),
                }),
                r#"{"date":{"type":"day","s_timestamp":"1700000000"}}"#,
            ),
            (
                ContentValue::Selector(SelectorValue {
                    selector_type: "single".into(),
                    options: vec![SelectorOption { key: "opt-1".into() }],
                }),
                r#"{"selector":{"type":"single","options":[{"key":"opt-1"}]}}"#,
            ),
            (
                ContentValue::Members(vec![Member { user_id: "u1".into() }]),
                r#"{"members":[{"userid":"u1"}]}"#,
            ),
            (
                ContentValue::Departments(vec![Department { open_api_id: "d1".into() }]),
                r#"{"departments":[{"openapi_id":"d1"}]}"#,
            ),
            (
                ContentValue::Files(vec![FileRef { file_id: "f1".into() }]),
                r#"{"files":[{"file_id":"f1"}]}"#,
            ),
            (
                ContentValue::Table(vec![TableRow { list: vec![] }]),
                r#"{"children":[{"list":[]}]}"#,
            ),
        ];

        for (value, expected) in cases {
            let json = serde_json::to_string(&value).expect("serialize value");
            assert_eq!(json, expected);
        }
    }

    #[test]
    fn event_serializes_with_api_field_names() {
        let event = ApplyEvent {
            creator_user_id: "u1".into(),
            template_id: "t1".into(),
            use_template_approver: 0,
            approver: vec![Approver {
                attr: 2,
                user_ids: vec!["mgr".into()],
            }],
            notifier: vec!["cc1".into()],
            notify_type: Some(1),
            apply_data: ApplyData {
                contents: vec![Content {
                    control: "Text".into(),
                    id: "Text-1".into(),
                    value: Some(ContentValue::Text("reason".into())),
                }],
            },
            summary_list: vec![SummaryList {
                summary_info: vec![SummaryInfo {
                    text: "purchase".into(),
                    lang: "zh_CN".into(),
                }],
            }],
        };

        let json = serde_json::to_value(&event).expect("serialize event");
        let expected = serde_json::json!({
            "creator_userid": "u1",
            "template_id": "t1",
            "use_template_approver": 0,
            "approver": [{"attr": 2, "userid": ["mgr"]}],
            "notifyer": ["cc1"],
            "notify_type": 1,
            "apply_data": {
                "contents": [
                    {"control": "Text", "id": "Text-1", "value": {"text": "reason"}}
                ]
            },
            "summary_list": [
                {"summary_info": [{"text": "purchase", "lang": "zh_CN"}]}
            ]
        });
        assert_eq!(json, expected);
    }

    #[test]
    fn empty_optional_sections_are_omitted() {
        let event = ApplyEvent {
            creator_user_id: "u1".into(),
            template_id: "t1".into(),
            use_template_approver: 1,
            approver: vec![],
            notifier: vec![],
            notify_type: None,
            apply_data: ApplyData { contents: vec![] },
            summary_list: vec![],
        };

        let json = serde_json::to_string(&event).expect("serialize event");
        assert_eq!(
            json,
            r#"{"creator_userid":"u1","template_id":"t1","use_template_approver":1,"apply_data":{"contents":[]}}"#
        );
    }

    #[test]
    fn entry_without_value_omits_the_value_key() {
        let content = Content {
            control: "Signature".into(),
            id: "Sig-1".into(),
            value: None,
        };
        let json = serde_json::to_string(&content).expect("serialize content");
        assert_eq!(json, r#"{"control":"Signature","id":"Sig-1"}"#);
    }

    #[test]
    fn round_trips_through_json() {
        let event = ApplyEvent {
            creator_user_id: "u1".into(),
            template_id: "t1".into(),
            use_template_approver: 0,
            approver: vec![],
            notifier: vec![],
            notify_type: None,
            apply_data: ApplyData {
                contents: vec![Content {
                    control: "Money".into(),
                    id: "Money-1".into(),
                    value: Some(ContentValue::Money("12.00".into())),
                }],
            },
            summary_list: vec![],
        };

        let json = crate::write_apply_event_json(&event).expect("write json");
        let reparsed = crate::read_apply_event_json(&json).expect("read json");
        assert_eq!(event, reparsed);
    }

    #[test]
    fn strict_parsing_rejects_unknown_keys() {
        let json = r#"{"creator_userid":"u1","template_id":"t1","use_template_approver":0,"apply_data":{"contents":[]},"surprise":true}"#;
        assert!(crate::read_apply_event_json(json).is_err());
    }
}
