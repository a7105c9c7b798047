//! Approval-event converter.
//!
//! [`Converter`] turns one described business record into a
//! [`wecom::apply::ApplyEvent`]: it walks the record's fields in declaration
//! order, interprets each field's tag, dispatches the control kind to a
//! handler, and assembles the event from the handler outputs plus
//! converter-level settings.
//!
//! A converter is configured once through [`ConverterBuilder`] — defaults,
//! approvers, notifiers, summary, custom handlers, unknown-control policy —
//! and is immutable afterwards, so one instance can serve many `parse` calls
//! from many threads.
//!
//! Skip policies (deliberate, not errors):
//! - an untagged field, or a tag without a `control` parameter, contributes
//!   nothing;
//! - a handler returning `None` suppresses its entry entirely (used by
//!   optional controls such as selector and file when the field is unset);
//! - an unknown control kind follows the configured
//!   [`UnknownControlPolicy`].

use crate::error::{ConvertError, ConvertResult};
use crate::tag::{
    parse_tag, TagParams, PARAM_CONTROL, PARAM_ID, PARAM_MODE, PARAM_MULTI, PARAM_OPTION,
    PARAM_SELECTOR_TYPE, PARAM_TYPE, TAG_CREATOR, TAG_TEMPLATE,
};
use chrono::Utc;
use oa_types::{ApplyRecord, ControlKind, Field, FieldValue};
use std::collections::HashMap;
use wecom::apply::{
    ApplyData, ApplyEvent, Approver, Content, ContentValue, DateValue, Department, FileRef,
    Member, SelectorOption, SelectorValue, SummaryList, TableRow,
};

const DATE_TYPE_DAY: &str = "day";
const SELECTOR_SINGLE: &str = "single";
const SELECTOR_MULTI: &str = "multi";
const CONTACT_MULTI: &str = "multi";
const CONTACT_MODE_USER: &str = "user";
const CONTACT_MODE_DEPARTMENT: &str = "department";

/// A caller-supplied control handler: field value and tag parameters in, at
/// most one content value out. Returning `None` suppresses the entry.
pub type Handler = Box<dyn Fn(&FieldValue, &TagParams) -> Option<ContentValue> + Send + Sync>;

/// What to do with a control kind no handler covers.
///
/// One explicit switch instead of a silent per-call-site choice. `Skip` drops
/// the entry; `EmitEmpty` appends it with no value so the downstream consumer
/// sees the control was present but unconvertible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownControlPolicy {
    #[default]
    Skip,
    EmitEmpty,
}

/// Converts described business records into OA apply events.
pub struct Converter {
    template_id: String,
    creator_user_id: String,
    use_template_approver: bool,
    approvers: Vec<Approver>,
    notifiers: Vec<String>,
    notify_type: Option<u8>,
    summary_list: Vec<SummaryList>,
    handlers: HashMap<String, Handler>,
    unknown_control: UnknownControlPolicy,
}

/// Builds a [`Converter`]. All configuration happens here; the built value
/// is read-only.
pub struct ConverterBuilder {
    template_id: String,
    creator_user_id: String,
    use_template_approver: bool,
    approvers: Vec<Approver>,
    notifiers: Vec<String>,
    notify_type: Option<u8>,
    summary_list: Vec<SummaryList>,
    handlers: HashMap<String, Handler>,
    unknown_control: UnknownControlPolicy,
}

impl Converter {
    /// Starts a builder with the default template and creator identifiers.
    ///
    /// A record's `template`/`creator` pseudo-fields override these per
    /// parse.
    pub fn builder(
        template_id: impl Into<String>,
        creator_user_id: impl Into<String>,
    ) -> ConverterBuilder {
        ConverterBuilder {
            template_id: template_id.into(),
            creator_user_id: creator_user_id.into(),
            use_template_approver: false,
            approvers: Vec::new(),
            notifiers: Vec::new(),
            notify_type: None,
            summary_list: Vec::new(),
            handlers: HashMap::new(),
            unknown_control: UnknownControlPolicy::default(),
        }
    }

    /// Converts one business record into an apply event.
    pub fn parse<T: ApplyRecord + ?Sized>(&self, record: &T) -> ApplyEvent {
        self.assemble(&record.apply_fields())
    }

    /// Converts a dynamic value that must be a record.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidShape`] if the value is not a
    /// [`FieldValue::Record`].
    pub fn parse_value(&self, value: &FieldValue) -> ConvertResult<ApplyEvent> {
        match value {
            FieldValue::Record(fields) => Ok(self.assemble(fields)),
            _ => Err(ConvertError::InvalidShape {
                expected: "a record of tagged fields",
            }),
        }
    }

    fn assemble(&self, fields: &[Field]) -> ApplyEvent {
        let mut event = ApplyEvent {
            creator_user_id: self.creator_user_id.clone(),
            template_id: self.template_id.clone(),
            use_template_approver: u8::from(self.use_template_approver),
            approver: self.approvers.clone(),
            notifier: self.notifiers.clone(),
            notify_type: self.notify_type,
            apply_data: ApplyData {
                contents: Vec::new(),
            },
            summary_list: self.summary_list.clone(),
        };

        for field in fields {
            let Some(tag) = field.tag.as_deref() else {
                continue;
            };
            // Pseudo-fields feed the event header and emit no content entry.
            match tag {
                TAG_CREATOR => {
                    event.creator_user_id = field.value.scalar_text();
                    continue;
                }
                TAG_TEMPLATE => {
                    event.template_id = field.value.scalar_text();
                    continue;
                }
                _ => {}
            }
            if let Some(content) = self.convert_field(tag, &field.value) {
                event.apply_data.contents.push(content);
            }
        }

        event
    }

    /// Converts one tagged field into at most one content entry.
    fn convert_field(&self, tag: &str, value: &FieldValue) -> Option<Content> {
        let params = parse_tag(tag);
        let control = params.get(PARAM_CONTROL).map(String::as_str).unwrap_or("");
        if control.is_empty() {
            tracing::debug!(tag, "tag has no control parameter, skipping field");
            return None;
        }
        let id = params.get(PARAM_ID).cloned().unwrap_or_default();

        match self.dispatch(control, value, &params) {
            Dispatch::Value(converted) => Some(Content {
                control: control.to_owned(),
                id,
                value: Some(converted),
            }),
            Dispatch::Suppressed => None,
            Dispatch::Unknown => match self.unknown_control {
                UnknownControlPolicy::Skip => None,
                UnknownControlPolicy::EmitEmpty => Some(Content {
                    control: control.to_owned(),
                    id,
                    value: None,
                }),
            },
        }
    }

    /// Converts each tagged field of one table row, in declaration order.
    fn convert_fields(&self, fields: &[Field]) -> Vec<Content> {
        fields
            .iter()
            .filter_map(|field| {
                field
                    .tag
                    .as_deref()
                    .and_then(|tag| self.convert_field(tag, &field.value))
            })
            .collect()
    }

    fn dispatch(&self, control: &str, value: &FieldValue, params: &TagParams) -> Dispatch {
        // Caller-registered handlers win, including over the built-ins.
        if let Some(handler) = self.handlers.get(control) {
            return Dispatch::from(handler(value, params));
        }

        let converted = match ControlKind::from_name(control) {
            ControlKind::Text | ControlKind::Textarea => handle_text(value),
            ControlKind::Number => handle_number(value),
            ControlKind::Money => handle_money(value),
            ControlKind::Date => handle_date(value, params),
            ControlKind::Selector => handle_selector(value, params),
            ControlKind::Contact => handle_contact(value, params),
            ControlKind::File => handle_file(value),
            ControlKind::Table => self.handle_table(value),
            ControlKind::Custom(_) => {
                tracing::warn!(control, "no handler registered for control kind");
                return Dispatch::Unknown;
            }
        };
        Dispatch::from(converted)
    }

    /// Table control: re-walk each row record with the same per-field logic.
    /// Non-record elements are skipped; a non-list value suppresses the
    /// entry.
    fn handle_table(&self, value: &FieldValue) -> Option<ContentValue> {
        let FieldValue::List(rows) = value else {
            return None;
        };
        let mut table = Vec::with_capacity(rows.len());
        for row in rows {
            let FieldValue::Record(fields) = row else {
                continue;
            };
            table.push(TableRow {
                list: self.convert_fields(fields),
            });
        }
        Some(ContentValue::Table(table))
    }
}

impl ConverterBuilder {
    /// Use the template's own approval flow instead of the approver list.
    pub fn use_template_approver(mut self, use_template: bool) -> Self {
        self.use_template_approver = use_template;
        self
    }

    /// Sets the approval nodes.
    pub fn approvers(mut self, approvers: Vec<Approver>) -> Self {
        self.approvers = approvers;
        self
    }

    /// Sets the notified users and the notification timing.
    pub fn notifiers(mut self, notifiers: Vec<String>, notify_type: u8) -> Self {
        self.notifiers = notifiers;
        self.notify_type = Some(notify_type);
        self
    }

    /// Sets the summary lines shown in the approval list view.
    pub fn summary(mut self, summary_list: Vec<SummaryList>) -> Self {
        self.summary_list = summary_list;
        self
    }

    /// Registers a handler for a control kind. Last write wins, and a
    /// registered handler shadows the built-in of the same name.
    pub fn handler(
        mut self,
        control: impl Into<String>,
        handler: impl Fn(&FieldValue, &TagParams) -> Option<ContentValue> + Send + Sync + 'static,
    ) -> Self {
        self.handlers.insert(control.into(), Box::new(handler));
        self
    }

    /// Sets the unknown-control policy.
    pub fn unknown_control(mut self, policy: UnknownControlPolicy) -> Self {
        self.unknown_control = policy;
        self
    }

    pub fn build(self) -> Converter {
        Converter {
            template_id: self.template_id,
            creator_user_id: self.creator_user_id,
            use_template_approver: self.use_template_approver,
            approvers: self.approvers,
            notifiers: self.notifiers,
            notify_type: self.notify_type,
            summary_list: self.summary_list,
            handlers: self.handlers,
            unknown_control: self.unknown_control,
        }
    }
}

/// Outcome of dispatching one control.
enum Dispatch {
    Value(ContentValue),
    Suppressed,
    Unknown,
}

impl From<Option<ContentValue>> for Dispatch {
    fn from(converted: Option<ContentValue>) -> Self {
        match converted {
            Some(value) => Dispatch::Value(value),
            None => Dispatch::Suppressed,
        }
    }
}

fn handle_text(value: &FieldValue) -> Option<ContentValue> {
    Some(ContentValue::Text(value.scalar_text()))
}

fn handle_number(value: &FieldValue) -> Option<ContentValue> {
    let rendered = match value {
        FieldValue::Int(n) => n.to_string(),
        FieldValue::UInt(n) => n.to_string(),
        // Shortest round-trip form, no fixed decimal count.
        FieldValue::Float(f) => f.to_string(),
        _ => "0".to_owned(),
    };
    Some(ContentValue::Number(rendered))
}

fn handle_money(value: &FieldValue) -> Option<ContentValue> {
    let rendered = match value {
        FieldValue::Int(n) => n.to_string(),
        FieldValue::UInt(n) => n.to_string(),
        // Money floats always carry exactly two fractional digits.
        FieldValue::Float(f) => format!("{f:.2}"),
        _ => "0.00".to_owned(),
    };
    Some(ContentValue::Money(rendered))
}

fn handle_date(value: &FieldValue, params: &TagParams) -> Option<ContentValue> {
    let date_type = params
        .get(PARAM_TYPE)
        .cloned()
        .unwrap_or_else(|| DATE_TYPE_DAY.to_owned());
    let timestamp = match value {
        FieldValue::Timestamp(t) => t.timestamp(),
        FieldValue::Int(n) => *n,
        FieldValue::UInt(n) => *n as i64,
        // Unrecognized shapes fall back to the current time.
        _ => Utc::now().timestamp(),
    };
    Some(ContentValue::Date(DateValue {
        date_type,
        timestamp: timestamp.to_string(),
    }))
}

fn handle_selector(value: &FieldValue, params: &TagParams) -> Option<ContentValue> {
    // Single/multi follows the field's runtime shape unless the tag says
    // otherwise.
    let mut selector_type = match value {
        FieldValue::List(_) => SELECTOR_MULTI.to_owned(),
        _ => SELECTOR_SINGLE.to_owned(),
    };
    if let Some(explicit) = params.get(PARAM_SELECTOR_TYPE) {
        if !explicit.is_empty() {
            selector_type = explicit.clone();
        }
    }
    if params.get(PARAM_MULTI).is_some_and(|multi| multi == "true") {
        selector_type = SELECTOR_MULTI.to_owned();
    }

    let mut options = Vec::new();
    match value {
        FieldValue::List(items) => {
            for item in items {
                let key = item.scalar_text();
                if !key.is_empty() {
                    options.push(SelectorOption { key });
                }
            }
        }
        _ => {
            let key = params
                .get(PARAM_OPTION)
                .filter(|option| !option.is_empty())
                .cloned()
                .unwrap_or_else(|| value.scalar_text());
            if !key.is_empty() {
                options.push(SelectorOption { key });
            }
        }
    }

    // Unset optional field: suppress the entry.
    if options.is_empty() {
        return None;
    }
    Some(ContentValue::Selector(SelectorValue {
        selector_type,
        options,
    }))
}

fn handle_contact(value: &FieldValue, params: &TagParams) -> Option<ContentValue> {
    let multi = params
        .get(PARAM_TYPE)
        .is_some_and(|contact_type| contact_type == CONTACT_MULTI);
    let mode = params
        .get(PARAM_MODE)
        .map(String::as_str)
        .unwrap_or(CONTACT_MODE_USER);

    let ids: Vec<String> = match value {
        FieldValue::List(items) if multi => items.iter().map(FieldValue::scalar_text).collect(),
        // Single mode wraps the lone value.
        _ => vec![value.scalar_text()],
    };

    if mode == CONTACT_MODE_DEPARTMENT {
        Some(ContentValue::Departments(
            ids.into_iter()
                .map(|id| Department { open_api_id: id })
                .collect(),
        ))
    } else {
        Some(ContentValue::Members(
            ids.into_iter().map(|id| Member { user_id: id }).collect(),
        ))
    }
}

fn handle_file(value: &FieldValue) -> Option<ContentValue> {
    // Unset attachment field: suppress the entry.
    if value.is_zero() {
        return None;
    }
    let files = match value {
        FieldValue::List(items) => items
            .iter()
            .map(|item| FileRef {
                file_id: item.scalar_text(),
            })
            .collect(),
        _ => vec![FileRef {
            file_id: value.scalar_text(),
        }],
    };
    Some(ContentValue::Files(files))
}
