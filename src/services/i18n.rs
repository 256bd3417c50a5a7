use std::collections::HashMap;

/// A translatable message: catalog id plus the source-language text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub id: &'static str,
    pub default: &'static str,
}

/// Tooltip 'Created at [some date]' showing the exact creation time of a
/// persistent volume.
pub const MSG_PERSISTENT_VOLUME_LIST_CREATED_AT_TOOLTIP: Message = Message {
    id: "MSG_PERSISTENT_VOLUME_LIST_CREATED_AT_TOOLTIP",
    default: "Created at {$creationDate}",
};

/// Tooltip shown when the creation time is missing or unreadable.
pub const MSG_PERSISTENT_VOLUME_LIST_CREATED_AT_UNKNOWN_TOOLTIP: Message = Message {
    id: "MSG_PERSISTENT_VOLUME_LIST_CREATED_AT_UNKNOWN_TOOLTIP",
    default: "Created at unknown time",
};

pub trait Translator: Send + Sync {
    fn translate(&self, message: &Message, params: &[(&str, &str)]) -> String;
}

/// Per-locale overrides keyed by message id. Ids without an override render
/// the message's default text.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    locale: String,
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new(locale: impl Into<String>, messages: HashMap<String, String>) -> Self {
        Self {
            locale: locale.into(),
            messages,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl Translator for MessageCatalog {
    fn translate(&self, message: &Message, params: &[(&str, &str)]) -> String {
        let template = self
            .messages
            .get(message.id)
            .map(String::as_str)
            .unwrap_or(message.default);
        interpolate(template, params)
    }
}

/// Substitutes `{$name}` placeholders in one pass. Unknown placeholders are
/// left as written; substituted values are never re-scanned.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{$") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = &after[..end];
        match params.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 1]),
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}
