// Field classification - which editable elements each feature may touch

use serde::{Deserialize, Serialize};

/// Element tag of a candidate field
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldTag {
    Input,
    TextArea,
    #[default]
    Other,
}

/// What the host knows about an editable element
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldDescriptor {
    pub tag: FieldTag,
    /// The `type` attribute of an `<input>`; `None` is read as `text`
    pub input_type: Option<String>,
    pub autocomplete: Option<String>,
    pub content_editable: bool,
    /// Hidden through styling (`display: none`)
    pub hidden: bool,
    pub value: String,
    /// Set by the host once an autofill offer was considered for the field
    pub processed: bool,
}

const EXPANSION_INPUT_TYPES: &[&str] = &["text", "search", "email", "url"];
const AUTOFILL_INPUT_TYPES: &[&str] = &["text", "email", "tel", "password"];
const RECORD_INPUT_TYPES: &[&str] = &["text", "email", "tel"];

impl FieldDescriptor {
    pub fn input(input_type: &str) -> Self {
        Self {
            tag: FieldTag::Input,
            input_type: Some(input_type.to_string()),
            ..Default::default()
        }
    }

    pub fn textarea() -> Self {
        Self {
            tag: FieldTag::TextArea,
            ..Default::default()
        }
    }

    pub fn content_editable() -> Self {
        Self {
            content_editable: true,
            ..Default::default()
        }
    }

    fn input_type(&self) -> String {
        self.input_type
            .as_deref()
            .unwrap_or("text")
            .to_ascii_lowercase()
    }

    fn is_input_of(&self, types: &[&str]) -> bool {
        self.tag == FieldTag::Input && types.contains(&self.input_type().as_str())
    }

    /// Password and payment-card fields are never expanded
    pub fn is_sensitive(&self) -> bool {
        if self.tag == FieldTag::Input && self.input_type() == "password" {
            return true;
        }

        match self.autocomplete.as_deref() {
            Some(ac) => {
                let ac = ac.to_ascii_lowercase();
                ac.contains("cc-") || ac.contains("card") || ac == "credit-card-number"
            }
            None => false,
        }
    }

    /// Whether typed shortcuts in this field may be expanded
    pub fn accepts_expansion(&self) -> bool {
        let text_like = self.content_editable
            || self.tag == FieldTag::TextArea
            || self.is_input_of(EXPANSION_INPUT_TYPES);
        text_like && !self.is_sensitive()
    }

    /// Whether an autofill offer may be attached to this field
    pub fn accepts_autofill(&self) -> bool {
        let supported = self.tag == FieldTag::TextArea || self.is_input_of(AUTOFILL_INPUT_TYPES);
        supported && self.value.is_empty() && !self.hidden && !self.processed
    }

    /// Whether a value typed into this field may be recorded as an answer
    pub fn accepts_recording(&self) -> bool {
        self.tag == FieldTag::TextArea || self.is_input_of(RECORD_INPUT_TYPES)
    }
}

#[cfg(test)]
#[path = "field_test.rs"]
mod tests;
