// Label inference - derives the question a form field is asking
// DOM access goes through the FieldContext trait so the chain stays testable

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A preceding sibling element as seen from the field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiblingNode {
    /// Whether the sibling is a `<label>` element
    pub is_label: bool,
    /// Text content of the sibling (untrimmed)
    pub text: String,
}

impl SiblingNode {
    pub fn label(text: impl Into<String>) -> Self {
        Self {
            is_label: true,
            text: text.into(),
        }
    }

    pub fn element(text: impl Into<String>) -> Self {
        Self {
            is_label: false,
            text: text.into(),
        }
    }
}

/// Read-only view of the DOM around a single form field.
///
/// Implemented by the host; every method may return `None` (or an empty
/// list) when the element has no such neighbour.
pub trait FieldContext {
    /// The field's `id` attribute
    fn element_id(&self) -> Option<String>;

    /// Text of the `<label for="{id}">` element, if one exists
    fn label_for(&self, id: &str) -> Option<String>;

    /// Preceding sibling elements, nearest first
    fn preceding_siblings(&self) -> Vec<SiblingNode>;

    /// Text of the first `<label>` inside the field's parent element
    fn parent_label(&self) -> Option<String>;

    /// The field's `placeholder` attribute
    fn placeholder(&self) -> Option<String>;

    /// The field's `name` attribute
    fn name(&self) -> Option<String>;
}

/// Pre-extracted neighbourhood of a field.
///
/// Hosts that cannot hand out live DOM handles serialize this once per
/// field instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSnapshot {
    pub id: Option<String>,
    /// Label texts keyed by their `for` attribute
    pub labels_for: HashMap<String, String>,
    pub preceding_siblings: Vec<SiblingNode>,
    pub parent_label: Option<String>,
    pub placeholder: Option<String>,
    pub name: Option<String>,
}

impl FieldContext for FieldSnapshot {
    fn element_id(&self) -> Option<String> {
        self.id.clone()
    }

    fn label_for(&self, id: &str) -> Option<String> {
        self.labels_for.get(id).cloned()
    }

    fn preceding_siblings(&self) -> Vec<SiblingNode> {
        self.preceding_siblings.clone()
    }

    fn parent_label(&self) -> Option<String> {
        self.parent_label.clone()
    }

    fn placeholder(&self) -> Option<String> {
        self.placeholder.clone()
    }

    fn name(&self) -> Option<String> {
        self.name.clone()
    }
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

fn explicit_label(ctx: &dyn FieldContext) -> Option<String> {
    let id = non_empty(ctx.element_id())?;
    non_empty(ctx.label_for(&id))
}

/// Infer the label used to look up a saved answer.
///
/// Fallback order: `label[for=id]`, the nearest preceding sibling that is
/// a label or carries text, the parent's label, the placeholder, and
/// finally the `name` attribute with `-` and `_` read as spaces. Any
/// non-empty placeholder ends the search, even one that trims to nothing.
pub fn infer_label(ctx: &dyn FieldContext) -> Option<String> {
    explicit_label(ctx)
        .or_else(|| {
            ctx.preceding_siblings()
                .into_iter()
                .find(|s| s.is_label || !s.text.trim().is_empty())
                .and_then(|s| non_empty(Some(s.text)))
        })
        .or_else(|| non_empty(ctx.parent_label()))
        .or_else(|| match ctx.placeholder().filter(|p| !p.is_empty()) {
            Some(placeholder) => non_empty(Some(placeholder)),
            None => non_empty(ctx.name()).map(|name| name.replace(['-', '_'], " ")),
        })
}

/// Infer the label under which a typed value is recorded.
///
/// Stricter than [`infer_label`]: only real `<label>` elements count, so
/// placeholders and names never become stored questions. The first label
/// found decides; if its text is blank nothing is recorded.
pub fn recorded_label(ctx: &dyn FieldContext) -> Option<String> {
    let label = non_empty(ctx.element_id())
        .and_then(|id| ctx.label_for(&id))
        .or_else(|| {
            ctx.preceding_siblings()
                .into_iter()
                .find(|s| s.is_label)
                .map(|s| s.text)
        })
        .or_else(|| ctx.parent_label());
    non_empty(label)
}

#[cfg(test)]
#[path = "label_test.rs"]
mod tests;
