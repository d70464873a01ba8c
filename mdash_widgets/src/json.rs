use serde_json::Value as JsonValue;

use crate::collection::WidgetCollection;
use crate::widget::{Widget, WidgetKind};

/// Icon the dashboard shows next to every input widget.
pub const INPUT_ICON: &str = "fa-save";

const UI_DOCUMENT_OPEN: &str = r#"{"shadow":{"tags":{"ui":{"widgets":["#;
const UI_DOCUMENT_CLOSE: &str = "]}}}}";
const WIDGET_SEPARATOR: &str = ", ";

fn push_quoted(out: &mut String, value: &str) {
    out.push_str(&JsonValue::String(value.to_string()).to_string());
}

fn push_field(out: &mut String, name: &str, value: &str) {
    push_quoted(out, name);
    out.push(':');
    push_quoted(out, value);
}

fn push_keyed(out: &mut String, kind: &str, title: &str, key: &str) {
    out.push('{');
    push_field(out, "type", kind);
    out.push(',');
    push_field(out, "title", title);
    out.push(',');
    push_field(out, "key", key);
    out.push('}');
}

impl Widget {
    /// Render this widget as the JSON object the dashboard expects.
    #[must_use]
    pub fn to_json(&self) -> String {
        let mut out = String::new();
        self.write_json(&mut out);
        out
    }

    fn write_json(&self, out: &mut String) {
        let kind = self.kind().name();

        match self.kind() {
            WidgetKind::Toggle { key } | WidgetKind::Value { key } => {
                push_keyed(out, kind, self.title(), key);
            }
            WidgetKind::Button {
                method,
                params,
                icon,
            } => {
                out.push('{');
                push_field(out, "type", kind);
                out.push(',');
                push_field(out, "title", self.title());
                out.push(',');
                push_field(out, "icon", icon.as_deref().unwrap_or_default());
                out.push(',');
                push_field(out, "method", method);
                // params are embedded as-is, not quoted
                out.push_str(r#","params":{"#);
                out.push_str(params);
                out.push_str("}}");
            }
            WidgetKind::Input { key } => {
                out.push('{');
                push_field(out, "type", kind);
                out.push(',');
                push_field(out, "icon", INPUT_ICON);
                out.push(',');
                push_field(out, "title", self.title());
                out.push(',');
                push_field(out, "key", key);
                out.push('}');
            }
        }
    }
}

/// Render the shadow update that replaces the dashboard UI with `widgets`.
#[must_use]
pub fn ui_document(widgets: &WidgetCollection) -> String {
    let mut out = String::from(UI_DOCUMENT_OPEN);

    for (emitted, widget) in widgets.iter().enumerate() {
        if emitted > 0 {
            out.push_str(WIDGET_SEPARATOR);
        }
        widget.write_json(&mut out);
    }

    out.push_str(UI_DOCUMENT_CLOSE);
    out
}

/// Render the shadow update that sets the device label.
///
/// `default_label` is used when no label is given.
#[must_use]
pub fn label_document(label: Option<&str>, default_label: &str) -> String {
    let mut out = String::from(r#"{"shadow":{"tags":{"#);
    push_field(&mut out, "labels", label.unwrap_or(default_label));
    out.push_str("}}}");
    out
}
