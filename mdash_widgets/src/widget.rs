use crate::error::WidgetError;

/// One dashboard control.
///
/// A widget can only be obtained through the constructors below, so every
/// widget in circulation has its required fields filled in and its kind
/// fixed for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    title: String,
    kind: WidgetKind,
}

/// Kind-specific payload of a [`Widget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetKind {
    /// Switch things on/off.
    Toggle { key: String },

    /// Show any `state.reported.KEY` shadow value.
    Value { key: String },

    /// Call an RPC method on the device.
    ///
    /// `params` holds the members of the params object verbatim, without the
    /// surrounding braces. It is empty when the call takes no parameters.
    Button {
        method: String,
        params: String,
        icon: Option<String>,
    },

    /// Show and change any `state.reported.KEY` shadow value.
    Input { key: String },
}

impl WidgetKind {
    /// The `type` tag used for this kind on the wire.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Toggle { .. } => "toggle",
            Self::Value { .. } => "value",
            Self::Button { .. } => "button",
            Self::Input { .. } => "input",
        }
    }
}

fn required(
    kind: &'static str,
    field: &'static str,
    value: &str,
) -> Result<String, WidgetError> {
    if value.is_empty() {
        return Err(WidgetError::MissingField { kind, field });
    }

    Ok(value.to_string())
}

impl Widget {
    /// Create a toggle widget bound to the shadow key `key`.
    ///
    /// # Errors
    /// If `title` or `key` is empty.
    pub fn toggle(title: &str, key: &str) -> Result<Self, WidgetError> {
        Ok(Self {
            title: required("toggle", "title", title)?,
            kind: WidgetKind::Toggle {
                key: required("toggle", "key", key)?,
            },
        })
    }

    /// Create a value widget displaying the shadow key `key`.
    ///
    /// # Errors
    /// If `title` or `key` is empty.
    pub fn value(title: &str, key: &str) -> Result<Self, WidgetError> {
        Ok(Self {
            title: required("value", "title", title)?,
            kind: WidgetKind::Value {
                key: required("value", "key", key)?,
            },
        })
    }

    /// Create a button calling the RPC `method`.
    ///
    /// `params` are the raw members of the JSON params object, e.g.
    /// `"pin":2,"state":true`. Missing params render as `{}`. A missing icon
    /// renders as an empty string.
    ///
    /// # Errors
    /// If `title` or `method` is empty.
    pub fn button(
        title: &str,
        method: &str,
        params: Option<&str>,
        icon: Option<&str>,
    ) -> Result<Self, WidgetError> {
        Ok(Self {
            title: required("button", "title", title)?,
            kind: WidgetKind::Button {
                method: required("button", "method", method)?,
                params: params.unwrap_or_default().to_string(),
                icon: icon.map(ToString::to_string),
            },
        })
    }

    /// Create an input widget editing the shadow key `key`.
    ///
    /// # Errors
    /// If `title` or `key` is empty.
    pub fn input(title: &str, key: &str) -> Result<Self, WidgetError> {
        Ok(Self {
            title: required("input", "title", title)?,
            kind: WidgetKind::Input {
                key: required("input", "key", key)?,
            },
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    /// The shadow key for toggle, value and input widgets.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match &self.kind {
            WidgetKind::Toggle { key }
            | WidgetKind::Value { key }
            | WidgetKind::Input { key } => Some(key),
            WidgetKind::Button { .. } => None,
        }
    }
}
