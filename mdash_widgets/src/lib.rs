//! Widget model for the mDash device dashboard.
//!
//! Widgets are built through the constructors on [`Widget`], collected in
//! insertion order by a [`WidgetCollection`] and rendered into the device
//! shadow documents the dashboard understands. [`import_widgets`] builds a
//! collection from the fixed-shape [`WidgetsConfig`].
//!
//! ```rust
//! use mdash_widgets::{Widget, WidgetCollection, ui_document};
//!
//! let mut widgets = WidgetCollection::with_capacity(2)?;
//! widgets.add(Widget::value("free RAM:", "ram")?)?;
//! widgets.add(Widget::toggle("LED", "led")?)?;
//!
//! assert_eq!(
//!     ui_document(&widgets),
//!     r#"{"shadow":{"tags":{"ui":{"widgets":[{"type":"value","title":"free RAM:","key":"ram"}, {"type":"toggle","title":"LED","key":"led"}]}}}}"#
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod collection;
mod config;
mod error;
mod importer;
mod json;
mod widget;

pub use collection::{GROWTH_INCREMENT, WidgetCollection};
pub use config::{
    BUTTON_SLOTS, ButtonSlot, INPUT_SLOTS, KeyedSlot, Slots, TOGGLE_SLOTS,
    VALUE_SLOTS, WidgetsConfig,
};
pub use error::{CollectionError, WidgetError};
pub use importer::import_widgets;
pub use json::{INPUT_ICON, label_document, ui_document};
pub use widget::{Widget, WidgetKind};
