use tracing::debug;

use crate::collection::WidgetCollection;
use crate::config::WidgetsConfig;
use crate::error::{CollectionError, WidgetError};
use crate::widget::Widget;

fn add_slot(
    widgets: &mut WidgetCollection,
    category: &str,
    index: usize,
    built: Result<Widget, WidgetError>,
) -> Result<(), CollectionError> {
    match built {
        Ok(widget) => widgets.add(widget),
        Err(e) => {
            debug!("Skipping {} slot {}: {}", category, index, e);
            Ok(())
        }
    }
}

/// Build the dashboard widgets described by `config`.
///
/// Widgets are added as all values, then inputs, toggles and buttons, each
/// category in slot order. Disabled slots and slots missing a required field
/// are skipped.
///
/// # Errors
/// If the collection cannot be allocated or grown.
pub fn import_widgets(
    config: &WidgetsConfig,
) -> Result<WidgetCollection, CollectionError> {
    let mut widgets = WidgetCollection::with_capacity(config.enabled_count())?;

    for (index, slot) in config.value.iter().enumerate() {
        if slot.enable {
            let built = Widget::value(&slot.title, &slot.key);
            add_slot(&mut widgets, "value", index, built)?;
        }
    }

    for (index, slot) in config.input.iter().enumerate() {
        if slot.enable {
            let built = Widget::input(&slot.title, &slot.key);
            add_slot(&mut widgets, "input", index, built)?;
        }
    }

    for (index, slot) in config.toggle.iter().enumerate() {
        if slot.enable {
            let built = Widget::toggle(&slot.title, &slot.key);
            add_slot(&mut widgets, "toggle", index, built)?;
        }
    }

    for (index, slot) in config.button.iter().enumerate() {
        if slot.enable {
            let built = Widget::button(
                &slot.title,
                &slot.method,
                slot.params.as_deref(),
                slot.icon.as_deref(),
            );
            add_slot(&mut widgets, "button", index, built)?;
        }
    }

    debug!("Imported {} widgets from config", widgets.len());

    Ok(widgets)
}
