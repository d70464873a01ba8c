use tracing::error;

use crate::error::{CollectionError, WidgetError};
use crate::widget::Widget;

/// Number of slots added whenever a full collection receives a widget.
pub const GROWTH_INCREMENT: usize = 2;

/// Ordered set of widgets making up one dashboard UI.
///
/// Insertion order is the rendering order on the dashboard. The collection
/// owns its widgets; dropping it drops all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetCollection {
    widgets: Vec<Widget>,
}

impl WidgetCollection {
    /// Create an empty collection with room for `hint` widgets.
    ///
    /// # Errors
    /// If the backing storage cannot be allocated.
    pub fn with_capacity(hint: usize) -> Result<Self, CollectionError> {
        let mut widgets = Vec::new();
        widgets.try_reserve_exact(hint)?;

        Ok(Self { widgets })
    }

    /// Append `widget` after every widget already in the collection.
    ///
    /// # Errors
    /// If the collection is full and cannot grow. The collection is left
    /// untouched in that case.
    pub fn add(&mut self, widget: Widget) -> Result<(), CollectionError> {
        if self.widgets.len() == self.widgets.capacity() {
            self.widgets.try_reserve_exact(GROWTH_INCREMENT)?;
        }

        self.widgets.push(widget);
        Ok(())
    }

    /// Append the outcome of a widget constructor.
    ///
    /// A failed construction is logged and skipped. Returns whether a widget
    /// was added.
    ///
    /// # Errors
    /// If the collection cannot grow.
    pub fn add_built(
        &mut self,
        built: Result<Widget, WidgetError>,
    ) -> Result<bool, CollectionError> {
        match built {
            Ok(widget) => {
                self.add(widget)?;
                Ok(true)
            }
            Err(e) => {
                error!("Not adding widget: {}", e);
                Ok(false)
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.widgets.capacity()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Widget> {
        self.widgets.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Widget> {
        self.widgets.iter()
    }
}

impl<'a> IntoIterator for &'a WidgetCollection {
    type Item = &'a Widget;
    type IntoIter = std::slice::Iter<'a, Widget>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
