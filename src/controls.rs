use crate::catalog::OptionCatalog;
use crate::errors::SyncError;
use crate::models::{Selection, SelectorName};
use std::collections::HashMap;

/// Access to the page's selector controls.
pub trait Controls {
    fn selected_value(&self, name: SelectorName) -> Result<String, SyncError>;

    fn option_value(&self, name: SelectorName, index: usize) -> Result<String, SyncError>;

    fn set_selected_index(&mut self, name: SelectorName, index: usize) -> Result<(), SyncError>;
}

/// A `<select>`: its option values and the chosen index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectControl {
    pub options: Vec<String>,
    pub selected_index: usize,
}

impl SelectControl {
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            selected_index: 0,
        }
    }

    /// Selects `value`, putting it first in the list when it is not an option yet.
    pub fn with_selected(mut self, value: &str) -> Self {
        match self.options.iter().position(|option| option == value) {
            Some(index) => self.selected_index = index,
            None => {
                self.options.insert(0, value.to_string());
                self.selected_index = 0;
            }
        }
        self
    }

    pub fn selected(&self) -> Option<&str> {
        self.options.get(self.selected_index).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ControlSet {
    controls: HashMap<&'static str, SelectControl>,
}

impl ControlSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: SelectorName, control: SelectControl) {
        self.controls.insert(name.id(), control);
    }

    pub fn get(&self, name: SelectorName) -> Option<&SelectControl> {
        self.controls.get(name.id())
    }

    /// Controls for a page showing `selection`, with `dates` as the date options.
    pub fn from_catalog(catalog: &OptionCatalog, selection: &Selection, dates: Vec<String>) -> Self {
        let mut set = Self::new();
        set.insert(
            SelectorName::Date,
            SelectControl::new(dates).with_selected(&selection.date),
        );
        set.insert(
            SelectorName::Channel,
            SelectControl::new(catalog.channels.clone()).with_selected(&selection.channel),
        );
        set.insert(
            SelectorName::Product,
            SelectControl::new(catalog.products.clone()).with_selected(&selection.product),
        );
        set
    }

    fn control(&self, name: SelectorName) -> Result<&SelectControl, SyncError> {
        self.get(name).ok_or(SyncError::ElementNotFound { name })
    }
}

impl Controls for ControlSet {
    fn selected_value(&self, name: SelectorName) -> Result<String, SyncError> {
        self.control(name)?
            .selected()
            .map(str::to_string)
            .ok_or(SyncError::NoSelection { name })
    }

    fn option_value(&self, name: SelectorName, index: usize) -> Result<String, SyncError> {
        self.control(name)?
            .options
            .get(index)
            .cloned()
            .ok_or(SyncError::IndexOutOfRange { name, index })
    }

    fn set_selected_index(&mut self, name: SelectorName, index: usize) -> Result<(), SyncError> {
        let control = self
            .controls
            .get_mut(name.id())
            .ok_or(SyncError::ElementNotFound { name })?;
        if index >= control.options.len() {
            return Err(SyncError::IndexOutOfRange { name, index });
        }
        control.selected_index = index;
        Ok(())
    }
}
