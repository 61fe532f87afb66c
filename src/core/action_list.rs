//! # Action List
//!
//! Fans the actions config out into one [`ActionForm`] per action. Every form
//! gets the same transport handle. The list itself never sends anything.

use std::sync::Arc;

use crate::core::form::ActionForm;
use crate::core::schema::ActionsConfig;
use crate::transport::Transport;

#[derive(Default)]
pub struct ActionList {
    forms: Vec<ActionForm>,
}

impl ActionList {
    /// Build the forms. `None` (no config loaded) yields an empty list.
    pub fn new(config: Option<&ActionsConfig>, transport: Arc<dyn Transport>) -> Self {
        let Some(config) = config else {
            return Self::default();
        };

        let forms = config
            .actions
            .iter()
            .map(|(name, schema)| ActionForm::new(name.clone(), schema.clone(), transport.clone()))
            .collect();

        Self { forms }
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionForm> {
        self.forms.iter()
    }

    pub fn get(&self, index: usize) -> Option<&ActionForm> {
        self.forms.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ActionForm> {
        self.forms.get_mut(index)
    }

    pub fn find(&self, name: &str) -> Option<&ActionForm> {
        self.forms.iter().find(|form| form.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.forms.iter().map(ActionForm::name).collect()
    }
}
