//! Edit Session
//!
//! State of a create/update modal: whether it is open, which record it edits
//! and the current field values.

/// Modal view-model; `editing_id` set means the form updates that record
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditSession<F> {
    pub open: bool,
    pub editing_id: Option<String>,
    pub form: F,
}

impl<F: Default> EditSession<F> {
    /// Open empty, in create mode
    pub fn create() -> Self {
        Self {
            open: true,
            editing_id: None,
            form: F::default(),
        }
    }

    /// Open prefilled, in update mode
    pub fn edit(id: impl Into<String>, form: F) -> Self {
        Self {
            open: true,
            editing_id: Some(id.into()),
            form,
        }
    }

    /// Closed, reset, no record selected
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn is_update(&self) -> bool {
        self.editing_id.is_some()
    }
}
