//! The state machine behind the asset form.
//!
//! The form is either creating a new asset or editing an existing one, never
//! both. [Draft] makes the two modes explicit so the form can never hold an
//! edit draft alongside a create draft.

use crate::asset::{Asset, AssetField, AssetForm};

/// The asset being written in the form.
#[derive(Debug, Clone, PartialEq)]
pub enum Draft {
    /// A new asset, starting from [Asset::new_draft].
    Create(Asset),
    /// A copy of an existing asset.
    Edit {
        /// The dealer ID of the asset being edited, used to address the update.
        original_id: String,
        /// The edited copy.
        asset: Asset,
    },
}

impl Default for Draft {
    fn default() -> Self {
        Draft::Create(Asset::new_draft())
    }
}

/// The backend write produced by submitting a [Draft].
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Create the asset.
    Create(Asset),
    /// Replace the asset with the same dealer ID.
    Update(Asset),
}

/// Owns the form's draft and the transitions between create and edit mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Editor {
    draft: Draft,
}

impl Editor {
    /// An editor in create mode with the default draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current draft.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The asset in the current draft, whichever mode the editor is in.
    pub fn asset(&self) -> &Asset {
        match &self.draft {
            Draft::Create(asset) => asset,
            Draft::Edit { asset, .. } => asset,
        }
    }

    /// Whether the editor is editing an existing asset.
    pub fn is_editing(&self) -> bool {
        matches!(self.draft, Draft::Edit { .. })
    }

    /// Set `field` in the current draft to `value`.
    ///
    /// The dealer ID addresses the asset being edited, so edits to it are
    /// ignored in edit mode.
    pub fn set_field(&mut self, field: AssetField, value: &str) {
        match &mut self.draft {
            Draft::Create(asset) => *asset.field_mut(field) = value.to_owned(),
            Draft::Edit { original_id, .. } if field == AssetField::DealerId => {
                tracing::debug!("Ignoring dealer ID change while editing {original_id}");
            }
            Draft::Edit { asset, .. } => *asset.field_mut(field) = value.to_owned(),
        }
    }

    /// Apply every field present in `form` to the current draft.
    pub fn apply_form(&mut self, form: &AssetForm) {
        for (field, value) in form.fields() {
            self.set_field(field, value);
        }
    }

    /// Start editing a copy of `asset`.
    ///
    /// Any draft in progress, including another edit, is discarded.
    pub fn start_edit(&mut self, asset: &Asset) {
        self.draft = Draft::Edit {
            original_id: asset.dealer_id.clone(),
            asset: asset.clone(),
        };
    }

    /// Discard the current draft and go back to create mode.
    pub fn cancel(&mut self) {
        self.draft = Draft::default();
    }

    /// Take the current draft as a backend write and reset to create mode.
    ///
    /// The reset happens here, before the write is sent, so the form is
    /// cleared whether or not the write succeeds.
    pub fn submit(&mut self) -> Submission {
        match std::mem::take(&mut self.draft) {
            Draft::Create(asset) => Submission::Create(asset),
            Draft::Edit {
                original_id,
                mut asset,
            } => {
                asset.dealer_id = original_id;
                Submission::Update(asset)
            }
        }
    }
}
