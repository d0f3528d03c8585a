// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use thiserror::Error;

use crate::{Entity, FormMode, Record, Submission};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Open,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModalError {
    #[error("form is not open")]
    NotOpen,
    #[error("form is already open")]
    AlreadyOpen,
    #[error("a submission is already in progress")]
    Submitting,
    #[error("no submission is in progress")]
    NotSubmitting,
}

/// Create/edit modal lifecycle for one screen.
///
/// `Closed -> Open -> Submitting -> Closed` on success,
/// `Submitting -> Open` with the error kept for display on failure, and
/// `Open -> Closed` on cancel. A submission in flight cannot be cancelled
/// or submitted twice.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState<E> {
    Closed,
    Open {
        mode: FormMode<E>,
        draft: E,
        error: Option<String>,
    },
    Submitting {
        mode: FormMode<E>,
        draft: E,
    },
}

impl<E> Default for ModalState<E> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<E: Entity> ModalState<E> {
    pub fn phase(&self) -> ModalPhase {
        match self {
            Self::Closed => ModalPhase::Closed,
            Self::Open { .. } => ModalPhase::Open,
            Self::Submitting { .. } => ModalPhase::Submitting,
        }
    }

    pub fn mode(&self) -> Option<&FormMode<E>> {
        match self {
            Self::Closed => None,
            Self::Open { mode, .. } | Self::Submitting { mode, .. } => Some(mode),
        }
    }

    pub fn draft(&self) -> Option<&E> {
        match self {
            Self::Closed => None,
            Self::Open { draft, .. } | Self::Submitting { draft, .. } => Some(draft),
        }
    }

    /// Draft is only editable while the form is open and idle.
    pub fn draft_mut(&mut self) -> Option<&mut E> {
        match self {
            Self::Open { draft, .. } => Some(draft),
            Self::Closed | Self::Submitting { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Open { error, .. } => error.as_deref(),
            Self::Closed | Self::Submitting { .. } => None,
        }
    }

    pub fn open_create(&mut self) -> Result<(), ModalError> {
        self.open(FormMode::Create)
    }

    pub fn open_edit(&mut self, record: Record<E>) -> Result<(), ModalError> {
        self.open(FormMode::Edit(record))
    }

    fn open(&mut self, mode: FormMode<E>) -> Result<(), ModalError> {
        if !matches!(self, Self::Closed) {
            return Err(ModalError::AlreadyOpen);
        }
        let draft = mode.initial_draft();
        *self = Self::Open {
            mode,
            draft,
            error: None,
        };
        Ok(())
    }

    /// Moves `Open` to `Submitting` and hands back what to send to the gateway.
    pub fn begin_submit(&mut self) -> Result<Submission<E>, ModalError> {
        match std::mem::take(self) {
            Self::Open { mode, draft, .. } => {
                let submission = Submission::from_mode(&mode, draft.clone());
                *self = Self::Submitting { mode, draft };
                Ok(submission)
            }
            Self::Submitting { mode, draft } => {
                *self = Self::Submitting { mode, draft };
                Err(ModalError::Submitting)
            }
            Self::Closed => Err(ModalError::NotOpen),
        }
    }

    pub fn complete(&mut self) -> Result<(), ModalError> {
        if !matches!(self, Self::Submitting { .. }) {
            return Err(ModalError::NotSubmitting);
        }
        *self = Self::Closed;
        Ok(())
    }

    /// Returns to `Open` keeping the user's input so it can be corrected.
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), ModalError> {
        match std::mem::take(self) {
            Self::Submitting { mode, draft } => {
                *self = Self::Open {
                    mode,
                    draft,
                    error: Some(reason.into()),
                };
                Ok(())
            }
            other => {
                *self = other;
                Err(ModalError::NotSubmitting)
            }
        }
    }

    /// Discards uncommitted input.
    pub fn cancel(&mut self) -> Result<(), ModalError> {
        match self {
            Self::Open { .. } => {
                *self = Self::Closed;
                Ok(())
            }
            Self::Submitting { .. } => Err(ModalError::Submitting),
            Self::Closed => Err(ModalError::NotOpen),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ModalError, ModalPhase, ModalState};
    use crate::{Colour, FormMode, Record, RecordId, Submission};
    use time::{Date, Month};

    fn red() -> Record<Colour> {
        Record {
            id: RecordId::new(1),
            created_on: Date::from_calendar_date(2024, Month::January, 5).expect("valid date"),
            data: Colour {
                name: "Red".to_owned(),
                code: "#FF0000".to_owned(),
                description: "Bright and bold red color.".to_owned(),
            },
        }
    }

    #[test]
    fn create_submit_success_closes() -> Result<(), ModalError> {
        let mut modal = ModalState::<Colour>::default();
        modal.open_create()?;
        assert_eq!(modal.phase(), ModalPhase::Open);

        if let Some(draft) = modal.draft_mut() {
            draft.name = "Teal".to_owned();
            draft.code = "#008080".to_owned();
        }
        let submission = modal.begin_submit()?;
        assert!(matches!(submission, Submission::Create(ref colour) if colour.name == "Teal"));
        assert_eq!(modal.phase(), ModalPhase::Submitting);
        assert!(modal.draft_mut().is_none());

        modal.complete()?;
        assert_eq!(modal, ModalState::Closed);
        Ok(())
    }

    #[test]
    fn second_submit_while_pending_is_rejected() -> Result<(), ModalError> {
        let mut modal = ModalState::<Colour>::default();
        modal.open_edit(red())?;
        modal.begin_submit()?;
        assert_eq!(modal.begin_submit(), Err(ModalError::Submitting));
        assert_eq!(modal.phase(), ModalPhase::Submitting);
        assert_eq!(modal.cancel(), Err(ModalError::Submitting));
        Ok(())
    }

    #[test]
    fn failure_reopens_with_error_and_input_kept() -> Result<(), ModalError> {
        let mut modal = ModalState::<Colour>::default();
        modal.open_edit(red())?;
        if let Some(draft) = modal.draft_mut() {
            draft.code.clear();
        }
        modal.begin_submit()?;
        modal.fail("Colour is missing required fields: code")?;

        assert_eq!(modal.phase(), ModalPhase::Open);
        assert_eq!(
            modal.error(),
            Some("Colour is missing required fields: code")
        );
        assert_eq!(modal.draft().map(|draft| draft.code.as_str()), Some(""));
        assert!(matches!(modal.mode(), Some(FormMode::Edit(_))));
        Ok(())
    }

    #[test]
    fn cancel_discards_draft() -> Result<(), ModalError> {
        let mut modal = ModalState::<Colour>::default();
        modal.open_create()?;
        modal.cancel()?;
        assert_eq!(modal.draft(), None);
        assert_eq!(modal.cancel(), Err(ModalError::NotOpen));
        Ok(())
    }

    #[test]
    fn transitions_from_wrong_phase_fail() {
        let mut modal = ModalState::<Colour>::default();
        assert_eq!(modal.begin_submit(), Err(ModalError::NotOpen));
        assert_eq!(modal.complete(), Err(ModalError::NotSubmitting));
        assert_eq!(modal.fail("boom"), Err(ModalError::NotSubmitting));

        assert_eq!(modal.open_create(), Ok(()));
        assert_eq!(modal.open_edit(red()), Err(ModalError::AlreadyOpen));
    }
}
