// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use thiserror::Error;

use crate::{Entity, EntityKind, Record, RecordId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "{} is missing required fields: {} -- fill them in and retry",
        .entity.label(),
        .fields.join(", ")
    )]
    MissingFields {
        entity: EntityKind,
        fields: Vec<&'static str>,
    },

    #[error("{} is invalid: {reason}", .entity.label())]
    Invalid { entity: EntityKind, reason: String },
}

impl ValidationError {
    pub fn entity(&self) -> EntityKind {
        match self {
            Self::MissingFields { entity, .. } | Self::Invalid { entity, .. } => *entity,
        }
    }
}

/// Names of required fields that are blank in `data`, in declaration order.
pub fn missing_required<E: Entity>(data: &E) -> Vec<&'static str> {
    E::REQUIRED
        .iter()
        .copied()
        .filter(|name| data.field(name).is_none_or(|value| value.is_blank()))
        .collect()
}

/// Runs the required-field check, then the entity's own rules.
pub fn validate<E: Entity>(data: &E) -> Result<(), ValidationError> {
    let missing = missing_required(data);
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields {
            entity: E::KIND,
            fields: missing,
        });
    }
    data.check()
}

/// Whether a modal form is creating a new record or editing an existing one.
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode<E> {
    Create,
    Edit(Record<E>),
}

impl<E: Entity> FormMode<E> {
    /// Draft a form starts from: blank for create, the stored values for edit.
    pub fn initial_draft(&self) -> E {
        match self {
            Self::Create => E::default(),
            Self::Edit(record) => record.data.clone(),
        }
    }

    pub fn editing_id(&self) -> Option<RecordId> {
        match self {
            Self::Create => None,
            Self::Edit(record) => Some(record.id),
        }
    }
}

/// What a submitted form asks the gateway to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<E> {
    Create(E),
    Update(RecordId, E),
}

impl<E: Entity> Submission<E> {
    pub fn from_mode(mode: &FormMode<E>, draft: E) -> Self {
        match mode.editing_id() {
            Some(id) => Self::Update(id, draft),
            None => Self::Create(draft),
        }
    }

    pub fn data(&self) -> &E {
        match self {
            Self::Create(data) | Self::Update(_, data) => data,
        }
    }
}
