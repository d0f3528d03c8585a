// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use atelier_app::{Entity, EntityKind, FieldError, Record, RecordId, Value};
use std::collections::HashSet;
use thiserror::Error;
use time::{Date, OffsetDateTime};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{} {id} not found", .entity.label())]
    NotFound { entity: EntityKind, id: RecordId },

    #[error("{} id {id} appears more than once in seed data", .entity.label())]
    DuplicateId { entity: EntityKind, id: RecordId },

    #[error("{} id {id} is outside 1..={max}", .entity.label(), max = MAX_SEED_ID)]
    IdOutOfRange { entity: EntityKind, id: RecordId },

    #[error("{} update rejected: {source}", .entity.label())]
    Field {
        entity: EntityKind,
        #[source]
        source: FieldError,
    },
}

/// Largest id accepted from seed data. Inserts count up from the largest id
/// held, so the headroom above this bound cannot be exhausted in memory.
pub const MAX_SEED_ID: RecordId = RecordId::new(i64::MAX / 2);

/// Current local date, falling back to UTC when the local offset cannot be
/// determined.
pub fn local_today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Ordered in-memory collection of one entity type, scoped to a screen.
#[derive(Debug, Clone)]
pub struct Store<E> {
    records: Vec<Record<E>>,
    today: fn() -> Date,
}

impl<E: Entity> Default for Store<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Store<E> {
    pub fn new() -> Self {
        Self::with_clock(local_today)
    }

    pub fn with_clock(today: fn() -> Date) -> Self {
        Self {
            records: Vec::new(),
            today,
        }
    }

    /// Seeds a store with fixed records, keeping their ids and dates.
    pub fn from_records(records: Vec<Record<E>>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.id < RecordId::new(1) || record.id > MAX_SEED_ID {
                return Err(StoreError::IdOutOfRange {
                    entity: E::KIND,
                    id: record.id,
                });
            }
            if !seen.insert(record.id) {
                return Err(StoreError::DuplicateId {
                    entity: E::KIND,
                    id: record.id,
                });
            }
        }
        Ok(Self {
            records,
            today: local_today,
        })
    }

    pub fn get_all(&self) -> &[Record<E>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&Record<E>> {
        self.records.iter().find(|record| record.id == id)
    }

    /// One past the largest id in the store, or 1 when empty.
    pub fn next_id(&self) -> RecordId {
        self.records
            .iter()
            .map(|record| record.id)
            .max()
            .unwrap_or(RecordId::new(0))
            .next()
    }

    pub fn insert(&mut self, data: E) -> Record<E> {
        let record = Record {
            id: self.next_id(),
            created_on: (self.today)(),
            data,
        };
        self.records.push(record.clone());
        record
    }

    /// Overwrites every field of the matching record; id and creation date
    /// are kept.
    pub fn replace(&mut self, id: RecordId, data: E) -> Result<Record<E>, StoreError> {
        let record = self.find_mut(id)?;
        record.data = data;
        Ok(record.clone())
    }

    /// Applies named field updates. Either every field applies or the record
    /// is left untouched.
    pub fn patch(&mut self, id: RecordId, fields: &[(&str, Value)]) -> Result<Record<E>, StoreError> {
        let record = self.find_mut(id)?;
        let mut data = record.data.clone();
        for (name, value) in fields {
            data.set_field(name, value.clone())
                .map_err(|source| StoreError::Field {
                    entity: E::KIND,
                    source,
                })?;
        }
        record.data = data;
        Ok(record.clone())
    }

    /// Removes the matching record. Returns whether anything was removed;
    /// an absent id is not an error.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() != before
    }

    fn find_mut(&mut self, id: RecordId) -> Result<&mut Record<E>, StoreError> {
        self.records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::NotFound {
                entity: E::KIND,
                id,
            })
    }
}
