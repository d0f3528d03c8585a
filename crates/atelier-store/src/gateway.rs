// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use async_trait::async_trait;
use atelier_app::{Entity, EntityKind, Record, RecordId, ValidationError, validate};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::export::ExportError;
use crate::notify::{Notification, Notifier};
use crate::store::{Store, StoreError};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{} {id} not found", .entity.label())]
    NotFound { entity: EntityKind, id: RecordId },

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for GatewayError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { entity, id } => Self::NotFound { entity, id },
            other => Self::Store(other),
        }
    }
}

/// Port through which screens read and mutate one entity's records.
///
/// Every mutation reports its outcome through the gateway's notifier, so
/// callers only need the returned value for control flow.
#[async_trait]
pub trait MutationGateway<E: Entity>: Send + Sync {
    async fn list(&self) -> Vec<Record<E>>;

    async fn get(&self, id: RecordId) -> Option<Record<E>>;

    /// Validates and stores a new record with the next id and today's date.
    async fn create(&self, data: E) -> Result<Record<E>, GatewayError>;

    /// Validates and replaces the data of an existing record.
    async fn update(&self, id: RecordId, data: E) -> Result<Record<E>, GatewayError>;

    /// Removes a record. Deleting an absent id succeeds and returns false.
    async fn delete(&self, id: RecordId) -> bool;
}

/// Gateway backed by a screen-scoped in-memory store.
pub struct InMemoryGateway<E, N> {
    store: RwLock<Store<E>>,
    notifier: N,
}

impl<E: Entity, N: Notifier> InMemoryGateway<E, N> {
    pub fn new(store: Store<E>, notifier: N) -> Self {
        Self {
            store: RwLock::new(store),
            notifier,
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn report_failure(&self, action: &str, error: &GatewayError) {
        warn!(entity = %E::KIND, action, %error, "mutation rejected");
        self.notifier.notify(Notification::error(error.to_string()));
    }

    fn report_success(&self, action: &str, id: RecordId) {
        info!(entity = %E::KIND, action, %id, "mutation applied");
        self.notifier.notify(Notification::success(format!(
            "{} {action} successfully",
            E::KIND.label()
        )));
    }
}

#[async_trait]
impl<E: Entity, N: Notifier> MutationGateway<E> for InMemoryGateway<E, N> {
    async fn list(&self) -> Vec<Record<E>> {
        let store = self.store.read().await;
        debug!(entity = %E::KIND, count = store.len(), "listing records");
        store.get_all().to_vec()
    }

    async fn get(&self, id: RecordId) -> Option<Record<E>> {
        self.store.read().await.get(id).cloned()
    }

    async fn create(&self, data: E) -> Result<Record<E>, GatewayError> {
        if let Err(error) = validate(&data) {
            let error = GatewayError::from(error);
            self.report_failure("create", &error);
            return Err(error);
        }
        let record = self.store.write().await.insert(data);
        self.report_success("created", record.id);
        Ok(record)
    }

    async fn update(&self, id: RecordId, data: E) -> Result<Record<E>, GatewayError> {
        let result = match validate(&data) {
            Ok(()) => self
                .store
                .write()
                .await
                .replace(id, data)
                .map_err(GatewayError::from),
            Err(error) => Err(error.into()),
        };
        match result {
            Ok(record) => {
                self.report_success("updated", record.id);
                Ok(record)
            }
            Err(error) => {
                self.report_failure("update", &error);
                Err(error)
            }
        }
    }

    async fn delete(&self, id: RecordId) -> bool {
        let removed = self.store.write().await.remove(id);
        if !removed {
            debug!(entity = %E::KIND, %id, "delete of absent record");
        }
        self.report_success("deleted", id);
        removed
    }
}
