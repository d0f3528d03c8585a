// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use atelier_app::{Entity, EntityKind, ModalError, ModalState, Record, RecordId, Submission};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::export;
use crate::gateway::{GatewayError, MutationGateway};
use crate::list::ListView;
use crate::notify::{Notification, Notifier};

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error(transparent)]
    Modal(#[from] ModalError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("{} not found", .entity.label())]
    NotFound { entity: EntityKind, id: RecordId },

    #[error("no delete is awaiting confirmation")]
    NoPendingDelete,
}

/// One management screen: list view, create/edit modal and delete
/// confirmation for a single entity type.
pub struct Screen<E, G> {
    gateway: G,
    notifier: Arc<dyn Notifier>,
    list: ListView<E>,
    modal: ModalState<E>,
    pending_delete: Option<RecordId>,
}

impl<E: Entity, G: MutationGateway<E>> Screen<E, G> {
    pub fn new(gateway: G, notifier: Arc<dyn Notifier>, page_size: usize) -> Self {
        Self {
            gateway,
            notifier,
            list: ListView::new(page_size),
            modal: ModalState::default(),
            pending_delete: None,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn list(&self) -> &ListView<E> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListView<E> {
        &mut self.list
    }

    pub fn modal(&self) -> &ModalState<E> {
        &self.modal
    }

    /// Draft being edited in the open modal.
    pub fn draft_mut(&mut self) -> Option<&mut E> {
        self.modal.draft_mut()
    }

    pub fn pending_delete(&self) -> Option<RecordId> {
        self.pending_delete
    }

    /// Loads the initial snapshot.
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        let records = self.gateway.list().await;
        debug!(entity = %E::KIND, count = records.len(), "refreshed list");
        self.list.set_records(records);
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.list.set_search(term);
    }

    pub fn set_filter(&mut self, term: impl Into<String>) {
        self.list.set_filter(term);
    }

    pub fn open_create(&mut self) -> Result<(), ScreenError> {
        self.modal.open_create()?;
        Ok(())
    }

    /// Opens the modal prefilled from the record with `id`. A missing id
    /// is reported and leaves the modal closed.
    pub fn open_edit(&mut self, id: RecordId) -> Result<(), ScreenError> {
        let Some(record) = self.find(id).cloned() else {
            let error = ScreenError::NotFound { entity: E::KIND, id };
            self.notifier.notify(Notification::error(error.to_string()));
            return Err(error);
        };
        self.modal.open_edit(record)?;
        Ok(())
    }

    /// Sends the open draft to the gateway. On success the modal closes and
    /// the list reloads; on failure the modal stays open with the draft and
    /// the error message.
    pub async fn submit(&mut self) -> Result<Record<E>, ScreenError> {
        let submission = self.modal.begin_submit()?;
        let result = match submission {
            Submission::Create(data) => self.gateway.create(data).await,
            Submission::Update(id, data) => self.gateway.update(id, data).await,
        };
        match result {
            Ok(record) => {
                self.modal.complete()?;
                self.refresh().await;
                Ok(record)
            }
            Err(error) => {
                self.modal.fail(error.to_string())?;
                Err(error.into())
            }
        }
    }

    pub fn cancel(&mut self) -> Result<(), ScreenError> {
        self.modal.cancel()?;
        Ok(())
    }

    /// Asks for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: RecordId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub async fn confirm_delete(&mut self) -> Result<bool, ScreenError> {
        let Some(id) = self.pending_delete.take() else {
            return Err(ScreenError::NoPendingDelete);
        };
        let removed = self.gateway.delete(id).await;
        self.refresh().await;
        Ok(removed)
    }

    /// Writes every record in the snapshot, not only the filtered ones, to
    /// the entity's export file in `dir`.
    pub fn export(&self, dir: &Path) -> Result<PathBuf, ScreenError> {
        match export::export_to_dir(self.list.records(), dir) {
            Ok(path) => {
                self.notifier.notify(Notification::success(format!(
                    "Exported {} records to {}",
                    self.list.records().len(),
                    path.display()
                )));
                Ok(path)
            }
            Err(error) => {
                self.notifier
                    .notify(Notification::error(format!("Export failed: {error}")));
                Err(GatewayError::from(error).into())
            }
        }
    }

    fn find(&self, id: RecordId) -> Option<&Record<E>> {
        self.list.records().iter().find(|record| record.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::{Screen, ScreenError};
    use crate::gateway::InMemoryGateway;
    use crate::notify::{NotificationKind, NotificationQueue};
    use crate::store::Store;
    use atelier_app::{Colour, ModalPhase, RecordId};
    use std::sync::Arc;

    type ColourScreen = Screen<Colour, InMemoryGateway<Colour, NotificationQueue>>;

    async fn mounted() -> (ColourScreen, NotificationQueue) {
        let queue = NotificationQueue::new();
        let gateway = InMemoryGateway::new(Store::new(), queue.clone());
        let mut screen = Screen::new(gateway, Arc::new(queue.clone()), 10);
        screen.mount().await;
        (screen, queue)
    }

    #[tokio::test]
    async fn create_flow_closes_modal_and_refreshes() {
        let (mut screen, queue) = mounted().await;
        screen.open_create().expect("closed modal opens");
        if let Some(draft) = screen.draft_mut() {
            draft.name = "Red".to_owned();
            draft.code = "#FF0000".to_owned();
        }
        let record = screen.submit().await.expect("valid draft");
        assert_eq!(record.id, RecordId::new(1));
        assert_eq!(screen.modal().phase(), ModalPhase::Closed);
        assert_eq!(screen.list().rows().len(), 1);
        assert_eq!(queue.drain()[0].message, "Colour created successfully");
    }

    #[tokio::test]
    async fn failed_submit_keeps_draft_and_error() {
        let (mut screen, _queue) = mounted().await;
        screen.open_create().expect("closed modal opens");
        if let Some(draft) = screen.draft_mut() {
            draft.name = "Red".to_owned();
        }
        assert!(matches!(
            screen.submit().await,
            Err(ScreenError::Gateway(_))
        ));
        assert_eq!(screen.modal().phase(), ModalPhase::Open);
        assert_eq!(screen.modal().draft().map(|d| d.name.as_str()), Some("Red"));
        assert!(
            screen
                .modal()
                .error()
                .is_some_and(|message| message.contains("code"))
        );
        assert!(screen.list().rows().is_empty());
    }

    #[tokio::test]
    async fn edit_of_missing_record_is_reported() {
        let (mut screen, queue) = mounted().await;
        assert!(matches!(
            screen.open_edit(RecordId::new(3)),
            Err(ScreenError::NotFound { .. })
        ));
        assert_eq!(screen.modal().phase(), ModalPhase::Closed);
        let notes = queue.drain();
        assert_eq!(notes[0].kind, NotificationKind::Error);
        assert_eq!(notes[0].message, "Colour not found");
    }

    #[tokio::test]
    async fn delete_requires_confirmation() {
        let (mut screen, _queue) = mounted().await;
        screen.open_create().expect("closed modal opens");
        if let Some(draft) = screen.draft_mut() {
            draft.name = "Red".to_owned();
            draft.code = "#FF0000".to_owned();
        }
        let record = screen.submit().await.expect("valid draft");

        screen.request_delete(record.id);
        screen.cancel_delete();
        assert!(matches!(
            screen.confirm_delete().await,
            Err(ScreenError::NoPendingDelete)
        ));
        assert_eq!(screen.list().records().len(), 1);

        screen.request_delete(record.id);
        assert!(screen.confirm_delete().await.expect("pending delete"));
        assert!(screen.list().records().is_empty());
    }
}
