// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod export;
pub mod filter;
pub mod gateway;
pub mod list;
pub mod notify;
pub mod page;
pub mod screen;
pub mod store;

pub use export::{ExportError, export_to_dir, to_csv_string, write_csv};
pub use filter::Query;
pub use gateway::{GatewayError, InMemoryGateway, MutationGateway};
pub use list::ListView;
pub use notify::{Notification, NotificationKind, NotificationQueue, Notifier, TracingNotifier};
pub use page::{DEFAULT_PAGE_SIZE, PageInfo, Paginator};
pub use screen::{Screen, ScreenError};
pub use store::{MAX_SEED_ID, Store, StoreError, local_today};
