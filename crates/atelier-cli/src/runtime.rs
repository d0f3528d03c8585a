// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, bail};
use atelier_app::{Entity, EntityKind, Proposal, Record};
use atelier_store::{InMemoryGateway, Notifier, Screen, Store};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// What to do with one seeded screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenRequest {
    pub entity: EntityKind,
    pub search: String,
    pub filter: String,
    /// One-based page number.
    pub page: usize,
    pub page_size: usize,
    pub export_dir: Option<PathBuf>,
}

type DemoScreen<E> = Screen<E, InMemoryGateway<E, Arc<dyn Notifier>>>;

/// Derived values printed alongside a row's stored fields.
type RowExtras<E> = fn(&E) -> Option<(&'static str, serde_json::Value)>;

fn no_extras<E>(_: &E) -> Option<(&'static str, serde_json::Value)> {
    None
}

fn proposal_pricing(proposal: &Proposal) -> Option<(&'static str, serde_json::Value)> {
    let breakdown = proposal.price_breakdown();
    Some((
        "pricing",
        serde_json::json!({
            "gross": breakdown.gross,
            "discount": breakdown.discount,
            "total": breakdown.total,
            "required_units": proposal.required_units(),
        }),
    ))
}

/// Builds a screen over the demo collection for `E` and mounts it.
pub async fn demo_screen<E: Entity>(
    records: Vec<Record<E>>,
    notifier: Arc<dyn Notifier>,
    page_size: usize,
) -> Result<DemoScreen<E>> {
    let store = Store::from_records(records)
        .with_context(|| format!("seed {} screen", E::KIND.label()))?;
    let gateway = InMemoryGateway::new(store, Arc::clone(&notifier));
    let mut screen = Screen::new(gateway, notifier, page_size);
    screen.mount().await;
    Ok(screen)
}

pub async fn run(
    request: &ScreenRequest,
    notifier: Arc<dyn Notifier>,
    out: &mut dyn Write,
) -> Result<()> {
    use atelier_testkit as seed;

    match request.entity {
        EntityKind::Supplier => {
            run_screen(seed::suppliers(), no_extras, request, notifier, out).await
        }
        EntityKind::Apartment => {
            run_screen(seed::apartments(), no_extras, request, notifier, out).await
        }
        EntityKind::Furniture => {
            run_screen(seed::furniture(), no_extras, request, notifier, out).await
        }
        EntityKind::SubFamily => {
            run_screen(seed::sub_families(), no_extras, request, notifier, out).await
        }
        EntityKind::Material => {
            run_screen(seed::materials(), no_extras, request, notifier, out).await
        }
        EntityKind::Colour => run_screen(seed::colours(), no_extras, request, notifier, out).await,
        EntityKind::Product => {
            run_screen(seed::products(), no_extras, request, notifier, out).await
        }
        EntityKind::Proposal => {
            run_screen(seed::proposals(), proposal_pricing, request, notifier, out).await
        }
    }
}

async fn run_screen<E: Entity + Serialize>(
    records: Vec<Record<E>>,
    extras: RowExtras<E>,
    request: &ScreenRequest,
    notifier: Arc<dyn Notifier>,
    out: &mut dyn Write,
) -> Result<()> {
    let mut screen = demo_screen(records, notifier, request.page_size).await?;

    if let Some(dir) = &request.export_dir {
        let path = screen
            .export(dir)
            .with_context(|| format!("export {} records", E::KIND.label()))?;
        writeln!(out, "{}", path.display())?;
        return Ok(());
    }

    screen.set_search(request.search.as_str());
    screen.set_filter(request.filter.as_str());
    if request.page == 0 {
        bail!("--page is 1-based; got 0");
    }
    screen.list_mut().go_to_page(request.page - 1);

    for record in screen.list().rows() {
        let mut row = serde_json::to_value(record)
            .with_context(|| format!("encode {} {}", E::KIND, record.id))?;
        if let Some((key, value)) = extras(&record.data)
            && let Some(fields) = row.as_object_mut()
        {
            fields.insert(key.to_owned(), value);
        }
        writeln!(out, "{row}")?;
    }
    let info = screen.list().page_info();
    info!(entity = %E::KIND, page = screen.list().page() + 1, "{info}");
    Ok(())
}
