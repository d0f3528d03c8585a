// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use atelier_app::{Entity, Record};
use tracing::debug;

use crate::filter::{self, Query};
use crate::page::{PageInfo, Paginator};

/// Snapshot of a store as shown by a list screen: search and filter terms
/// plus the page cursor over the filtered rows.
#[derive(Debug, Clone)]
pub struct ListView<E> {
    records: Vec<Record<E>>,
    query: Query,
    paginator: Paginator,
}

impl<E: Entity> ListView<E> {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            query: Query::default(),
            paginator: Paginator::new(page_size),
        }
    }

    /// Replaces the snapshot after a load or mutation. The page is kept
    /// unless the filtered set no longer reaches it.
    pub fn set_records(&mut self, records: Vec<Record<E>>) {
        self.records = records;
        let total = self.filtered().len();
        self.paginator.clamp(total);
        debug!(
            entity = %E::KIND,
            total = self.records.len(),
            visible = total,
            page = self.paginator.page(),
            "derived list rows"
        );
    }

    pub fn records(&self) -> &[Record<E>] {
        &self.records
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.search = term.into();
        self.paginator.reset();
    }

    pub fn set_filter(&mut self, term: impl Into<String>) {
        self.query.filter = term.into();
        self.paginator.reset();
    }

    pub fn filtered(&self) -> Vec<&Record<E>> {
        filter::apply(&self.records, &self.query)
    }

    /// Rows on the current page.
    pub fn rows(&self) -> Vec<&Record<E>> {
        let filtered = self.filtered();
        self.paginator.slice(&filtered).to_vec()
    }

    pub fn page(&self) -> usize {
        self.paginator.page()
    }

    pub fn has_next(&self) -> bool {
        self.paginator.has_next(self.filtered().len())
    }

    pub fn has_previous(&self) -> bool {
        self.paginator.has_previous()
    }

    pub fn next_page(&mut self) -> bool {
        let total = self.filtered().len();
        self.paginator.next(total)
    }

    pub fn previous_page(&mut self) -> bool {
        self.paginator.previous()
    }

    pub fn go_to_page(&mut self, page: usize) {
        let total = self.filtered().len();
        self.paginator.go_to(page, total);
    }

    pub fn page_info(&self) -> PageInfo {
        self.paginator.info(self.filtered().len())
    }
}

#[cfg(test)]
mod tests {
    use super::ListView;
    use atelier_app::{Furniture, Record, RecordId};
    use time::{Date, Month};

    fn furniture(count: i64) -> Vec<Record<Furniture>> {
        (1..=count)
            .map(|id| Record {
                id: RecordId::new(id),
                created_on: Date::from_calendar_date(2024, Month::March, 1).expect("valid date"),
                data: Furniture {
                    name: if id % 2 == 0 {
                        format!("Chair {id}")
                    } else {
                        format!("Table {id}")
                    },
                    category: "Living Room".to_owned(),
                    sub_family: "Seating".to_owned(),
                    description: String::new(),
                },
            })
            .collect()
    }

    #[test]
    fn search_change_returns_to_first_page() {
        let mut view = ListView::new(10);
        view.set_records(furniture(25));
        assert!(view.next_page());
        assert_eq!(view.page(), 1);

        view.set_search("chair");
        assert_eq!(view.page(), 0);
        assert_eq!(view.filtered().len(), 12);
        assert!(view.rows().iter().all(|r| r.data.name.starts_with("Chair")));
    }

    #[test]
    fn shrinking_snapshot_clamps_page() {
        let mut view = ListView::new(10);
        view.set_records(furniture(25));
        view.go_to_page(2);
        assert_eq!(view.rows().len(), 5);

        view.set_records(furniture(15));
        assert_eq!(view.page(), 1);
        assert_eq!(view.rows().len(), 5);
    }

    #[test]
    fn filter_without_match_shows_empty_page() {
        let mut view = ListView::new(10);
        view.set_records(furniture(3));
        view.set_filter("bedroom");
        assert!(view.rows().is_empty());
        assert!(!view.has_next());
        assert!(!view.has_previous());
        assert_eq!(view.page_info().total, 0);
    }
}
