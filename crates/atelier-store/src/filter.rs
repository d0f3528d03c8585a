// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use atelier_app::{Entity, Record};

/// Free-text terms typed into a list screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Matched against the entity's search fields.
    pub search: String,
    /// Matched against the entity's filter fields.
    pub filter: String,
}

impl Query {
    pub fn new(search: impl Into<String>, filter: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            filter: filter.into(),
        }
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self::new(term, "")
    }

    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.filter.trim().is_empty()
    }
}

/// Lowercased whitespace-separated tokens of a term.
pub fn tokens(term: &str) -> Vec<String> {
    term.split_whitespace().map(str::to_lowercase).collect()
}

struct CompiledQuery {
    search: Vec<String>,
    filter: Vec<String>,
}

impl CompiledQuery {
    fn new(query: &Query) -> Self {
        Self {
            search: tokens(&query.search),
            filter: tokens(&query.filter),
        }
    }

    fn matches<E: Entity>(&self, data: &E) -> bool {
        all_tokens_match(data, E::SEARCH_FIELDS, &self.search)
            && all_tokens_match(data, E::FILTER_FIELDS, &self.filter)
    }
}

// Every token must appear in at least one of the fields.
fn all_tokens_match<E: Entity>(data: &E, fields: &[&str], tokens: &[String]) -> bool {
    if tokens.is_empty() {
        return true;
    }
    let haystacks: Vec<String> = fields
        .iter()
        .filter_map(|name| data.field(name))
        .map(|value| value.display().to_lowercase())
        .collect();
    tokens
        .iter()
        .all(|token| haystacks.iter().any(|haystack| haystack.contains(token)))
}

pub fn matches<E: Entity>(data: &E, query: &Query) -> bool {
    CompiledQuery::new(query).matches(data)
}

/// Records matching `query`, in store order.
pub fn apply<'a, E: Entity>(records: &'a [Record<E>], query: &Query) -> Vec<&'a Record<E>> {
    let compiled = CompiledQuery::new(query);
    records
        .iter()
        .filter(|record| compiled.matches(&record.data))
        .collect()
}
