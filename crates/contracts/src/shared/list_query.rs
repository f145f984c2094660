//! Client-side list pipeline: filter → sort → paginate.
//!
//! Every list page runs the same derivation over a fully fetched collection.
//! Sorting happens on the whole filtered set, pagination slices the sorted
//! result, so a page always shows the rows that belong at that position.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

/// Rows the text filter can match.
pub trait Searchable {
    /// Concatenation of the fields the text filter looks at.
    fn search_text(&self) -> String;

    /// `needle` must already be lowercased.
    fn matches_filter(&self, needle: &str) -> bool {
        needle.is_empty() || self.search_text().to_lowercase().contains(needle)
    }
}

/// Value of one column used by the comparator.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Missing,
    Text(String),
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    Bool(bool),
}

impl SortKey {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn opt_text(value: Option<&str>) -> Self {
        value.map(Self::text).unwrap_or(Self::Missing)
    }

    pub fn opt_date(value: Option<NaiveDate>) -> Self {
        value.map(Self::Date).unwrap_or(Self::Missing)
    }

    /// Strings compare case-insensitively; keys of different kinds tie.
    pub fn compare(&self, other: &Self) -> Ordering {
        use SortKey::*;
        match (self, other) {
            (Missing, Missing) => Ordering::Equal,
            (Missing, _) => Ordering::Less,
            (_, Missing) => Ordering::Greater,
            (Text(a), Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Int(a), Float(b)) => (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal),
            (Float(a), Int(b)) => a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal),
            (Date(a), Date(b)) => a.cmp(b),
            (Bool(a), Bool(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Rows the list can be ordered by column.
pub trait Sortable {
    /// Unknown columns return `SortKey::Missing`, which leaves the order untouched.
    fn sort_key(&self, column: &str) -> SortKey;

    fn compare_by_field(&self, other: &Self, column: &str) -> Ordering {
        self.sort_key(column).compare(&other.sort_key(column))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Flips the sign only; ties stay ties.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDescriptor {
    pub column: String,
    pub direction: SortDirection,
}

impl SortDescriptor {
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// One page of the derived view plus the totals the pager needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub total_pages: usize,
    pub page_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub filter: String,
    pub sort: Option<SortDescriptor>,
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: String::new(),
            sort: None,
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page_index = 0;
    }

    /// Same column flips the direction, a new column starts ascending.
    pub fn toggle_sort(&mut self, column: &str) {
        match &mut self.sort {
            Some(sort) if sort.column == column => sort.direction = sort.direction.toggled(),
            _ => self.sort = Some(SortDescriptor::ascending(column)),
        }
    }

    pub fn set_page(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page_index = 0;
    }

    /// Pulls the page index back inside `[0, pages)` after the collection shrank.
    pub fn clamp_page(&mut self, total_count: usize) {
        let pages = page_count(total_count, self.page_size);
        if self.page_index >= pages {
            self.page_index = pages - 1;
        }
    }

    pub fn apply<T>(&self, items: &[T]) -> PageView<T>
    where
        T: Searchable + Sortable + Clone,
    {
        let mut filtered = filter_list(items, &self.filter);
        if let Some(sort) = &self.sort {
            sort_list(&mut filtered, sort);
        }
        let total_count = filtered.len();
        PageView {
            items: paginate(&filtered, self.page_index, self.page_size).to_vec(),
            total_count,
            total_pages: page_count(total_count, self.page_size),
            page_index: self.page_index,
        }
    }
}

/// Rows whose search text contains the lowercased filter; empty filter keeps all.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let needle = filter.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_filter(&needle))
        .cloned()
        .collect()
}

/// Stable: rows with equal keys keep their relative order in both directions.
pub fn sort_list<T: Sortable>(items: &mut [T], sort: &SortDescriptor) {
    items.sort_by(|a, b| sort.direction.apply(a.compare_by_field(b, &sort.column)));
}

pub fn page_count(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_count.div_ceil(page_size).max(1)
}

pub fn paginate<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    let start = page_index.saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        name: &'static str,
        group: Option<&'static str>,
    }

    impl Searchable for Row {
        fn search_text(&self) -> String {
            format!("{} {}", self.name, self.group.unwrap_or(""))
        }
    }

    impl Sortable for Row {
        fn sort_key(&self, column: &str) -> SortKey {
            match column {
                "id" => SortKey::Int(self.id),
                "name" => SortKey::text(self.name),
                "group" => SortKey::opt_text(self.group),
                _ => SortKey::Missing,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "Tornillo", group: Some("Ferretería") },
            Row { id: 2, name: "martillo", group: Some("Herramientas") },
            Row { id: 3, name: "Cable", group: None },
            Row { id: 4, name: "Taladro", group: Some("Herramientas") },
            Row { id: 5, name: "cinta", group: Some("Ferretería") },
            Row { id: 6, name: "Alicate", group: Some("Herramientas") },
            Row { id: 7, name: "Brocha", group: None },
        ]
    }

    fn ids(items: &[Row]) -> Vec<i64> {
        items.iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let data = rows();
        assert_eq!(filter_list(&data, ""), data);
    }

    #[test]
    fn filter_matches_iff_concatenation_contains_needle() {
        let data = rows();
        for filter in ["HERRA", "ferre", "a", "cable", "zzz", "o f"] {
            let needle = filter.to_lowercase();
            let expected: Vec<i64> = data
                .iter()
                .filter(|r| r.search_text().to_lowercase().contains(&needle))
                .map(|r| r.id)
                .collect();
            assert_eq!(ids(&filter_list(&data, filter)), expected, "filter {filter:?}");
        }
        assert_eq!(ids(&filter_list(&data, "HERRA")), vec![2, 4, 6]);
    }

    #[test]
    fn page_count_has_minimum_of_one() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(7, 3), 3);
    }

    #[test]
    fn pages_reconstruct_the_filtered_collection() {
        let data = rows();
        for size in 1..=8 {
            let pages = page_count(data.len(), size);
            let mut joined = Vec::new();
            for page in 0..pages {
                joined.extend_from_slice(paginate(&data, page, size));
            }
            assert_eq!(joined, data, "page size {size}");
            assert!(paginate(&data, pages, size).is_empty());
        }
    }

    #[test]
    fn text_sort_is_case_insensitive() {
        let mut data = rows();
        sort_list(&mut data, &SortDescriptor::ascending("name"));
        assert_eq!(ids(&data), vec![6, 7, 3, 5, 2, 4, 1]);
    }

    #[test]
    fn sort_is_stable_in_both_directions() {
        let mut asc = rows();
        sort_list(&mut asc, &SortDescriptor::ascending("group"));
        // Missing first, then ties keep their original relative order.
        assert_eq!(ids(&asc), vec![3, 7, 1, 5, 2, 4, 6]);

        let mut desc = rows();
        sort_list(&mut desc, &SortDescriptor::descending("group"));
        assert_eq!(ids(&desc), vec![2, 4, 6, 1, 5, 3, 7]);
    }

    #[test]
    fn unknown_column_keeps_order() {
        let mut data = rows();
        sort_list(&mut data, &SortDescriptor::descending("nope"));
        assert_eq!(data, rows());
    }

    #[test]
    fn query_sorts_before_paginating() {
        let mut query = ListQuery::new(3);
        query.sort = Some(SortDescriptor::ascending("name"));
        let first = query.apply(&rows());
        assert_eq!(ids(&first.items), vec![6, 7, 3]);
        assert_eq!(first.total_count, 7);
        assert_eq!(first.total_pages, 3);

        query.set_page(2);
        assert_eq!(ids(&query.apply(&rows()).items), vec![1]);
    }

    #[test]
    fn toggle_sort_flips_then_resets_on_new_column() {
        let mut query = ListQuery::default();
        query.toggle_sort("name");
        assert_eq!(query.sort, Some(SortDescriptor::ascending("name")));
        query.toggle_sort("name");
        assert_eq!(query.sort, Some(SortDescriptor::descending("name")));
        query.toggle_sort("group");
        assert_eq!(query.sort, Some(SortDescriptor::ascending("group")));
    }

    #[test]
    fn filter_and_page_size_reset_page_index() {
        let mut query = ListQuery::new(2);
        query.set_page(3);
        query.set_filter("herra");
        assert_eq!(query.page_index, 0);

        query.set_page(1);
        query.set_page_size(0);
        assert_eq!(query.page_size, 1);
        assert_eq!(query.page_index, 0);
    }

    #[test]
    fn clamp_page_after_collection_shrinks() {
        let mut query = ListQuery::new(2);
        query.set_page(3);
        query.clamp_page(3);
        assert_eq!(query.page_index, 1);
        query.clamp_page(0);
        assert_eq!(query.page_index, 0);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let mut query = ListQuery::new(5);
        query.set_page(9);
        let view = query.apply(&rows());
        assert!(view.items.is_empty());
        assert_eq!(view.total_pages, 2);
    }
}
