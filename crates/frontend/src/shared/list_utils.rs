/// Shared helpers for list pages (search, sorting, pagination).
use std::cmp::Ordering;

/// Trait for row types that support text search.
pub trait Searchable {
    /// True when the row matches the (already lowercased) query.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait for row types that support column sorting.
pub trait Sortable {
    /// Compares two rows by the named field.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sorts a list in place by the named field.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Filters a list by a search query. An empty query keeps everything.
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let query = filter.trim().to_lowercase();
    if query.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(&query))
        .collect()
}

/// Number of pages needed for `total_count` items (at least 1).
pub fn page_count(total_count: usize, page_size: usize) -> usize {
    if total_count == 0 {
        1
    } else {
        (total_count + page_size - 1) / page_size
    }
}

/// The slice of `items` shown on `page` (0-indexed).
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page * page_size;
    let end = (start + page_size).min(items.len());
    items.get(start..end).unwrap_or(&[]).to_vec()
}

/// Sort indicator for a column header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// CSS class for a sort indicator span.
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Case-insensitive `contains` against an optional column.
pub fn contains_opt(haystack: &Option<String>, query: &str) -> bool {
    haystack
        .as_deref()
        .map(|v| v.to_lowercase().contains(query))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        dept: Option<String>,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(filter) || contains_opt(&self.dept, filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, _field: &str) -> Ordering {
            self.name.cmp(&other.name)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Crane lift".into(), dept: Some("Operations".into()) },
            Row { name: "Welding".into(), dept: Some("Maintenance".into()) },
            Row { name: "Excavation".into(), dept: None },
        ]
    }

    #[test]
    fn filter_matches_any_column_case_insensitive() {
        let hit = filter_list(rows(), "MAINT");
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].name, "Welding");

        // empty and whitespace queries keep everything
        assert_eq!(filter_list(rows(), "").len(), 3);
        assert_eq!(filter_list(rows(), "   ").len(), 3);
    }

    #[test]
    fn sort_respects_direction() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        assert_eq!(items[0].name, "Crane lift");
        sort_list(&mut items, "name", false);
        assert_eq!(items[0].name, "Welding");
    }

    #[test]
    fn page_count_rounds_up_and_never_hits_zero() {
        assert_eq!(page_count(0, 25), 1);
        assert_eq!(page_count(25, 25), 1);
        assert_eq!(page_count(26, 25), 2);
        assert_eq!(page_count(51, 25), 3);
    }

    #[test]
    fn page_slice_clamps_the_tail() {
        let items: Vec<u32> = (0..7).collect();
        assert_eq!(page_slice(&items, 0, 3), vec![0, 1, 2]);
        assert_eq!(page_slice(&items, 2, 3), vec![6]);
        assert!(page_slice(&items, 3, 3).is_empty());
    }
}
