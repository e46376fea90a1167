//! Generic resource selection pipeline
//!
//! One filter → sort → paginate implementation shared by every resource
//! kind. Anything that is a `kube::Resource` is selectable through its
//! metadata; the pipeline never looks at any other field, operates on the
//! native objects directly and hands them back unchanged.

use chrono::{DateTime, Utc};
use kube::Resource;
use serde::{Deserialize, Serialize};

/// The minimal view the pipeline needs of an item: when it was created and
/// what it is called.
pub trait Selectable {
    fn creation_time(&self) -> Option<DateTime<Utc>>;
    fn name(&self) -> String;
}

/// Every Kubernetes object is selectable through its `ObjectMeta`. New
/// resource kinds plug into the pipeline with no per-kind code.
impl<K: Resource> Selectable for K {
    fn creation_time(&self) -> Option<DateTime<Utc>> {
        self.meta().creation_timestamp.as_ref().map(|t| t.0)
    }

    fn name(&self) -> String {
        self.meta().name.clone().unwrap_or_default()
    }
}

/// List-request parameters, bound straight from the HTTP query string.
///
/// An empty `filter_name` disables filtering; `page` or `page_size` of zero
/// or less disables pagination. Both are the normal "give me everything"
/// cases, not errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub filter_name: String,
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub page_size: i64,
}

/// A page of items plus the filtered-set size before pagination was applied.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceList<T> {
    pub items: Vec<T>,
    pub total: usize,
}

/// Run the full pipeline: filter, capture the total, sort newest-first,
/// paginate. `total` always reflects the filtered set regardless of how the
/// caller paginates, so `items.len() <= total`.
pub fn select<T: Selectable>(items: Vec<T>, query: &ListQuery) -> ResourceList<T> {
    let filtered = filter_by_name(items, &query.filter_name);
    let total = filtered.len();
    let sorted = sort_newest_first(filtered);
    let items = paginate(sorted, query.page, query.page_size);
    ResourceList { items, total }
}

/// Keep items whose name contains `filter` as a case-sensitive substring,
/// preserving relative order. An empty filter keeps everything.
fn filter_by_name<T: Selectable>(mut items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items;
    }
    items.retain(|item| item.name().contains(filter));
    items
}

/// Order by creation timestamp, most recent first. The sort is stable, so
/// items sharing a timestamp keep their incoming order; items without a
/// timestamp sort last.
fn sort_newest_first<T: Selectable>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by(|a, b| b.creation_time().cmp(&a.creation_time()));
    items
}

/// Slice out the requested 1-indexed page. A page beyond the end yields an
/// empty list; a partial last page is clamped to the items that exist.
fn paginate<T>(mut items: Vec<T>, page: i64, page_size: i64) -> Vec<T> {
    if page_size <= 0 || page <= 0 {
        return items;
    }
    let start = page_size.saturating_mul(page - 1) as usize;
    if start >= items.len() {
        return Vec::new();
    }
    let end = (page_size.saturating_mul(page) as usize).min(items.len());
    items.truncate(end);
    items.split_off(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use k8s_openapi::api::core::v1::ConfigMap;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, Time};

    fn item(name: &str, created_secs: i64) -> ConfigMap {
        ConfigMap {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                creation_timestamp: Some(Time(Utc.timestamp_opt(created_secs, 0).unwrap())),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn names(list: &[ConfigMap]) -> Vec<&str> {
        list.iter()
            .map(|cm| cm.metadata.name.as_deref().unwrap())
            .collect()
    }

    fn query(filter: &str, page: i64, page_size: i64) -> ListQuery {
        ListQuery {
            filter_name: filter.to_string(),
            page,
            page_size,
        }
    }

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        let items = vec![item("web", 1), item("db", 2), item("cache", 3)];
        let filtered = filter_by_name(items, "");
        assert_eq!(names(&filtered), vec!["web", "db", "cache"]);
    }

    #[test]
    fn filter_is_case_sensitive_substring_match() {
        let items = vec![item("web-1", 1), item("Web-2", 2), item("db", 3)];
        let filtered = filter_by_name(items, "web");
        assert_eq!(names(&filtered), vec!["web-1"]);
    }

    #[test]
    fn filter_is_idempotent() {
        let items = vec![item("api-a", 1), item("db", 2), item("api-b", 3)];
        let once = filter_by_name(items, "api");
        let names_once: Vec<String> = once.iter().map(|i| i.name()).collect();
        let twice = filter_by_name(once, "api");
        let names_twice: Vec<String> = twice.iter().map(|i| i.name()).collect();
        assert_eq!(names_once, names_twice);
    }

    #[test]
    fn total_reflects_filtered_set_not_page() {
        let items: Vec<_> = (1..=7).map(|i| item(&format!("a{i}"), i)).collect();
        let result = select(items, &query("a", 2, 3));
        assert_eq!(result.total, 7);
        assert_eq!(result.items.len(), 3);
    }

    #[test]
    fn sort_is_newest_first() {
        let items = vec![item("old", 100), item("new", 300), item("mid", 200)];
        let sorted = sort_newest_first(items);
        assert_eq!(names(&sorted), vec!["new", "mid", "old"]);
    }

    #[test]
    fn equal_timestamps_keep_incoming_order() {
        let items = vec![item("first", 100), item("second", 100), item("third", 100)];
        let sorted = sort_newest_first(items);
        assert_eq!(names(&sorted), vec!["first", "second", "third"]);
    }

    #[test]
    fn missing_timestamp_sorts_last() {
        let dated = item("dated", 100);
        let undated = ConfigMap {
            metadata: ObjectMeta {
                name: Some("undated".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let sorted = sort_newest_first(vec![undated, dated]);
        assert_eq!(names(&sorted), vec!["dated", "undated"]);
    }

    #[test]
    fn pagination_disabled_when_page_or_size_not_positive() {
        let items = vec![item("a", 1), item("b", 2)];
        assert_eq!(paginate(items.clone(), 0, 5).len(), 2);
        assert_eq!(paginate(items.clone(), 2, 0).len(), 2);
        assert_eq!(paginate(items.clone(), -1, 5).len(), 2);
        assert_eq!(paginate(items, 1, -3).len(), 2);
    }

    #[test]
    fn second_page_of_seven_items_sorted_newest_first() {
        // a1..a7 with strictly increasing creation times sort to a7..a1;
        // page 2 of size 3 is then a4, a3, a2.
        let items: Vec<_> = (1..=7).map(|i| item(&format!("a{i}"), i)).collect();
        let result = select(items, &query("a", 2, 3));
        assert_eq!(result.total, 7);
        assert_eq!(names(&result.items), vec!["a4", "a3", "a2"]);
    }

    #[test]
    fn no_match_yields_empty_result_and_zero_total() {
        let items: Vec<_> = (1..=4).map(|i| item(&format!("a{i}"), i)).collect();
        let result = select(items, &query("zz", 1, 10));
        assert_eq!(result.total, 0);
        assert!(result.items.is_empty());
    }

    #[test]
    fn last_page_is_clamped_to_available_items() {
        let items: Vec<_> = (1..=3).map(|i| item(&format!("a{i}"), i)).collect();
        let result = select(items, &query("", 1, 10));
        assert_eq!(result.total, 3);
        assert_eq!(result.items.len(), 3);
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let items: Vec<_> = (1..=4).map(|i| item(&format!("a{i}"), i)).collect();
        let result = select(items, &query("", 5, 2));
        assert_eq!(result.total, 4);
        assert!(result.items.is_empty());
    }

    #[test]
    fn page_length_matches_pagination_bounds() {
        // len == min(p, max(0, total - p*(k-1))) for every page k
        let items: Vec<_> = (1..=7).map(|i| item(&format!("a{i}"), i)).collect();
        for page in 1..=4 {
            let result = select(items.clone(), &query("", page, 3));
            let expected = 3i64.min((7 - 3 * (page - 1)).max(0)) as usize;
            assert_eq!(result.items.len(), expected, "page {page}");
        }
    }
}
