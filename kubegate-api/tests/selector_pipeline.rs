//! Selection pipeline integration tests
//!
//! Drives the whole pipeline over in-memory Pod collections, the same shapes
//! the resource services hand it after fetching from the cluster.

use chrono::{TimeZone, Utc};
use k8s_openapi::api::core::v1::{Pod, PodSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, Time};
use kubegate_api::kubernetes::selector::{select, ListQuery, Selectable};

fn pod(name: &str, created_secs: i64) -> Pod {
    Pod {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some("default".to_string()),
            creation_timestamp: Some(Time(Utc.timestamp_opt(created_secs, 0).unwrap())),
            ..Default::default()
        },
        spec: Some(PodSpec {
            node_name: Some(format!("node-{created_secs}")),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn pod_names(pods: &[Pod]) -> Vec<&str> {
    pods.iter()
        .map(|p| p.metadata.name.as_deref().unwrap())
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
fn filtered_sorted_page_with_total() {
    // Seven pods a1..a7 created in order; newest-first is a7..a1, so page 2
    // of size 3 holds a4, a3, a2 while total stays at 7.
    let pods: Vec<Pod> = (1..=7).map(|i| pod(&format!("a{i}"), 1000 + i)).collect();

    let result = select(pods, &query("a", 2, 3));

    assert_eq!(result.total, 7);
    assert_eq!(pod_names(&result.items), vec!["a4", "a3", "a2"]);
}

#[test]
fn unmatched_filter_is_empty_for_any_page() {
    let pods: Vec<Pod> = (1..=5).map(|i| pod(&format!("a{i}"), i)).collect();

    for (page, page_size) in [(0, 0), (1, 2), (3, 10)] {
        let result = select(pods.clone(), &query("zz", page, page_size));
        assert_eq!(result.total, 0);
        assert!(result.items.is_empty());
    }
}

#[test]
fn oversized_page_returns_all_filtered_items() {
    let pods: Vec<Pod> = (1..=3).map(|i| pod(&format!("web-{i}"), i)).collect();

    let result = select(pods, &query("web", 1, 10));

    assert_eq!(result.total, 3);
    assert_eq!(result.items.len(), 3);
}

#[test]
fn page_beyond_the_filtered_set_is_empty_but_total_holds() {
    let pods: Vec<Pod> = (1..=4).map(|i| pod(&format!("job-{i}"), i)).collect();

    let result = select(pods, &query("job", 5, 2));

    assert_eq!(result.total, 4);
    assert!(result.items.is_empty());
}

#[test]
fn disabled_pagination_returns_the_whole_sorted_set() {
    let pods = vec![pod("old", 10), pod("new", 30), pod("mid", 20)];

    let result = select(pods, &query("", 0, 0));

    assert_eq!(result.total, 3);
    assert_eq!(pod_names(&result.items), vec!["new", "mid", "old"]);
}

#[test]
fn adjacent_results_never_get_newer_down_the_list() {
    let pods = vec![
        pod("c", 300),
        pod("a", 100),
        pod("e", 500),
        pod("b", 200),
        pod("d", 400),
    ];

    let result = select(pods, &ListQuery::default());

    for window in result.items.windows(2) {
        assert!(window[0].creation_time() >= window[1].creation_time());
    }
}

#[test]
fn items_pass_through_the_pipeline_unchanged() {
    // The pipeline reorders and slices; it must never mutate or strip the
    // native objects.
    let original = pod("web-1", 42);
    let result = select(vec![original.clone()], &query("web", 1, 5));

    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0], original);
    assert_eq!(
        result.items[0]
            .spec
            .as_ref()
            .and_then(|s| s.node_name.as_deref()),
        Some("node-42")
    );
}

#[test]
fn total_is_independent_of_pagination() {
    let pods: Vec<Pod> = (1..=9).map(|i| pod(&format!("svc-{i}"), i)).collect();

    for (page, page_size) in [(1, 4), (2, 4), (3, 4), (7, 2), (0, 0)] {
        let result = select(pods.clone(), &query("svc", page, page_size));
        assert_eq!(result.total, 9, "page={page} page_size={page_size}");
        assert!(result.items.len() <= result.total);
    }
}
