// Aggregation tests: owner resolution, memory totals, child records, snapshot totals

mod common;

use common::*;
use perfsnap::aggregation::{ExtensionHostIndex, build_snapshot};
use perfsnap::models::*;

fn no_extensions() -> ExtensionHostIndex {
    ExtensionHostIndex::default()
}

#[test]
fn test_build_snapshot_empty_has_no_owners() {
    let snapshot = build_snapshot(&[], &no_extensions(), 12.5);
    assert!(snapshot.owners.is_empty());
    assert_eq!(snapshot.date, 12.5);
    assert_eq!(snapshot.total_dispatch_count(), 0);
}

#[test]
fn test_worker_with_zero_window_and_top_level_doc_split_owners() {
    let samples = vec![sample("a.com", 5, &[3], 100.0), worker("a.com", 0, &[2], 50.0)];
    let snapshot = build_snapshot(&samples, &no_extensions(), 0.0);

    let ui = snapshot.owner(&OwnerId::Window(1)).unwrap();
    assert_eq!(ui.dispatch_count, 2);
    assert_eq!(ui.duration, 50.0);
    assert_eq!(ui.window_id, 1);
    assert_eq!(ui.children.len(), 1);
    assert!(ui.children[0].is_worker);

    let tab = snapshot.owner(&OwnerId::Window(5)).unwrap();
    assert_eq!(tab.dispatch_count, 3);
    assert_eq!(tab.duration, 100.0);
    assert!(tab.children.is_empty());
}

#[test]
fn test_worker_sentinel_windows_group_under_browser_ui() {
    for window_id in [0, u64::MAX] {
        let snapshot = build_snapshot(&[worker("w", window_id, &[1], 1.0)], &no_extensions(), 0.0);
        assert_eq!(
            snapshot.owners.keys().collect::<Vec<_>>(),
            vec![&OwnerId::Window(1)]
        );
    }
    let snapshot = build_snapshot(&[worker("w", 42, &[1], 1.0)], &no_extensions(), 0.0);
    assert!(snapshot.owner(&OwnerId::Window(42)).is_some());
}

#[test]
fn test_document_with_zero_window_is_not_remapped() {
    let snapshot = build_snapshot(&[sample("a.com", 0, &[1], 1.0)], &no_extensions(), 0.0);
    assert!(snapshot.owner(&OwnerId::Window(0)).is_some());
    assert!(snapshot.owner(&OwnerId::Window(1)).is_none());
}

#[test]
fn test_extension_host_groups_by_extension_regardless_of_window() {
    let index = ExtensionHostIndex::from_extensions([Extension::new("ext-host", "addon@example.com")]);
    let samples = vec![
        sample("ext-host", 3, &[1], 1.0),
        frame("ext-host", 8, &[2], 2.0),
        worker("ext-host", 0, &[4], 4.0),
        sample("page.com", 3, &[10], 10.0),
    ];
    let snapshot = build_snapshot(&samples, &index, 0.0);

    let ext = snapshot
        .owner(&OwnerId::Extension("addon@example.com".into()))
        .unwrap();
    assert_eq!(ext.dispatch_count, 7);
    assert_eq!(ext.duration, 7.0);
    assert_eq!(ext.window_id, 3);
    assert_eq!(ext.children.len(), 2);

    let tab = snapshot.owner(&OwnerId::Window(3)).unwrap();
    assert_eq!(tab.host, "page.com");
    assert_eq!(tab.dispatch_count, 10);
}

#[test]
fn test_numeric_extension_id_stays_separate_from_window() {
    let index = ExtensionHostIndex::from_extensions([Extension::new("ext-host", "5")]);
    let samples = vec![sample("ext-host", 1, &[1], 1.0), sample("a.com", 5, &[2], 2.0)];
    let snapshot = build_snapshot(&samples, &index, 0.0);
    assert_eq!(snapshot.owners.len(), 2);
    assert_eq!(snapshot.owner(&OwnerId::Extension("5".into())).unwrap().dispatch_count, 1);
    assert_eq!(snapshot.owner(&OwnerId::Window(5)).unwrap().dispatch_count, 2);
}

#[test]
fn test_memory_with_media_breakdown_totals_135() {
    let mut s = sample("a.com", 2, &[], 0.0);
    s.memory_info = Some(media_memory(100, 10, 20, 5));
    let snapshot = build_snapshot(&[s], &no_extensions(), 0.0);
    assert_eq!(snapshot.owner(&OwnerId::Window(2)).unwrap().memory, 135);
}

#[test]
fn test_top_level_worker_is_recorded_as_child() {
    let mut top_level_worker = worker("w.com", 4, &[1], 1.0);
    top_level_worker.is_top_level = true;
    let samples = vec![sample("a.com", 4, &[1], 1.0), top_level_worker];
    let snapshot = build_snapshot(&samples, &no_extensions(), 0.0);

    let tab = snapshot.owner(&OwnerId::Window(4)).unwrap();
    assert_eq!(tab.dispatch_count, 2);
    assert_eq!(tab.children.len(), 1);
    assert_eq!(tab.children[0].host, "w.com");
}

#[test]
fn test_children_keep_input_order_and_counter_ids() {
    let mut a = frame("a.frame", 6, &[1], 1.0);
    a.pid = 10;
    a.counter_id = 1;
    let mut b = worker("b.worker", 6, &[2], 2.0);
    b.pid = 10;
    b.counter_id = 2;
    let mut c = frame("c.frame", 6, &[3], 3.0);
    c.pid = 11;
    c.counter_id = 1;
    let snapshot = build_snapshot(&[a, b, c], &no_extensions(), 0.0);

    let children = &snapshot.owner(&OwnerId::Window(6)).unwrap().children;
    let hosts: Vec<&str> = children.iter().map(|c| c.host.as_str()).collect();
    let ids: Vec<&str> = children.iter().map(|c| c.counter_id.as_str()).collect();
    assert_eq!(hosts, vec!["a.frame", "b.worker", "c.frame"]);
    assert_eq!(ids, vec!["10:1", "10:2", "11:1"]);
    assert_eq!(children[1].dispatch_count, 2);
    assert_eq!(children[2].duration, 3.0);
}

#[test]
fn test_owner_seeded_from_first_sample() {
    let samples = vec![frame("first.com", 3, &[1], 1.0), sample("second.com", 3, &[1], 1.0)];
    let snapshot = build_snapshot(&samples, &no_extensions(), 0.0);
    assert_eq!(snapshot.owner(&OwnerId::Window(3)).unwrap().host, "first.com");
}

/// Small deterministic generator so the totals property covers many shapes.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

#[test]
fn test_totals_equal_sum_over_all_samples() {
    let index = ExtensionHostIndex::from_extensions([Extension::new("ext", "addon@x")]);
    let mut rng = Lcg(7);
    for _ in 0..50 {
        let n = (rng.next() % 20) as usize;
        let samples: Vec<RawSample> = (0..n)
            .map(|i| {
                let counts: Vec<u64> = (0..rng.next() % 4).map(|_| rng.next() % 100).collect();
                let host = if rng.next() % 5 == 0 { "ext" } else { "site" };
                let window_id = [0, 1, 2, 3, u64::MAX][(rng.next() % 5) as usize];
                let mut s = sample(host, window_id, &counts, (rng.next() % 1000) as f64 / 8.0);
                s.is_worker = rng.next() % 2 == 0;
                s.is_top_level = rng.next() % 2 == 0;
                s.counter_id = i as u64;
                if rng.next() % 3 == 0 {
                    s.memory_info = Some(media_memory(rng.next() % 50, 1, 2, 3));
                }
                s
            })
            .collect();

        let snapshot = build_snapshot(&samples, &index, 0.0);

        let expected_count: u64 = samples
            .iter()
            .map(|s| s.items.iter().map(|i| i.count).sum::<u64>())
            .sum();
        let expected_duration: f64 = samples.iter().map(|s| s.duration).sum();
        let expected_children = samples
            .iter()
            .filter(|s| !s.is_top_level || s.is_worker)
            .count();
        let children: usize = snapshot.owners.values().map(|o| o.children.len()).sum();

        assert_eq!(snapshot.total_dispatch_count(), expected_count);
        assert!((snapshot.total_duration() - expected_duration).abs() < 1e-6);
        assert_eq!(children, expected_children);
    }
}
