//! Tests for concurrent access to a shared register

use std::thread;

use anisan::{ChildRegister, SharedRegister};

use crate::utils::record;

#[test]
fn test_concurrent_appends_are_not_lost() {
    let shared = SharedRegister::new(ChildRegister::new());
    let threads = 8;
    let per_thread = 25;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..per_thread {
                    let muac = 11.0 + (i % 4) as f64;
                    shared
                        .append(record(&format!("child-{t}-{i}"), muac, false, None))
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(shared.len().unwrap(), threads * per_thread);

    // Each thread's records stay in the order that thread appended them.
    let snapshot = shared.snapshot().unwrap();
    for t in 0..threads {
        let prefix = format!("child-{t}-");
        let indices: Vec<usize> = snapshot
            .iter()
            .filter(|r| r.name().starts_with(&prefix))
            .map(|r| r.name()[prefix.len()..].parse().unwrap())
            .collect();
        assert_eq!(indices, (0..per_thread).collect::<Vec<_>>());
    }
}

#[test]
fn test_concurrent_append_and_delete() {
    let shared = SharedRegister::new(ChildRegister::with_records(
        (0..50).map(|i| record(&format!("old-{i}"), 12.0, false, None)).collect(),
    ));

    let writer = {
        let shared = shared.clone();
        thread::spawn(move || {
            for i in 0..50 {
                shared.append(record(&format!("new-{i}"), 13.5, false, None)).unwrap();
            }
        })
    };
    let deleter = {
        let shared = shared.clone();
        thread::spawn(move || {
            for i in 0..50 {
                shared.remove_by_name(&format!("old-{i}")).unwrap();
            }
        })
    };

    writer.join().unwrap();
    deleter.join().unwrap();

    let snapshot = shared.snapshot().unwrap();
    assert_eq!(snapshot.len(), 50);
    assert!(snapshot.iter().all(|r| r.name().starts_with("new-")));
}

#[test]
fn test_with_register_is_exclusive() {
    let shared = SharedRegister::default();
    shared.append(record("Amina", 14.0, false, None)).unwrap();

    let count = shared
        .with_register(|register| {
            register.append(record("Issa", 11.2, false, None));
            Ok(register.len())
        })
        .unwrap();
    assert_eq!(count, 2);
    assert!(!shared.is_empty().unwrap());
}
