//! Integration tests for concurrent first access to a singleton.
//!
//! Every test uses its own cell, so they can run in parallel.

use singleton_patterns::LazySingleton;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

#[derive(Debug)]
struct SharedInstance {
    serial: usize,
}

#[test]
fn test_concurrent_first_callers_see_one_instance() {
    const THREADS: usize = 256;

    static CELL: LazySingleton<SharedInstance> = LazySingleton::new();
    static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                // Release all threads at once so they race on the empty cell
                barrier.wait();
                CELL.get_or_init(|| SharedInstance {
                    serial: CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst),
                })
            })
        })
        .collect();

    let instances: Vec<Arc<SharedInstance>> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(CONSTRUCTIONS.load(Ordering::SeqCst), 1);
    assert!(instances.iter().all(|i| Arc::ptr_eq(i, &instances[0])));
    assert_eq!(instances[0].serial, 0);
}

#[test]
fn test_sequential_calls_return_first_identity() {
    let cell = LazySingleton::new();
    let first = cell.get_or_init(|| SharedInstance { serial: 7 });

    for _ in 0..100 {
        let again = cell.get_or_init(|| SharedInstance { serial: 99 });
        assert!(Arc::ptr_eq(&first, &again));
    }
    assert_eq!(first.serial, 7);
}

#[test]
fn test_ten_thousand_threads_race() {
    const THREADS: usize = 10_000;

    static CELL: LazySingleton<SharedInstance> = LazySingleton::new();
    static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

    // Spawn everything before joining anything so early and late threads overlap
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            thread::Builder::new()
                .stack_size(64 * 1024)
                .spawn(|| {
                    let instance = CELL.get_or_init(|| SharedInstance {
                        serial: CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst),
                    });
                    Arc::as_ptr(&instance) as usize
                })
                .unwrap()
        })
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(CONSTRUCTIONS.load(Ordering::SeqCst), 1);
    assert_eq!(addresses.len(), THREADS);
    assert!(addresses.iter().all(|&a| a == addresses[0]));
    assert_eq!(Arc::as_ptr(&CELL.get().unwrap()) as usize, addresses[0]);
}

#[test]
fn test_owned_cell_shared_by_handle() {
    // No global state: the cell itself is passed to the workers
    let cell = Arc::new(LazySingleton::new());
    let constructions = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let cell = Arc::clone(&cell);
            let constructions = Arc::clone(&constructions);
            thread::spawn(move || {
                cell.get_or_init(|| {
                    constructions.fetch_add(1, Ordering::SeqCst);
                    String::from("shared")
                })
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(&*handle.join().unwrap(), "shared");
    }
    assert_eq!(constructions.load(Ordering::SeqCst), 1);
}

#[test]
fn test_failing_constructor_retried_under_contention() {
    const THREADS: usize = 32;

    static CELL: LazySingleton<SharedInstance> = LazySingleton::new();
    static ATTEMPTS: AtomicUsize = AtomicUsize::new(0);

    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                CELL.get_or_try_init(|| {
                    // The first two attempts fail, whichever threads make them
                    let attempt = ATTEMPTS.fetch_add(1, Ordering::SeqCst);
                    if attempt < 2 {
                        Err(attempt)
                    } else {
                        Ok(SharedInstance { serial: attempt })
                    }
                })
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let failures = results.iter().filter(|r| r.is_err()).count();
    let successes: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();

    assert_eq!(failures, 2);
    assert_eq!(successes.len(), THREADS - 2);
    assert!(successes.iter().all(|i| Arc::ptr_eq(i, successes[0])));
    assert_eq!(successes[0].serial, 2);
    assert_eq!(ATTEMPTS.load(Ordering::SeqCst), 3);
}
