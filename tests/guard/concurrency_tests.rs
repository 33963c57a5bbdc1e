/*!
 * Concurrent Stress Tests
 * Writers and readers hammering the same guard from many threads
 */

use rw_guard::*;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

const WRITERS: usize = 100;
const READERS: usize = 100;

#[test]
fn test_map_concurrent_distinct_keys() {
    let map = Arc::new(MapGuard::<usize, usize>::new());
    let barrier = Arc::new(Barrier::new(WRITERS + READERS));
    let mut handles = vec![];

    for i in 0..WRITERS {
        let map = Arc::clone(&map);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            map.store(i, i * 10);
        }));
    }

    for i in 0..READERS {
        let map = Arc::clone(&map);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            let len = map.len();
            assert!(len <= WRITERS);
            if let Some(v) = map.load(&i) {
                assert_eq!(v, i * 10);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(map.len(), WRITERS);
    for i in 0..WRITERS {
        assert_eq!(map.load(&i), Some(i * 10));
    }
}

#[test]
fn test_slice_concurrent_appends_not_lost() {
    let slice = Arc::new(SliceGuard::new());
    let mut handles = vec![];

    for t in 0..8usize {
        let slice = Arc::clone(&slice);
        handles.push(thread::spawn(move || {
            for j in 0..500usize {
                slice.append([t * 1000 + j]);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let items = slice.to_vec();
    assert_eq!(items.len(), 4000);

    // Each thread's own items keep their relative order
    for t in 0..8usize {
        let own: Vec<usize> = items.iter().copied().filter(|v| v / 1000 == t).collect();
        let expected: Vec<usize> = (0..500).map(|j| t * 1000 + j).collect();
        assert_eq!(own, expected);
    }
}

#[test]
fn test_readers_never_observe_torn_writes() {
    // Writers keep both halves equal; any reader seeing them differ saw a torn state
    let pair = Arc::new(ValueGuard::new((0u64, 0u64)));
    let stop = Arc::new(AtomicBool::new(false));
    let reads = Arc::new(AtomicUsize::new(0));
    let mut handles = vec![];

    for _ in 0..4 {
        let pair = Arc::clone(&pair);
        handles.push(thread::spawn(move || {
            for _ in 0..2000 {
                pair.write_scoped(|(a, b)| {
                    *a += 1;
                    *b += 1;
                });
            }
        }));
    }

    let mut readers = vec![];
    for _ in 0..4 {
        let pair = Arc::clone(&pair);
        let stop = Arc::clone(&stop);
        let reads = Arc::clone(&reads);
        readers.push(thread::spawn(move || {
            while !stop.load(Ordering::Acquire) {
                let (a, b) = pair.get();
                assert_eq!(a, b, "torn read");
                reads.fetch_add(1, Ordering::Relaxed);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
    stop.store(true, Ordering::Release);
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(pair.get(), (8000, 8000));
}

#[test]
fn test_load_and_delete_claims_each_key_once() {
    let map = Arc::new(MapGuard::<u32, u32>::new());
    for i in 0..1000 {
        map.store(i, i);
    }

    let claimed = Arc::new(AtomicUsize::new(0));
    let mut handles = vec![];

    for _ in 0..8 {
        let map = Arc::clone(&map);
        let claimed = Arc::clone(&claimed);
        handles.push(thread::spawn(move || {
            for i in 0..1000 {
                if map.load_and_delete(&i).is_some() {
                    claimed.fetch_add(1, Ordering::Relaxed);
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(claimed.load(Ordering::Relaxed), 1000);
    assert!(map.is_empty());
}

#[test]
fn test_concurrent_readers_share_the_lock() {
    let guard = Arc::new(ValueGuard::new(5u32));
    let barrier = Arc::new(Barrier::new(2));

    // Both readers must be inside the read section at once to pass the barrier
    let handles: Vec<_> = (0..2)
        .map(|_| {
            let guard = Arc::clone(&guard);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                guard.read_scoped(|v| {
                    barrier.wait();
                    *v
                })
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 5);
    }
}
