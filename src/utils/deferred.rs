use std::panic;
use std::sync::Mutex;
use std::thread::{self, JoinHandle};

use once_cell::sync::OnceCell;

/// A computation started eagerly on its own thread.
///
/// [`value`](Self::value) blocks until the computation finishes and caches
/// the result, so the computation runs at most once no matter how many
/// callers join. There is no cancellation: once spawned, the computation
/// always runs to completion.
pub struct Deferred<T> {
    handle: Mutex<Option<JoinHandle<T>>>,
    cell: OnceCell<T>,
}

impl<T: Send + 'static> Deferred<T> {
    /// Spawns `compute` immediately on a dedicated thread.
    pub fn spawn<F>(compute: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Self {
            handle: Mutex::new(Some(thread::spawn(compute))),
            cell: OnceCell::new(),
        }
    }

    /// Blocks until the computation finishes, then returns the memoized
    /// result. A panic on the worker thread is resumed here.
    pub fn value(&self) -> &T {
        self.cell.get_or_init(|| {
            let handle = self
                .handle
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .take()
                // get_or_init runs this closure at most once, so the
                // handle has not been joined before.
                .expect("deferred computation joined twice");
            match handle.join() {
                Ok(result) => result,
                Err(payload) => panic::resume_unwind(payload),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;

    #[test]
    fn value_returns_the_computation_result() {
        let deferred = Deferred::spawn(|| 21 * 2);
        assert_eq!(*deferred.value(), 42);
    }

    #[test]
    fn computation_starts_before_value_is_called() {
        let (sender, receiver) = mpsc::channel();
        let _deferred = Deferred::spawn(move || {
            sender.send(()).ok();
            7
        });

        // the worker runs without anyone joining it
        receiver
            .recv_timeout(Duration::from_secs(5))
            .expect("computation should start eagerly");
    }

    #[test]
    fn computation_runs_at_most_once() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let deferred = Deferred::spawn(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            5
        });

        assert_eq!(*deferred.value(), 5);
        assert_eq!(*deferred.value(), 5);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn value_is_safe_to_read_from_multiple_threads() {
        let deferred = Arc::new(Deferred::spawn(|| {
            thread::sleep(Duration::from_millis(20));
            11
        }));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let deferred = Arc::clone(&deferred);
                thread::spawn(move || *deferred.value())
            })
            .collect();
        for reader in readers {
            assert_eq!(reader.join().unwrap(), 11);
        }
    }
}
