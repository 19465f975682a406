use std::sync::mpsc;

/// Single-consumer work queue for requests produced off-thread (for example
/// during chunk generation) and applied on the tick thread. Items are removed
/// one at a time as they are taken, never batch-cleared, so a push that races
/// a drain is picked up by the next drain instead of being lost.
pub struct QueueProducer<T> {
    tx: mpsc::Sender<T>,
}

pub struct QueueConsumer<T> {
    rx: mpsc::Receiver<T>,
}

pub fn work_queue<T>() -> (QueueProducer<T>, QueueConsumer<T>) {
    let (tx, rx) = mpsc::channel();
    (QueueProducer { tx }, QueueConsumer { rx })
}

impl<T> Clone for QueueProducer<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> QueueProducer<T> {
    /// Returns false if the consumer has been dropped.
    pub fn push(&self, item: T) -> bool {
        self.tx.send(item).is_ok()
    }
}

impl<T> QueueConsumer<T> {
    pub fn try_take(&self) -> Option<T> {
        self.rx.try_recv().ok()
    }

    /// Takes everything queued at the time of each `next()` call without
    /// blocking. Each yielded item has already been removed from the queue.
    pub fn drain(&self) -> mpsc::TryIter<'_, T> {
        self.rx.try_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::work_queue;

    #[test]
    fn items_are_taken_in_push_order_and_exactly_once() {
        let (tx, rx) = work_queue();
        for value in 0..5 {
            assert!(tx.push(value));
        }

        let drained: Vec<i32> = rx.drain().collect();
        assert_eq!(drained, vec![0, 1, 2, 3, 4]);
        assert!(rx.try_take().is_none());
    }

    #[test]
    fn concurrent_pushes_survive_across_drains() {
        let (tx, rx) = work_queue();
        let producer = tx.clone();
        let handle = std::thread::spawn(move || {
            for value in 0..100 {
                assert!(producer.push(value));
            }
        });

        let mut seen = Vec::new();
        while seen.len() < 100 {
            seen.extend(rx.drain());
        }
        handle.join().expect("producer thread panicked");

        seen.sort_unstable();
        assert_eq!(seen, (0..100).collect::<Vec<i32>>());
        assert!(rx.try_take().is_none());
    }

    #[test]
    fn push_reports_dropped_consumer() {
        let (tx, rx) = work_queue();
        drop(rx);
        assert!(!tx.push(1));
    }
}
