use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

/// Worker pool for background work that must not stall the tick thread,
/// chiefly chunk generation.
pub struct JobPool {
    pool: ThreadPool,
}

impl JobPool {
    pub fn new(num_threads: Option<usize>) -> Result<Self, ThreadPoolBuildError> {
        let mut builder = ThreadPoolBuilder::new();
        if let Some(count) = num_threads {
            builder = builder.num_threads(count);
        }

        let pool = builder.build()?;
        Ok(Self { pool })
    }

    pub fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.pool.spawn(job);
    }
}

impl Default for JobPool {
    fn default() -> Self {
        Self::new(None).expect("failed to create default rayon thread pool")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::sync::Arc;

    use super::JobPool;

    #[test]
    fn spawned_jobs_all_run() {
        let pool = JobPool::new(Some(2)).expect("build pool");
        let counter = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = mpsc::channel();

        for _ in 0..16 {
            let counter = counter.clone();
            let tx = tx.clone();
            pool.spawn(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                let _ = tx.send(());
            });
        }

        for _ in 0..16 {
            rx.recv().expect("job completion");
        }
        assert_eq!(counter.load(Ordering::SeqCst), 16);
    }
}
