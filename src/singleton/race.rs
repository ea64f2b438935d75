use super::Singleton;
use std::sync::Barrier;

#[derive(Debug, Clone)]
pub struct RaceReport {
    pub label: &'static str,
    pub threads: usize,
    /// Address each finished thread observed.
    pub addresses: Vec<usize>,
}

impl RaceReport {
    /// True when every thread finished and all saw the same instance. A race
    /// with no threads observed nothing and never agrees.
    pub fn all_same(&self) -> bool {
        !self.addresses.is_empty()
            && self.addresses.len() == self.threads
            && self.addresses.windows(2).all(|pair| pair[0] == pair[1])
    }
}

/// Releases `threads` threads at once on `T::instance()`.
pub fn race_accessor<T: Singleton>(threads: usize) -> RaceReport {
    let barrier = Barrier::new(threads);
    let barrier = &barrier;

    let addresses = crossbeam::thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                s.spawn(move |_| {
                    barrier.wait();
                    T::instance() as *const T as usize
                })
            })
            .collect();

        handles
            .into_iter()
            .filter_map(|handle| handle.join().ok())
            .collect::<Vec<_>>()
    })
    .unwrap_or_default();

    let report = RaceReport {
        label: T::instance().label(),
        threads,
        addresses,
    };
    tracing::debug!(
        label = report.label,
        threads,
        agreed = report.all_same(),
        "race finished"
    );
    report
}
