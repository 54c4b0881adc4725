//! Short-lived read cache in front of a worksheet.

use log::debug;
use std::time::{Duration, Instant};

pub struct ReadCache<R> {
    ttl: Duration,
    entry: Option<(Instant, Vec<R>)>,
}

impl<R: Clone> ReadCache<R> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    /// Cached rows, if they are younger than the TTL.
    pub fn get(&self) -> Option<Vec<R>> {
        match &self.entry {
            Some((loaded_at, rows)) if loaded_at.elapsed() < self.ttl => {
                debug!("read cache hit ({} rows)", rows.len());
                Some(rows.clone())
            }
            _ => None,
        }
    }

    pub fn put(&mut self, rows: Vec<R>) {
        self.entry = Some((Instant::now(), rows));
    }

    pub fn invalidate(&mut self) {
        if self.entry.take().is_some() {
            debug!("read cache invalidated");
        }
    }
}
