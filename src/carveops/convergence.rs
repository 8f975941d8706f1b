/// Stall detector for the shrink loop.
///
/// Watches the non-zero mask pixel count across iterations. Masked pixels
/// can persist indefinitely when every seam routes around them through
/// even cheaper territory, so once the count stops changing for a
/// configured number of consecutive iterations the loop is told to stop.
/// Early termination is not an error: it yields a best-effort result.
#[derive(Debug, Clone)]
pub struct ConvergenceTracker {
    last_count: u64,
    stalled: u32,
    threshold: u32,
}

impl ConvergenceTracker {
    /// Creates a tracker that stops after `threshold` consecutive
    /// iterations without a change in the observed count.
    pub fn new(threshold: u32) -> Self {
        Self {
            last_count: u64::MAX,
            stalled: 0,
            threshold,
        }
    }

    /// Records one iteration's non-zero mask count.
    ///
    /// Returns `true` while iteration should continue, `false` once the
    /// count has been flat for the configured threshold.
    pub fn observe(&mut self, count: u64) -> bool {
        if count == self.last_count {
            self.stalled += 1;
        } else {
            self.stalled = 0;
        }
        self.last_count = count;
        self.stalled < self.threshold
    }
}
