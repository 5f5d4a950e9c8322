use log::info;

const LOG_EVERY: usize = 1000;

/// Track progress through a chronological rating batch
pub struct BatchProgress {
    total: usize,
    processed: usize,
    flagged: usize,
}

impl BatchProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            processed: 0,
            flagged: 0,
        }
    }

    pub fn increment_processed(&mut self) {
        self.processed += 1;
        self.log_progress();
    }

    pub fn increment_flagged(&mut self) {
        self.flagged += 1;
        self.increment_processed();
    }

    pub fn processed(&self) -> usize {
        self.processed
    }

    fn log_progress(&self) {
        if should_log(self.processed, self.total) {
            info!(
                "  → Progress: {}/{} contests ({} flagged)",
                self.processed, self.total, self.flagged
            );
        }
    }
}

fn should_log(current: usize, total: usize) -> bool {
    is_milestone(current) || is_complete(current, total)
}

fn is_milestone(count: usize) -> bool {
    count % LOG_EVERY == 0
}

fn is_complete(current: usize, total: usize) -> bool {
    current == total
}
