use std::time::Duration;

/// Character-by-character reveal of a string
///
/// Yields the number of characters shown after each step, ending at the
/// full length. An empty string yields a single `0`.
#[derive(Debug, Clone)]
pub struct Typewriter {
    total: usize,
    shown: usize,
    done: bool,
    delay: Duration,
}

impl Typewriter {
    pub fn new(text: &str, delay: Duration) -> Self {
        Self {
            total: text.chars().count(),
            shown: 0,
            done: false,
            delay,
        }
    }

    /// Pause between two characters
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Zero delay reveals everything at once
    pub fn is_instant(&self) -> bool {
        self.delay.is_zero()
    }
}

impl Iterator for Typewriter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.done {
            return None;
        }
        if self.is_instant() || self.shown >= self.total {
            self.shown = self.total;
            self.done = true;
            return Some(self.total);
        }
        self.shown += 1;
        if self.shown == self.total {
            self.done = true;
        }
        Some(self.shown)
    }
}
