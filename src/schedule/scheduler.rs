//! Virtual-clock timer queue.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::effects::Deferred;

/// What a timer does when it fires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScheduledJob {
    /// Step the active animation one cell.
    AnimationTick,
    /// Run a delayed transition.
    Deferred(Deferred),
}

#[derive(Debug)]
struct Timer {
    due_ms: u64,
    seq: u64,
    job: ScheduledJob,
}

// Ordered by due time, then by insertion order.
impl PartialEq for Timer {
    fn eq(&self, other: &Self) -> bool {
        self.due_ms == other.due_ms && self.seq == other.seq
    }
}

impl Eq for Timer {}

impl PartialOrd for Timer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timer {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due_ms, self.seq).cmp(&(other.due_ms, other.seq))
    }
}

/// Pending timers on a virtual millisecond clock.
///
/// Nothing runs by itself: the owner advances the clock and pops due jobs
/// one at a time, so a job that schedules another job at delay 0 still
/// runs after everything already due.
#[derive(Debug, Default)]
pub struct TickScheduler {
    now_ms: u64,
    next_seq: u64,
    pending: BinaryHeap<Reverse<Timer>>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Run `job` `delay_ms` after now.
    pub fn schedule(&mut self, delay_ms: u64, job: ScheduledJob) {
        let timer = Timer {
            due_ms: self.now_ms.saturating_add(delay_ms),
            seq: self.next_seq,
            job,
        };
        self.next_seq += 1;
        self.pending.push(Reverse(timer));
    }

    /// Due time of the earliest pending timer.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.pending.peek().map(|Reverse(t)| t.due_ms)
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to
    /// its due time.
    pub fn pop_due(&mut self, until: u64) -> Option<ScheduledJob> {
        if self.next_due()? > until {
            return None;
        }
        let Reverse(timer) = self.pending.pop()?;
        self.now_ms = self.now_ms.max(timer.due_ms);
        Some(timer.job)
    }

    /// Move the clock forward without firing anything.
    pub fn advance_to(&mut self, time_ms: u64) {
        self.now_ms = self.now_ms.max(time_ms);
    }

    /// Drop all pending timers. The clock keeps its value.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerColor;

    #[test]
    fn test_pops_in_due_order() {
        let mut scheduler = TickScheduler::new();
        scheduler.schedule(300, ScheduledJob::Deferred(Deferred::DeclareWin(PlayerColor::Red)));
        scheduler.schedule(100, ScheduledJob::AnimationTick);

        assert_eq!(scheduler.next_due(), Some(100));
        assert_eq!(scheduler.pop_due(1_000), Some(ScheduledJob::AnimationTick));
        assert_eq!(scheduler.now_ms(), 100);
        assert_eq!(
            scheduler.pop_due(1_000),
            Some(ScheduledJob::Deferred(Deferred::DeclareWin(PlayerColor::Red)))
        );
        assert_eq!(scheduler.now_ms(), 300);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_same_due_time_is_fifo() {
        let mut scheduler = TickScheduler::new();
        scheduler.schedule(50, ScheduledJob::Deferred(Deferred::DeclareWin(PlayerColor::Blue)));
        scheduler.schedule(50, ScheduledJob::AnimationTick);

        assert!(matches!(scheduler.pop_due(50), Some(ScheduledJob::Deferred(_))));
        assert_eq!(scheduler.pop_due(50), Some(ScheduledJob::AnimationTick));
    }

    #[test]
    fn test_not_yet_due() {
        let mut scheduler = TickScheduler::new();
        scheduler.schedule(250, ScheduledJob::AnimationTick);

        assert_eq!(scheduler.pop_due(249), None);
        assert_eq!(scheduler.now_ms(), 0);
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn test_delays_are_relative_to_now() {
        let mut scheduler = TickScheduler::new();
        scheduler.advance_to(1_000);
        scheduler.schedule(250, ScheduledJob::AnimationTick);
        assert_eq!(scheduler.next_due(), Some(1_250));

        // The clock never runs backwards.
        scheduler.advance_to(10);
        assert_eq!(scheduler.now_ms(), 1_000);
    }

    #[test]
    fn test_clear() {
        let mut scheduler = TickScheduler::new();
        scheduler.schedule(10, ScheduledJob::AnimationTick);
        scheduler.schedule(20, ScheduledJob::AnimationTick);

        scheduler.clear();
        assert!(scheduler.is_idle());
        assert_eq!(scheduler.pop_due(u64::MAX), None);
    }
}
