//! Fixed-rate scheduler that owns the state it drives.
//!
//! All mutable state, including the control flags, lives behind one mutex.
//! Control calls from other threads therefore serialise against a running
//! tick: they wait for it to finish and take effect at the next loop head.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

struct Shared<S> {
    state: S,
    running: bool,
    paused: bool,
    ticks_per_second: i64,
    tick: u64,
    stop_at: Option<u64>,
}

pub struct Ticker<S> {
    shared: Mutex<Shared<S>>,
}

/// Exclusive access to the ticker state. The loop is blocked while held.
pub struct TickerGuard<'a, S> {
    guard: MutexGuard<'a, Shared<S>>,
}

impl<S> Deref for TickerGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.guard.state
    }
}

impl<S> DerefMut for TickerGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut self.guard.state
    }
}

impl<S> TickerGuard<'_, S> {
    /// Ticks advanced so far.
    pub fn tick(&self) -> u64 {
        self.guard.tick
    }
}

impl<S> Ticker<S> {
    pub fn new(state: S, ticks_per_second: i64) -> Self {
        Self {
            shared: Mutex::new(Shared {
                state,
                running: false,
                paused: false,
                ticks_per_second: ticks_per_second.max(1),
                tick: 0,
                stop_at: None,
            }),
        }
    }

    fn shared(&self) -> MutexGuard<'_, Shared<S>> {
        self.shared.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Arms and runs the loop on the calling thread until [`Ticker::stop`].
    ///
    /// `work` runs once per unpaused tick with the freshly advanced counter.
    /// `always` runs every iteration, paused or not.
    pub fn start<W, A>(&self, work: W, always: A)
    where
        W: FnMut(u64, &mut S),
        A: FnMut(u64, &mut S),
    {
        if self.arm() {
            self.run(work, always);
        }
    }

    /// Marks the ticker as running. Returns false if it already was.
    ///
    /// Arming before handing the ticker to another thread keeps an early
    /// [`Ticker::stop`] from being overwritten.
    pub fn arm(&self) -> bool {
        let mut shared = self.shared();
        if shared.running {
            return false;
        }
        shared.running = true;
        true
    }

    /// Loop body of [`Ticker::start`]. Returns at once unless armed.
    pub fn run<W, A>(&self, mut work: W, mut always: A)
    where
        W: FnMut(u64, &mut S),
        A: FnMut(u64, &mut S),
    {
        tracing::debug!("Ticker started");
        loop {
            let started = Instant::now();
            let period = {
                let mut shared = self.shared();
                if shared.stop_at.is_some_and(|limit| shared.tick >= limit) {
                    shared.running = false;
                }
                if !shared.running {
                    break;
                }

                let shared = &mut *shared;
                if !shared.paused {
                    shared.tick += 1;
                    work(shared.tick, &mut shared.state);
                }
                always(shared.tick, &mut shared.state);
                period(shared.ticks_per_second)
            };
            std::thread::sleep(period.saturating_sub(started.elapsed()));
        }
        tracing::debug!("Ticker stopped");
    }

    /// Cooperative: the loop exits at its next head.
    pub fn stop(&self) {
        self.shared().running = false;
    }

    /// Stops the loop once the counter reaches `ticks`.
    pub fn stop_after(&self, ticks: u64) {
        self.shared().stop_at = Some(ticks);
    }

    pub fn pause(&self) {
        self.shared().paused = true;
        tracing::debug!("Ticker paused");
    }

    pub fn resume(&self) {
        self.shared().paused = false;
        tracing::debug!("Ticker resumed");
    }

    /// Flips pause state. Returns true if now paused.
    pub fn toggle_pause_resume(&self) -> bool {
        let mut shared = self.shared();
        shared.paused = !shared.paused;
        shared.paused
    }

    pub fn is_paused(&self) -> bool {
        self.shared().paused
    }

    pub fn is_running(&self) -> bool {
        self.shared().running
    }

    pub fn tick(&self) -> u64 {
        self.shared().tick
    }

    pub fn ticks_per_second(&self) -> i64 {
        self.shared().ticks_per_second
    }

    /// Applied from the next sleep on. Values <= 0 become 1.
    pub fn set_ticks_per_second(&self, ticks_per_second: i64) {
        let clamped = ticks_per_second.max(1);
        self.shared().ticks_per_second = clamped;
        tracing::debug!(ticks_per_second = clamped, "Tick rate changed");
    }

    /// Locks the state. Dropping the guard unlocks it.
    pub fn lock(&self) -> TickerGuard<'_, S> {
        TickerGuard {
            guard: self.shared(),
        }
    }

    pub fn into_inner(self) -> S {
        self.shared
            .into_inner()
            .unwrap_or_else(|e| e.into_inner())
            .state
    }
}

fn period(ticks_per_second: i64) -> Duration {
    Duration::from_secs_f64(1.0 / ticks_per_second.max(1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_rate_is_clamped() {
        let ticker = Ticker::new((), 0);
        assert_eq!(ticker.ticks_per_second(), 1);
        ticker.set_ticks_per_second(-5);
        assert_eq!(ticker.ticks_per_second(), 1);
        ticker.set_ticks_per_second(120);
        assert_eq!(ticker.ticks_per_second(), 120);
    }

    #[test]
    fn test_stop_after_runs_exact_ticks() {
        let ticker = Ticker::new(Vec::new(), 10_000);
        ticker.stop_after(5);
        ticker.start(|tick, seen: &mut Vec<u64>| seen.push(tick), |_, _| {});
        assert_eq!(ticker.into_inner(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_paused_skips_work_but_runs_always() {
        let ticker = Ticker::new((0u32, 0u32), 10_000);
        ticker.pause();
        let ticker = Arc::new(ticker);
        let runner = Arc::clone(&ticker);
        let handle = std::thread::spawn(move || {
            runner.start(|_, s| s.0 += 1, |_, s| s.1 += 1);
        });
        while ticker.lock().1 < 20 {
            std::thread::yield_now();
        }
        ticker.stop();
        handle.join().expect("ticker thread");

        let state = ticker.lock();
        assert_eq!(state.0, 0);
        assert!(state.1 >= 20);
        assert_eq!(state.tick(), 0);
    }

    #[test]
    fn test_stop_before_run_wins() {
        let ticker = Ticker::new(0u32, 10_000);
        assert!(ticker.arm());
        assert!(!ticker.arm());
        ticker.stop();
        ticker.run(|_, n| *n += 1, |_, _| {});
        assert_eq!(ticker.into_inner(), 0);
    }

    #[test]
    fn test_toggle() {
        let ticker = Ticker::new((), 60);
        assert!(ticker.toggle_pause_resume());
        assert!(ticker.is_paused());
        assert!(!ticker.toggle_pause_resume());
    }
}
