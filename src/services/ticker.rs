//! One-second countdown ticks bound to the lifetime of the flow they drive.
//!
//! A [`Ticker`] holds only a weak reference to its target, so a dropped flow
//! stops the task on the next tick, and dropping the ticker itself aborts the
//! task immediately. [`Timed`] pairs a flow with its ticker so that tearing
//! down the flow always cancels its timer.

use std::{
    sync::{Arc, Weak},
    time::Duration,
};

use tokio::{
    sync::{Mutex, MutexGuard},
    task::JoinHandle,
    time::{self, Instant},
};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Halt,
}

/// A state machine advanced by one tick per second.
pub trait Countdown: Send + 'static {
    fn tick(&mut self) -> Tick;
}

pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    pub fn spawn<T: Countdown>(target: Weak<Mutex<T>>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
            loop {
                interval.tick().await;
                let Some(target) = target.upgrade() else {
                    break;
                };
                let mut state = target.lock().await;
                if state.tick() == Tick::Halt {
                    tracing::debug!("countdown halted");
                    break;
                }
            }
        });

        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub struct Timed<T> {
    state: Arc<Mutex<T>>,
    ticker: Ticker,
}

impl<T: Countdown> Timed<T> {
    pub fn start(state: T) -> Self {
        let state = Arc::new(Mutex::new(state));
        let ticker = Ticker::spawn(Arc::downgrade(&state));
        Self { state, ticker }
    }

    pub async fn lock(&self) -> MutexGuard<'_, T> {
        self.state.lock().await
    }

    /// Replaces the ticker; the previous one is aborted.
    pub fn restart(&mut self) {
        self.ticker = Ticker::spawn(Arc::downgrade(&self.state));
    }

    pub fn is_ticking(&self) -> bool {
        !self.ticker.is_finished()
    }
}
