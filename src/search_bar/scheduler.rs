//! # Completion Scheduler
//!
//! One-shot timers for deferred hide completions. A scheduler hands out a
//! [`TimerToken`] per timer and later reports the token back once its delay
//! has elapsed. Tokens come back through [`Scheduler::take_due`], which the
//! controller drains on the UI thread, so no timer ever runs code on its own.
//!
//! ## Implementations
//!
//! - [`FrameScheduler`]: wall-clock deadlines checked whenever the UI polls
//! - [`ManualScheduler`]: deadlines against a [`ManualClock`] moved by hand
//! - [`TokioScheduler`]: each timer is a spawned `tokio::time::sleep`

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::shared::error::SearchBarError;

/// Handle for one scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// One-shot timer capability injected into the visibility controller
pub trait Scheduler {
    /// Current clock reading
    fn now(&self) -> Instant;

    /// Arm a timer that becomes due no earlier than `delay` from now
    fn schedule(&mut self, delay: Duration) -> TimerToken;

    /// Disarm a timer. Returns false if it already fired or never existed.
    fn cancel(&mut self, token: TimerToken) -> bool;

    /// Remove and return every timer that is due
    fn take_due(&mut self) -> Vec<TimerToken>;

    /// Number of armed timers
    fn pending(&self) -> usize;
}

/// Source of time for a [`TimerQueue`]
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The process monotonic clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to. Clones share the same reading.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Deadline list polled against a [`Clock`]
#[derive(Debug)]
pub struct TimerQueue<C: Clock> {
    clock: C,
    next_id: u64,
    deadlines: Vec<(Instant, TimerToken)>,
}

/// Real-time scheduler for hosts that poll once per frame
pub type FrameScheduler = TimerQueue<SystemClock>;

/// Fake-clock scheduler
pub type ManualScheduler = TimerQueue<ManualClock>;

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> TimerQueue<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            next_id: 0,
            deadlines: Vec::new(),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Time left until the earliest armed timer, if any
    pub fn next_deadline_in(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.deadlines
            .iter()
            .map(|(deadline, _)| deadline.saturating_duration_since(now))
            .min()
    }
}

impl<C: Clock> Scheduler for TimerQueue<C> {
    fn now(&self) -> Instant {
        self.clock.now()
    }

    fn schedule(&mut self, delay: Duration) -> TimerToken {
        let token = TimerToken(self.next_id);
        self.next_id += 1;
        self.deadlines.push((self.clock.now() + delay, token));
        token
    }

    fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.deadlines.len();
        self.deadlines.retain(|(_, armed)| *armed != token);
        self.deadlines.len() != before
    }

    fn take_due(&mut self) -> Vec<TimerToken> {
        let now = self.clock.now();
        let mut due: Vec<(Instant, TimerToken)> = Vec::new();
        self.deadlines.retain(|entry| {
            if entry.0 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort();
        due.into_iter().map(|(_, token)| token).collect()
    }

    fn pending(&self) -> usize {
        self.deadlines.len()
    }
}

/// Lets the host keep a handle on the scheduler a controller owns. Due tokens
/// go to whoever drains them first, so one scheduler serves one controller.
impl<S: Scheduler> Scheduler for Rc<RefCell<S>> {
    fn now(&self) -> Instant {
        self.borrow().now()
    }

    fn schedule(&mut self, delay: Duration) -> TimerToken {
        self.borrow_mut().schedule(delay)
    }

    fn cancel(&mut self, token: TimerToken) -> bool {
        self.borrow_mut().cancel(token)
    }

    fn take_due(&mut self) -> Vec<TimerToken> {
        self.borrow_mut().take_due()
    }

    fn pending(&self) -> usize {
        self.borrow().pending()
    }
}

/// Scheduler backed by tokio timers
///
/// Every timer is a task that sleeps and then reports its token over a
/// channel. Cancelling aborts the task; dropping the scheduler aborts all of
/// them.
#[derive(Debug)]
pub struct TokioScheduler {
    handle: tokio::runtime::Handle,
    next_id: u64,
    tasks: HashMap<TimerToken, JoinHandle<()>>,
    fired_tx: mpsc::UnboundedSender<TimerToken>,
    fired_rx: mpsc::UnboundedReceiver<TimerToken>,
}

impl TokioScheduler {
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        Self {
            handle,
            next_id: 0,
            tasks: HashMap::new(),
            fired_tx,
            fired_rx,
        }
    }

    /// Bind to the runtime of the calling context
    pub fn current() -> Result<Self, SearchBarError> {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|_| SearchBarError::no_runtime("TokioScheduler::current"))?;
        Ok(Self::new(handle))
    }
}

impl Scheduler for TokioScheduler {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }

    fn schedule(&mut self, delay: Duration) -> TimerToken {
        let token = TimerToken(self.next_id);
        self.next_id += 1;
        let fired_tx = self.fired_tx.clone();
        // Deadline from the moment of scheduling, not the task's first poll.
        let deadline = tokio::time::Instant::now() + delay;
        let task = self.handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = fired_tx.send(token);
        });
        self.tasks.insert(token, task);
        token
    }

    fn cancel(&mut self, token: TimerToken) -> bool {
        match self.tasks.remove(&token) {
            Some(task) => {
                task.abort();
                true
            }
            None => false,
        }
    }

    fn take_due(&mut self) -> Vec<TimerToken> {
        let mut due = Vec::new();
        while let Ok(token) = self.fired_rx.try_recv() {
            // A token can land in the channel just before `cancel` removes it.
            if self.tasks.remove(&token).is_some() {
                due.push(token);
            }
        }
        due
    }

    fn pending(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
