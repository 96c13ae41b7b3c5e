use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// Unified event type consumed by the screen controller. All state
/// mutation happens on the single thread draining these, so no
/// locking is needed anywhere in the screens.
#[derive(Clone, Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    /// Payload-less wake posted by a [`TickTimer`]; forces elapsed
    /// time to be re-evaluated but never mutates session state.
    Tick,
}

/// Blocking source of [`AppEvent`]s.
pub trait EventSource {
    fn next(&self) -> Result<AppEvent, RecvError>;
}

/// Single ordered event stream. Terminal input and synthetic ticks
/// funnel through the same channel, preserving single-writer
/// discipline on the consuming side.
pub struct EventBus {
    tx: Sender<AppEvent>,
    rx: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// Clonable handle for enqueueing synthetic events.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }

    /// Spawn the crossterm reader thread feeding this bus.
    pub fn spawn_input_reader(&self) {
        let tx = self.tx.clone();
        thread::spawn(move || loop {
            match event::read() {
                Ok(CtEvent::Key(key)) => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(CtEvent::Resize(_, _)) => {
                    if tx.send(AppEvent::Resize).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        });
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for EventBus {
    fn next(&self) -> Result<AppEvent, RecvError> {
        self.rx.recv()
    }
}

/// Once-per-interval poster of [`AppEvent::Tick`], bound to the
/// lifetime of the screen that owns it: dropping the timer stops the
/// background thread, so transitions never leak live timers.
///
/// Delivery is at-least-once-per-interval with no real-time
/// guarantee; consumers recompute elapsed time from the session start
/// timestamp instead of trusting tick counts.
#[derive(Debug)]
pub struct TickTimer {
    cancelled: Arc<AtomicBool>,
}

impl TickTimer {
    pub fn start(tx: Sender<AppEvent>, interval: Duration) -> Self {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        thread::spawn(move || loop {
            thread::sleep(interval);
            if flag.load(Ordering::Relaxed) {
                break;
            }
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
        });
        Self { cancelled }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Scripted event source for headless tests.
pub struct TestEventSource {
    rx: Receiver<AppEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<AppEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEventSource {
    fn next(&self) -> Result<AppEvent, RecvError> {
        self.rx.recv()
    }
}
