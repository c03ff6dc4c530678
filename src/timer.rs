//! High-resolution stopwatch. Misuse (stopping before starting, or reading
//! a result before stopping) is a programming defect, not a recoverable
//! error, so it's `assert!`, never `Result`.
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Initial,
    Running,
    Finished,
}

#[derive(Debug)]
pub struct Timer {
    state: State,
    started_at: Option<Instant>,
    elapsed: Option<Duration>,
}

impl Timer {
    pub fn new() -> Self {
        Timer { state: State::Initial, started_at: None, elapsed: None }
    }

    /// Starts or restarts the timer. Only valid from `Initial` or `Finished`.
    pub fn start(&mut self) {
        assert!(
            matches!(self.state, State::Initial | State::Finished),
            "Timer::start called while already running"
        );
        self.state = State::Running;
        self.started_at = Some(Instant::now());
    }

    /// Stops the timer. Only valid while `Running`.
    pub fn stop(&mut self) {
        assert!(self.state == State::Running, "Timer::stop called without a matching start");
        let started_at = self.started_at.expect("started_at set whenever state is Running");
        self.elapsed = Some(Instant::now().duration_since(started_at));
        self.state = State::Finished;
    }

    /// The most recently completed interval, in milliseconds. Only valid
    /// once `Finished`.
    pub fn result_millis(&self) -> i64 {
        assert!(self.state == State::Finished, "Timer::result_millis called before stop");
        self.elapsed.expect("elapsed set whenever state is Finished").as_millis() as i64
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
