//! Timer-based rate limiters for high-frequency input (scroll, resize)
//!
//! Both limiters are driven by an externally supplied clock (`Duration` since
//! app start, usually `Time::elapsed()`), so they never own a timer thread.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Rate limiting policy for a recomputation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateLimit {
    /// Run on every trigger
    None,
    /// Run at most once per window (milliseconds); the first trigger runs immediately
    Throttle(u64),
    /// Run once the triggers have been quiet for the window (milliseconds)
    Debounce(u64),
}

impl Default for RateLimit {
    fn default() -> Self {
        RateLimit::Throttle(100)
    }
}

/// Skips invocations that fall inside the cooldown window of the last one
#[derive(Clone, Debug)]
pub struct Throttle {
    limit: Duration,
    last_fire: Option<Duration>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self { limit, last_fire: None }
    }

    /// Returns true if a call at `now` may run, and records it
    pub fn ready(&mut self, now: Duration) -> bool {
        match self.last_fire {
            Some(last) if now.saturating_sub(last) < self.limit => false,
            _ => {
                self.last_fire = Some(now);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_fire = None;
    }
}

/// Defers an invocation until triggers stop arriving for `wait`
#[derive(Clone, Debug)]
pub struct Debounce {
    wait: Duration,
    deadline: Option<Duration>,
}

impl Debounce {
    pub fn new(wait: Duration) -> Self {
        Self { wait, deadline: None }
    }

    /// Arm (or re-arm) the deadline
    pub fn trigger(&mut self, now: Duration) {
        self.deadline = Some(now + self.wait);
    }

    /// Returns true exactly once per armed deadline, when it has passed
    pub fn fire(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

/// Runtime state for a [`RateLimit`] policy
#[derive(Clone, Debug)]
pub enum RateLimiter {
    Immediate { pending: bool },
    Throttle { throttle: Throttle, pending: bool },
    Debounce(Debounce),
}

impl RateLimiter {
    pub fn new(policy: RateLimit) -> Self {
        match policy {
            RateLimit::None => RateLimiter::Immediate { pending: false },
            RateLimit::Throttle(ms) => RateLimiter::Throttle {
                throttle: Throttle::new(Duration::from_millis(ms)),
                pending: false,
            },
            RateLimit::Debounce(ms) => RateLimiter::Debounce(Debounce::new(Duration::from_millis(ms))),
        }
    }

    /// Record that the underlying input changed
    pub fn trigger(&mut self, now: Duration) {
        match self {
            RateLimiter::Immediate { pending } => *pending = true,
            RateLimiter::Throttle { pending, .. } => *pending = true,
            RateLimiter::Debounce(debounce) => debounce.trigger(now),
        }
    }

    /// Poll once per frame; true when the guarded work should run now.
    ///
    /// A throttled trigger that lands in the cooldown is kept pending and runs
    /// on the first frame after the window, so the final scroll position is
    /// never dropped.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self {
            RateLimiter::Immediate { pending } => std::mem::take(pending),
            RateLimiter::Throttle { throttle, pending } => {
                if *pending && throttle.ready(now) {
                    *pending = false;
                    true
                } else {
                    false
                }
            }
            RateLimiter::Debounce(debounce) => debounce.fire(now),
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimit::default())
    }
}

/// A callback that runs at most once per window
pub struct Throttled<F> {
    throttle: Throttle,
    func: F,
}

impl<F> Throttled<F> {
    pub fn new(limit: Duration, func: F) -> Self {
        Self {
            throttle: Throttle::new(limit),
            func,
        }
    }

    /// Invoke the callback unless still cooling down; returns its result if it ran
    pub fn call<A, R>(&mut self, now: Duration, args: A) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        if self.throttle.ready(now) {
            Some((self.func)(args))
        } else {
            None
        }
    }
}

/// A callback that runs with the latest arguments once calls go quiet
pub struct Debounced<F, A> {
    debounce: Debounce,
    pending: Option<A>,
    func: F,
}

impl<F, A> Debounced<F, A>
where
    F: FnMut(A),
{
    pub fn new(wait: Duration, func: F) -> Self {
        Self {
            debounce: Debounce::new(wait),
            pending: None,
            func,
        }
    }

    /// Schedule a call; replaces any arguments still waiting
    pub fn call(&mut self, now: Duration, args: A) {
        self.pending = Some(args);
        self.debounce.trigger(now);
    }

    /// Run the pending call if its quiet period elapsed; returns true if it ran
    pub fn poll(&mut self, now: Duration) -> bool {
        if !self.debounce.fire(now) {
            return false;
        }
        match self.pending.take() {
            Some(args) => {
                (self.func)(args);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_throttle_first_call_runs() {
        let mut throttle = Throttle::new(ms(100));
        assert!(throttle.ready(ms(0)));
        assert!(!throttle.ready(ms(50)));
        assert!(!throttle.ready(ms(99)));
        assert!(throttle.ready(ms(100)));
    }

    #[test]
    fn test_debounce_waits_for_quiet() {
        let mut debounce = Debounce::new(ms(10));
        debounce.trigger(ms(0));
        debounce.trigger(ms(5));
        assert!(!debounce.fire(ms(12))); // re-armed at 5 -> deadline 15
        assert!(debounce.fire(ms(15)));
        assert!(!debounce.fire(ms(30))); // fires once
    }

    #[test]
    fn test_throttled_limiter_keeps_trailing_trigger() {
        let mut limiter = RateLimiter::new(RateLimit::Throttle(100));
        limiter.trigger(ms(0));
        assert!(limiter.poll(ms(0)));

        limiter.trigger(ms(20));
        assert!(!limiter.poll(ms(20)));
        assert!(!limiter.poll(ms(80)));
        assert!(limiter.poll(ms(100)));
        assert!(!limiter.poll(ms(250))); // nothing pending
    }

    #[test]
    fn test_immediate_limiter() {
        let mut limiter = RateLimiter::new(RateLimit::None);
        assert!(!limiter.poll(ms(0)));
        limiter.trigger(ms(0));
        assert!(limiter.poll(ms(0)));
        assert!(!limiter.poll(ms(0)));
    }

    #[test]
    fn test_throttled_wrapper() {
        let mut calls = 0;
        let mut throttled = Throttled::new(ms(100), |n: i32| {
            calls += n;
            calls
        });
        assert_eq!(throttled.call(ms(0), 1), Some(1));
        assert_eq!(throttled.call(ms(10), 1), None);
        assert_eq!(throttled.call(ms(120), 2), Some(3));
    }

    #[test]
    fn test_debounced_wrapper_uses_latest_args() {
        let mut seen = Vec::new();
        {
            let mut debounced = Debounced::new(ms(250), |width: u32| seen.push(width));
            debounced.call(ms(0), 800);
            debounced.call(ms(100), 700);
            assert!(!debounced.poll(ms(300)));
            assert!(debounced.poll(ms(350)));
            assert!(!debounced.poll(ms(400)));
        }
        assert_eq!(seen, vec![700]);
    }
}
