//! Rate limiting for event handlers.
//!
//! Both limiters are driven by an adapter-supplied monotonic `now_ms`, the same way the
//! carousel never reads a clock itself. Every instance owns its own state; two limiters
//! never share anything.

/// Lossy throttle: the first call fires immediately and opens a blocked window of
/// `delay_ms`; calls inside the window are dropped, not deferred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Throttle {
    delay_ms: u64,
    blocked_until: Option<u64>,
}

impl Throttle {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            blocked_until: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Returns `true` if a call at `now_ms` may fire, and opens the next blocked window.
    pub fn try_acquire(&mut self, now_ms: u64) -> bool {
        if self.is_blocked(now_ms) {
            return false;
        }
        self.blocked_until = Some(now_ms.saturating_add(self.delay_ms));
        true
    }

    pub fn is_blocked(&self, now_ms: u64) -> bool {
        self.blocked_until.is_some_and(|until| now_ms < until)
    }

    /// End of the current blocked window, if a call has fired.
    pub fn blocked_until(&self) -> Option<u64> {
        self.blocked_until
    }

    /// Forgets the last firing; the next call fires immediately.
    pub fn reset(&mut self) {
        self.blocked_until = None;
    }
}

/// Trailing debounce: every call restarts a `delay_ms` timer and replaces the pending
/// arguments; the call fires once the timer elapses with no newer call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debounce<A = ()> {
    delay_ms: u64,
    pending: Option<(u64, A)>,
}

impl<A> Debounce<A> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn call(&mut self, now_ms: u64, args: A) {
        self.pending = Some((now_ms.saturating_add(self.delay_ms), args));
    }

    /// Takes the pending arguments once their deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> Option<A> {
        match self.pending {
            Some((deadline, _)) if now_ms >= deadline => self.pending.take().map(|(_, a)| a),
            _ => None,
        }
    }

    /// When the pending call will fire; adapters schedule their timer for this.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) -> Option<A> {
        self.pending.take().map(|(_, a)| a)
    }
}

/// A handler wrapped in a [`Throttle`]. The handler runs synchronously inside `call`.
#[derive(Clone, Debug)]
pub struct Throttled<F> {
    throttle: Throttle,
    handler: F,
}

impl<F> Throttled<F> {
    pub fn new(delay_ms: u64, handler: F) -> Self {
        Self {
            throttle: Throttle::new(delay_ms),
            handler,
        }
    }

    /// Runs the handler unless the throttle is blocked. Dropped calls return `None`.
    pub fn call<A, R>(&mut self, now_ms: u64, args: A) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        if !self.throttle.try_acquire(now_ms) {
            atrace!(now_ms, "Throttled::call dropped");
            return None;
        }
        Some((self.handler)(args))
    }

    pub fn throttle(&self) -> &Throttle {
        &self.throttle
    }

    pub fn reset(&mut self) {
        self.throttle.reset();
    }
}

/// A handler wrapped in a [`Debounce`]. The handler runs inside `poll` once input has
/// been quiet for the delay.
#[derive(Clone, Debug)]
pub struct Debounced<F, A = ()> {
    debounce: Debounce<A>,
    handler: F,
}

impl<F, A> Debounced<F, A> {
    pub fn new(delay_ms: u64, handler: F) -> Self {
        Self {
            debounce: Debounce::new(delay_ms),
            handler,
        }
    }

    pub fn call(&mut self, now_ms: u64, args: A) {
        self.debounce.call(now_ms, args);
    }

    pub fn poll<R>(&mut self, now_ms: u64) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        let args = self.debounce.poll(now_ms)?;
        Some((self.handler)(args))
    }

    pub fn deadline(&self) -> Option<u64> {
        self.debounce.deadline()
    }

    pub fn cancel(&mut self) -> bool {
        self.debounce.cancel().is_some()
    }
}
