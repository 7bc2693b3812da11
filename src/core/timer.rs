// Cancellable timers on a virtual millisecond clock.
//
// The engine never sleeps or reads a clock itself: a `TimerSlot` only records
// a deadline, and the owner asks for due slots while advancing time. Every
// arm hands out a fresh `TimerHandle` and releases the previous one, so a
// stale firing can never be confused with the current one.

/// Milliseconds on a monotonic clock.
pub type Millis = f64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Hands out unique timer handles for one engine.
#[derive(Debug, Default)]
pub struct TimerIds {
    next: u64,
}

impl TimerIds {
    pub fn next(&mut self) -> TimerHandle {
        self.next += 1;
        TimerHandle(self.next)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Armed {
    handle: TimerHandle,
    deadline: Millis,
    period: Option<Millis>,
}

/// One timer that is either idle, a pending timeout, or a repeating interval.
#[derive(Debug, Default)]
pub struct TimerSlot {
    armed: Option<Armed>,
}

impl TimerSlot {
    /// Fire once, `delay` after `now`. Cancels whatever was pending.
    pub fn arm_timeout(&mut self, ids: &mut TimerIds, now: Millis, delay: Millis) -> TimerHandle {
        self.arm(ids, now + delay, None)
    }

    /// Fire every `period`, first at `now + period`. Cancels whatever was pending.
    pub fn arm_interval(&mut self, ids: &mut TimerIds, now: Millis, period: Millis) -> TimerHandle {
        self.arm(ids, now + period, Some(period))
    }

    fn arm(&mut self, ids: &mut TimerIds, deadline: Millis, period: Option<Millis>) -> TimerHandle {
        if let Some(old) = self.cancel() {
            log::trace!("[timer] replacing {:?}", old);
        }
        let handle = ids.next();
        self.armed = Some(Armed {
            handle,
            deadline,
            period,
        });
        handle
    }

    /// Release the pending timer, returning its handle if there was one.
    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.armed.take().map(|a| a.handle)
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    #[inline]
    pub fn handle(&self) -> Option<TimerHandle> {
        self.armed.map(|a| a.handle)
    }

    #[inline]
    pub fn deadline(&self) -> Option<Millis> {
        self.armed.map(|a| a.deadline)
    }

    #[inline]
    pub fn period(&self) -> Option<Millis> {
        self.armed.and_then(|a| a.period)
    }

    /// Deadline of the pending firing if it is due at `now`.
    #[inline]
    pub fn due(&self, now: Millis) -> Option<Millis> {
        self.deadline().filter(|d| *d <= now)
    }

    /// Consume the pending firing. Timeouts go idle; intervals move their
    /// deadline one period forward and keep the same handle.
    pub fn fire(&mut self) -> Option<Millis> {
        let armed = self.armed.take()?;
        if let Some(period) = armed.period {
            self.armed = Some(Armed {
                deadline: armed.deadline + period,
                ..armed
            });
        }
        Some(armed.deadline)
    }
}
