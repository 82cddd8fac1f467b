//! Cancellable debounce timer
//!
//! A `Debouncer` owns at most one pending timer task. Scheduling a new timer
//! aborts the previous one, and every timer carries a ticket number so the
//! owner can tell a superseded expiry apart from the current one even when an
//! abort loses the race against the timer firing.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    ticket: u64,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            ticket: 0,
            pending: None,
        }
    }

    /// Quiet period before a scheduled callback fires
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `on_elapsed(ticket)` after the quiet period
    ///
    /// Any previously scheduled callback is aborted. Returns the new ticket.
    pub fn schedule<F>(&mut self, runtime: &Handle, on_elapsed: F) -> u64
    where
        F: FnOnce(u64) + Send + 'static,
    {
        self.cancel();
        self.ticket += 1;

        let ticket = self.ticket;
        let delay = self.delay;
        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            on_elapsed(ticket);
        }));

        ticket
    }

    /// Abort the pending callback, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Claim an expired ticket
    ///
    /// Returns `true` exactly once for the most recently scheduled ticket, and
    /// only while it has not been cancelled or superseded.
    pub fn accept(&mut self, ticket: u64) -> bool {
        if self.pending.is_some() && ticket == self.ticket {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_after_quiet_period() {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        let ticket = debouncer.schedule(&Handle::current(), move |t| {
            let _ = tx.send(t);
        });

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.try_recv(), Ok(ticket));
        assert!(debouncer.accept(ticket));
        assert!(!debouncer.cancel());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_supersedes_previous() {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        let first = {
            let tx = tx.clone();
            debouncer.schedule(&Handle::current(), move |t| {
                let _ = tx.send(t);
            })
        };
        tokio::time::sleep(Duration::from_millis(300)).await;
        let second = debouncer.schedule(&Handle::current(), move |t| {
            let _ = tx.send(t);
        });

        tokio::time::sleep(Duration::from_millis(1000)).await;
        let fired: Vec<u64> = rx.try_iter().collect();
        assert_eq!(fired, vec![second]);
        assert!(!debouncer.accept(first));
        assert!(debouncer.accept(second));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_firing() {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        let ticket = debouncer.schedule(&Handle::current(), move |t| {
            let _ = tx.send(t);
        });
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(rx.try_recv().is_err());
        assert!(!debouncer.accept(ticket));
    }

    #[test]
    fn test_accept_is_single_use() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let mut debouncer = Debouncer::new(Duration::from_secs(60));

        let ticket = debouncer.schedule(runtime.handle(), |_| {});
        assert!(debouncer.accept(ticket));
        assert!(!debouncer.accept(ticket));
    }
}
