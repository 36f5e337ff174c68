//! Clock
//!
//! Source of the current time, injected so date logic stays deterministic.

use chrono::{DateTime, Local, Utc};

pub trait Clock: Send + Sync {
    /// Current time in the user's time zone
    fn now(&self) -> DateTime<Local>;

    fn now_utc(&self) -> DateTime<Utc> {
        self.now().with_timezone(&Utc)
    }
}

/// Wall clock of the browser (or host, in tests)
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock(DateTime<Local>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            self.0
        }
    }

    #[test]
    fn test_now_utc_is_same_instant() {
        let local = Local::now();
        let clock = FixedClock(local);
        assert_eq!(clock.now_utc(), local.with_timezone(&Utc));
        assert_eq!(clock.now_utc().timestamp_millis(), local.timestamp_millis());
    }
}
