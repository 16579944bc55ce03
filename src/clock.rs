use std::io;

/// A monotonic clock reading: whole seconds plus a sub-second nanosecond part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timespec {
    pub seconds: i64,
    pub nanoseconds: i64,
}

impl Timespec {
    /// Read the monotonic clock (`CLOCK_MONOTONIC`).
    pub fn now() -> io::Result<Timespec> {
        let mut ts = libc::timespec {
            tv_sec: 0,
            tv_nsec: 0,
        };
        // SAFETY: ts is a valid, writable timespec for the duration of the call.
        let rc = unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts) };
        if rc != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(Timespec {
            seconds: ts.tv_sec as i64,
            nanoseconds: ts.tv_nsec as i64,
        })
    }

    /// Combined value in seconds, for display only — not used in aggregation.
    pub fn as_seconds_f64(&self) -> f64 {
        self.seconds as f64 + self.nanoseconds as f64 / 1_000_000_000.0
    }
}

/// Difference between two monotonic readings.
///
/// When the nanosecond part of `end` is smaller than that of `start`, one
/// second is borrowed so the result's nanosecond part stays in
/// `[0, 1_000_000_000)`. `end` is assumed to be at or after `start`; a clock
/// that ran backwards produces a negative `seconds` field, which is passed
/// through untouched rather than normalised.
pub fn diff(start: Timespec, end: Timespec) -> Timespec {
    if end.nanoseconds - start.nanoseconds < 0 {
        Timespec {
            seconds: end.seconds - start.seconds - 1,
            nanoseconds: 1_000_000_000 + end.nanoseconds - start.nanoseconds,
        }
    } else {
        Timespec {
            seconds: end.seconds - start.seconds,
            nanoseconds: end.nanoseconds - start.nanoseconds,
        }
    }
}
