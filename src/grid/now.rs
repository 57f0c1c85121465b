//! The live "current time" line: a pure derivation plus the one piece of
//! background work the engine owns, a cancellable repaint timer.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use chrono::{DateTime, Local, Timelike};

use super::axis::TimeAxis;

/// Where to draw the current-time line, when it is visible at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NowPosition {
    pub day_index: usize,
    /// Percentage down the visible hour range.
    pub top_percent: f32,
}

/// Derive the current-time line position from a wall-clock snapshot.
///
/// Returns `None` when "now" is outside the visible week or outside the
/// visible hour window. Purely a function of its inputs; the caller decides
/// when to re-evaluate (each frame, or on a [`NowTicker`] tick).
pub fn now_position(now: DateTime<Local>, axis: &TimeAxis) -> Option<NowPosition> {
    let day_index = axis.day_index_of(now.date_naive())?;

    let minutes = (now.time().hour() * 60 + now.time().minute()) as i32;
    if minutes < axis.window_start_minutes() || minutes >= axis.window_end_minutes() {
        return None;
    }

    Some(NowPosition {
        day_index,
        top_percent: (minutes - axis.window_start_minutes()) as f32
            / axis.visible_minutes() as f32
            * 100.0,
    })
}

/// A repeating background timer that fires a callback on a fixed period.
///
/// The thread waits on a channel with a timeout: a timeout means "tick",
/// anything else means the handle was dropped and the thread exits. Dropping
/// the ticker therefore cancels it on every path, including early teardown.
pub struct NowTicker {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl NowTicker {
    /// Spawn the timer thread. If spawning fails nothing is leaked and the
    /// error is returned to the caller.
    pub fn start(
        period: Duration,
        on_tick: impl Fn() + Send + 'static,
    ) -> std::io::Result<Self> {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = std::thread::Builder::new()
            .name("now-ticker".to_string())
            .spawn(move || loop {
                match stop_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => on_tick(),
                    _ => break,
                }
            })?;

        Ok(Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Stop the timer and wait for the thread to exit. Also runs on drop.
    pub fn stop(&mut self) {
        // Dropping the sender disconnects the channel the thread waits on.
        self.stop_tx.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("now-ticker thread panicked");
            }
        }
    }
}

impl Drop for NowTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn axis() -> TimeAxis {
        // Monday 2026-08-24, visible hours 8..22.
        TimeAxis::new(NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(), 8, 22).unwrap()
    }

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn test_wednesday_afternoon_position() {
        // Wednesday 14:30 on an 8..22 grid: (14.5 - 8) / 14 of the range.
        let pos = now_position(local(2026, 8, 26, 14, 30), &axis()).unwrap();
        assert_eq!(pos.day_index, 2);
        assert!((pos.top_percent - (14.5 - 8.0) / 14.0 * 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_hidden_outside_hour_window() {
        assert!(now_position(local(2026, 8, 26, 6, 0), &axis()).is_none());
        assert!(now_position(local(2026, 8, 26, 22, 0), &axis()).is_none());
        // Last visible minute still shows.
        assert!(now_position(local(2026, 8, 26, 21, 59), &axis()).is_some());
    }

    #[test]
    fn test_hidden_outside_visible_week() {
        assert!(now_position(local(2026, 9, 7, 12, 0), &axis()).is_none());
    }

    #[test]
    fn test_ticker_fires_and_stops_on_drop() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);

        let ticker = NowTicker::start(Duration::from_millis(10), move || {
            seen.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        std::thread::sleep(Duration::from_millis(100));
        drop(ticker);
        let after_drop = count.load(Ordering::SeqCst);
        assert!(after_drop >= 1);

        // No further ticks once dropped.
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::SeqCst), after_drop);
    }
}
