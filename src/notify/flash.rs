//! Transient banner shared by every view
//!
//! A banner lives for a fixed duration after the most recent `show`. Expiry is
//! checked against the injected [`Clock`] whenever the banner is read, so a
//! newer message always carries its own full lifetime.

use super::clock::{Clock, SystemClock};
use crate::types::{Flash, FlashKind};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Default banner lifetime
pub const DEFAULT_FLASH_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Default)]
struct FlashState {
    current: Option<Flash>,
    expires_at: Option<Instant>,
}

/// Process-wide notification slot, last write wins
pub struct FlashService {
    clock: Arc<dyn Clock>,
    duration: Duration,
    state: Mutex<FlashState>,
}

impl FlashService {
    /// Banner service on the wall clock
    pub fn new(duration: Duration) -> Self {
        Self::with_clock(Arc::new(SystemClock), duration)
    }

    pub fn with_clock(clock: Arc<dyn Clock>, duration: Duration) -> Self {
        Self {
            clock,
            duration,
            state: Mutex::new(FlashState::default()),
        }
    }

    /// Replace the banner and restart its countdown
    pub fn show(&self, message: impl Into<String>, kind: FlashKind) {
        let message = message.into();
        let now = self.clock.now();
        let Ok(mut state) = self.state.lock() else {
            warn!("Flash state lock poisoned, dropping message: {}", message);
            return;
        };

        debug!("flash [{}] {}", kind, message);
        state.current = Some(Flash { kind, message });
        state.expires_at = Some(now + self.duration);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, FlashKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, FlashKind::Error)
    }

    /// Blank the banner immediately
    pub fn clear(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.current = None;
            state.expires_at = None;
        }
    }

    /// The live banner, if any
    pub fn current(&self) -> Option<Flash> {
        let now = self.clock.now();
        let mut state = self.state.lock().ok()?;
        if state.expires_at.is_some_and(|expires_at| now >= expires_at) {
            state.current = None;
            state.expires_at = None;
        }
        state.current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::clock::ManualClock;

    fn service() -> (FlashService, ManualClock) {
        let clock = ManualClock::new();
        let service = FlashService::with_clock(Arc::new(clock.clone()), DEFAULT_FLASH_DURATION);
        (service, clock)
    }

    #[test]
    fn test_show_sets_banner() {
        let (flash, _clock) = service();
        assert!(flash.current().is_none());

        flash.show("User 123 created successfully.", FlashKind::Success);
        let current = flash.current().unwrap();
        assert_eq!(current.kind, FlashKind::Success);
        assert_eq!(current.message, "User 123 created successfully.");
    }

    #[test]
    fn test_banner_clears_exactly_after_duration() {
        let (flash, clock) = service();
        flash.error("boom");

        clock.advance(Duration::from_millis(2999));
        assert!(flash.current().is_some());

        clock.advance(Duration::from_millis(1));
        assert!(flash.current().is_none());
    }

    #[test]
    fn test_new_show_resets_countdown() {
        let (flash, clock) = service();
        flash.success("first");

        clock.advance(Duration::from_millis(2000));
        flash.error("second");

        // The first message's deadline passes, the second is still live
        clock.advance(Duration::from_millis(1500));
        let current = flash.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.kind, FlashKind::Error);

        clock.advance(Duration::from_millis(1500));
        assert!(flash.current().is_none());
    }

    #[test]
    fn test_clear_is_immediate() {
        let (flash, _clock) = service();
        flash.success("done");
        flash.clear();
        assert!(flash.current().is_none());
    }

    #[test]
    fn test_wall_clock_service_shows_banner() {
        let flash = FlashService::new(DEFAULT_FLASH_DURATION);
        flash.success("done");
        assert_eq!(flash.current().map(|f| f.kind), Some(FlashKind::Success));
    }
}
