//! Notification banner and the clock it expires against

pub mod clock;
pub mod flash;

pub use clock::{Clock, ManualClock, SystemClock};
pub use flash::{FlashService, DEFAULT_FLASH_DURATION};
