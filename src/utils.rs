//! Utility functions for the charging console

use chrono::{DateTime, Local};

/// Get the current local timestamp
pub fn current_timestamp() -> DateTime<Local> {
    Local::now()
}

/// Number of pages needed to show `len` rows, `per_page` at a time
pub fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}
