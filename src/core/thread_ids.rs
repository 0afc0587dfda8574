//! Process and OS thread identifiers for the `[pid/tid]` field

use std::cell::Cell;
use std::fmt;

thread_local! {
    static OS_THREAD_ID_CACHE: Cell<Option<u64>> = const { Cell::new(None) };
}

/// Identifiers of the thread that formats a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadIds {
    pub pid: u32,
    pub tid: u64,
}

impl ThreadIds {
    pub const fn new(pid: u32, tid: u64) -> Self {
        Self { pid, tid }
    }

    /// Identifiers of the calling thread
    pub fn current() -> Self {
        Self {
            pid: std::process::id(),
            tid: os_thread_id(),
        }
    }
}

impl fmt::Display for ThreadIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.pid, self.tid)
    }
}

/// Get cached OS thread ID, computing and caching it on first access
pub fn os_thread_id() -> u64 {
    OS_THREAD_ID_CACHE.with(|cache| match cache.get() {
        Some(tid) => tid,
        None => {
            let tid = query_os_thread_id();
            cache.set(Some(tid));
            tid
        }
    })
}

#[cfg(target_os = "linux")]
#[allow(clippy::unnecessary_cast)] // syscall return type varies by platform
fn query_os_thread_id() -> u64 {
    // SAFETY: gettid takes no arguments and cannot fail
    unsafe { libc::syscall(libc::SYS_gettid) as u64 }
}

#[cfg(not(target_os = "linux"))]
fn query_os_thread_id() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};

    // No portable gettid; hand out process-unique sequential ids instead
    static NEXT_ID: AtomicU64 = AtomicU64::new(1);
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
