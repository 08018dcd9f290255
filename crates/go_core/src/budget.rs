//! Search limits shared by every engine implementation.
//!
//! Depth is the primary bound; node and wall-clock ceilings are optional
//! extras. When a ceiling trips mid-search the engine must come back with
//! the best move it has fully scored so far and report `stopped`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies.
    pub depth: u8,
    /// Maximum nodes to expand (None = unlimited).
    pub node_budget: Option<u64>,
    /// Maximum time allowed for this move (None = unlimited).
    pub move_time: Option<Duration>,
    /// Shared stop handle engines poll during search.
    pub budget: SearchBudget,
}

impl SearchLimits {
    /// Limits with only a depth bound.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            node_budget: None,
            move_time: None,
            budget: SearchBudget::new(None, None),
        }
    }

    /// Depth plus a node ceiling.
    pub fn depth_and_nodes(depth: u8, nodes: u64) -> Self {
        Self {
            depth,
            node_budget: Some(nodes),
            move_time: None,
            budget: SearchBudget::new(Some(nodes), None),
        }
    }

    /// Depth plus a wall-clock ceiling.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            node_budget: None,
            move_time: Some(move_time),
            budget: SearchBudget::new(None, Some(move_time)),
        }
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.budget.is_stopped()
    }

    /// Start the clock. Call when search begins.
    pub fn start(&self) {
        self.budget.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(3)
    }
}

/// Cheaply cloneable stop handle: an atomic flag plus the configured
/// ceilings. The flag check is a relaxed load, safe to poll per node; the
/// clock itself is only consulted every `check_interval` nodes.
#[derive(Debug, Clone)]
pub struct SearchBudget {
    stopped: Arc<AtomicBool>,
    start_time: Arc<std::sync::RwLock<Option<Instant>>>,
    node_limit: Option<u64>,
    time_limit: Option<Duration>,
    check_interval: u64,
}

impl SearchBudget {
    pub fn new(node_limit: Option<u64>, time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(std::sync::RwLock::new(None)),
            node_limit,
            time_limit,
            check_interval: 1024,
        }
    }

    pub fn start(&self) {
        if let Ok(mut start) = self.start_time.write() {
            *start = Some(Instant::now());
        }
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Force the search to stop.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Poll the ceilings given the current node count. The node ceiling is
    /// exact; the clock is checked every `check_interval` nodes.
    pub fn check(&self, nodes: u64) -> bool {
        if self.is_stopped() {
            return true;
        }

        if let Some(limit) = self.node_limit {
            if nodes >= limit {
                self.stop();
                return true;
            }
        }

        if nodes % self.check_interval == 0 {
            if let Some(limit) = self.time_limit {
                if self.elapsed() >= limit {
                    self.stop();
                    return true;
                }
            }
        }

        false
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time
            .read()
            .ok()
            .and_then(|s| s.map(|start| start.elapsed()))
            .unwrap_or(Duration::ZERO)
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
#[path = "budget_tests.rs"]
mod budget_tests;
