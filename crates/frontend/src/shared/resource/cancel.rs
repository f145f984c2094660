use leptos::prelude::on_cleanup;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Set once the owning page is gone; async continuations check it before
/// writing into signals that may already be disposed.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Token cancelled when the current reactive owner is cleaned up.
pub fn scoped_token() -> CancelToken {
    let token = CancelToken::new();
    let on_drop = token.clone();
    on_cleanup(move || on_drop.cancel());
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let token = CancelToken::new();
        let held_by_task = token.clone();
        assert!(!held_by_task.is_cancelled());
        token.cancel();
        assert!(held_by_task.is_cancelled());
    }
}
