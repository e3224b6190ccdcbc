//! Hot-reloadable handle around the current [`Context`]
//!
//! Readers pin the current context once per call; [`Filter::reload`]
//! swaps in a freshly built one only after the build succeeded. A retired
//! context is freed when the last call pinning it returns.

use crate::config::Limits;
use crate::context::{Context, Source};
use crate::error::{BuildResult, MatchResult};
use crate::matcher::Match;
use arc_swap::ArcSwap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared binding from "current" to a built context
pub struct Filter {
    current: ArcSwap<Context>,
    limits: Limits,
    generation: AtomicU64,
}

impl Filter {
    /// Build the first context from `source`
    pub fn create(source: &Source, limits: Limits) -> BuildResult<Self> {
        let context = Context::create(source, limits)?;
        log::info!("dictionary loaded: {} words", context.len());
        Ok(Self::from_context(context))
    }

    /// Wrap an already built context
    pub fn from_context(context: Context) -> Self {
        Self {
            limits: *context.limits(),
            current: ArcSwap::from_pointee(context),
            generation: AtomicU64::new(0),
        }
    }

    /// Replace the current context with one built from `source`
    ///
    /// On failure the current context stays installed and keeps answering.
    pub fn reload(&self, source: &Source) -> BuildResult<()> {
        let context = match Context::create(source, self.limits) {
            Ok(context) => context,
            Err(err) => {
                log::warn!("dictionary reload failed, keeping previous: {err}");
                return Err(err);
            }
        };
        let words = context.len();
        self.current.store(Arc::new(context));
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        log::info!("dictionary reloaded: {words} words (generation {generation})");
        Ok(())
    }

    /// Drop this handle; contexts still pinned elsewhere outlive it
    pub fn release(self) {
        log::debug!(
            "releasing filter at generation {}",
            self.generation.load(Ordering::Acquire)
        );
    }

    /// Pin the current context
    pub fn snapshot(&self) -> Arc<Context> {
        self.current.load_full()
    }

    /// Number of successful reloads
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Limits every context of this handle is built with
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// [`Context::contains_dirty`] on the current context
    pub fn contains_dirty(&self, buffer: &[u8]) -> MatchResult<bool> {
        self.current.load().contains_dirty(buffer)
    }

    /// [`Context::mask_dirty`] on the current context
    pub fn mask_dirty(&self, buffer: &mut [u8]) -> MatchResult<bool> {
        self.current.load().mask_dirty(buffer)
    }

    /// [`Context::find_dirty`] on the current context
    pub fn find_dirty(&self, buffer: &[u8]) -> MatchResult<Vec<Match>> {
        self.current.load().find_dirty(buffer)
    }
}

impl std::fmt::Debug for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("words", &self.current.load().len())
            .field("limits", &self.limits)
            .field("generation", &self.generation())
            .finish()
    }
}
