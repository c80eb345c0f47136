//! Cache invalidation shared by structures with lazily derived outputs.

/// Anything that caches results derived from its inputs (node outputs, …)
/// should implement this.
pub trait InvalidateCache {
    /// Invalidate *all* internal caches so future reads recompute correctly.
    fn invalidate_cache(&mut self);
}
