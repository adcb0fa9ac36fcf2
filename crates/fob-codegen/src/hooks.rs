//! Minimal synchronous hook pipeline.
//!
//! Extensions tap a hook by name; the owner calls it and every tap runs in
//! registration order.

use std::fmt;

type WaterfallTap<T, A> = Box<dyn Fn(T, &A) -> T + Send + Sync>;
type Tap<A> = Box<dyn Fn(&mut A) + Send + Sync>;

/// Hook folding a value through every tap.
pub struct SyncWaterfallHook<T, A: ?Sized> {
    taps: Vec<(String, WaterfallTap<T, A>)>,
}

impl<T, A: ?Sized> SyncWaterfallHook<T, A> {
    pub fn new() -> Self {
        Self { taps: Vec::new() }
    }

    pub fn tap(
        &mut self,
        name: impl Into<String>,
        tap: impl Fn(T, &A) -> T + Send + Sync + 'static,
    ) {
        self.taps.push((name.into(), Box::new(tap)));
    }

    /// Pass `value` through every tap in order and return the last result.
    pub fn call(&self, value: T, args: &A) -> T {
        self.taps.iter().fold(value, |value, (_, tap)| tap(value, args))
    }

    pub fn tap_names(&self) -> impl Iterator<Item = &str> {
        self.taps.iter().map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }
}

impl<T, A: ?Sized> Default for SyncWaterfallHook<T, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: ?Sized> fmt::Debug for SyncWaterfallHook<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncWaterfallHook")
            .field("taps", &self.tap_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Hook running every tap for its side effect.
pub struct SyncHook<A: ?Sized> {
    taps: Vec<(String, Tap<A>)>,
}

impl<A: ?Sized> SyncHook<A> {
    pub fn new() -> Self {
        Self { taps: Vec::new() }
    }

    pub fn tap(&mut self, name: impl Into<String>, tap: impl Fn(&mut A) + Send + Sync + 'static) {
        self.taps.push((name.into(), Box::new(tap)));
    }

    pub fn call(&self, args: &mut A) {
        for (_, tap) in &self.taps {
            tap(args);
        }
    }

    pub fn tap_names(&self) -> impl Iterator<Item = &str> {
        self.taps.iter().map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }
}

impl<A: ?Sized> Default for SyncHook<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized> fmt::Debug for SyncHook<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncHook")
            .field("taps", &self.tap_names().collect::<Vec<_>>())
            .finish()
    }
}
