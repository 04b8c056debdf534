//! Shared resolution context
//!
//! [`Converter`](crate::Converter) and [`Injector`](crate::Injector) are two
//! handles onto one context: the conversion table, the host type system and
//! the resolution options. Nesting depth is tracked per thread, so only the
//! conversions a call is actually nested inside count against the limit.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use conjure_domain::ports::TypeSystem;
use conjure_domain::{Error, Result};

use crate::registry::ConversionTable;

/// Tunables for conversion and construction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionOptions {
    /// Maximum nesting of conversions; unbounded when `None`
    ///
    /// Cyclic constructor dependencies recurse until this limit (or the
    /// stack) is exhausted.
    pub max_depth: Option<usize>,
}

impl ResolutionOptions {
    /// Set the nesting guard
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

pub(crate) struct Context {
    table: RwLock<ConversionTable>,
    pub(crate) types: Arc<dyn TypeSystem>,
    pub(crate) options: ResolutionOptions,
}

thread_local! {
    /// Current nesting depth on this thread, keyed by context address
    static DEPTHS: RefCell<HashMap<usize, usize>> = RefCell::new(HashMap::new());
}

impl Context {
    pub(crate) fn new(types: Arc<dyn TypeSystem>, options: ResolutionOptions) -> Self {
        Self {
            table: RwLock::new(ConversionTable::default()),
            types,
            options,
        }
    }

    // Guards are never held across a nested conversion, so a poisoned lock
    // still holds a consistent table.
    pub(crate) fn read_table(&self) -> RwLockReadGuard<'_, ConversionTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write_table(&self) -> RwLockWriteGuard<'_, ConversionTable> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Enter one conversion level, failing past the configured depth
    ///
    /// The level is left when the guard drops.
    pub(crate) fn enter(&self) -> Result<DepthGuard<'_>> {
        let key = std::ptr::from_ref(self) as usize;
        let depth = DEPTHS.with(|depths| {
            let mut depths = depths.borrow_mut();
            let depth = depths.entry(key).or_insert(0);
            *depth += 1;
            *depth
        });
        let guard = DepthGuard { key, _context: self };
        if let Some(limit) = self.options.max_depth
            && depth > limit
        {
            return Err(Error::recursion_limit(limit));
        }
        Ok(guard)
    }
}

pub(crate) struct DepthGuard<'a> {
    key: usize,
    _context: &'a Context,
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        DEPTHS.with(|depths| {
            let mut depths = depths.borrow_mut();
            if let Some(depth) = depths.get_mut(&self.key) {
                *depth -= 1;
                if *depth == 0 {
                    depths.remove(&self.key);
                }
            }
        });
    }
}
