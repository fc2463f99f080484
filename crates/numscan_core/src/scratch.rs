//! Small-buffer-optimised scratch space for one conversion.
//!
//! Text that needs rewriting (separator removal) is copied here first so the
//! caller's input is never mutated. Short literals, which is nearly all of
//! them, stay inline; longer ones spill to a heap allocation that the buffer
//! keeps across [`ScratchBuffer::reset`] calls.

use smallvec::SmallVec;

use crate::separators::{remove_separators, SeparatorMode};

/// Bytes held inline before spilling to the heap.
pub const INLINE_CAPACITY: usize = 32;

/// Exclusively owned byte buffer scoped to one conversion.
///
/// Reusable across conversions through [`reset`](Self::reset); never meant
/// to be shared between threads while a conversion borrows it.
#[derive(Clone, Debug, Default)]
pub struct ScratchBuffer {
    buf: SmallVec<[u8; INLINE_CAPACITY]>,
}

impl ScratchBuffer {
    /// Create an empty buffer with only inline storage.
    pub fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    /// Create a buffer holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            buf: SmallVec::from_slice(bytes),
        }
    }

    /// Clear the contents, keeping any heap allocation for reuse.
    #[inline]
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Replace the contents with a copy of `bytes`.
    #[inline]
    pub fn load(&mut self, bytes: &[u8]) {
        self.buf.clear();
        self.buf.extend_from_slice(bytes);
    }

    /// Remove valid digit-group separators in place.
    ///
    /// Returns `true` if anything was removed.
    pub fn remove_separators(&mut self, mode: SeparatorMode) -> bool {
        let before = self.buf.len();
        let after = remove_separators(&mut self.buf, mode);
        self.buf.truncate(after);
        after != before
    }

    /// Current contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Number of bytes held.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns `true` once the contents have outgrown inline storage.
    #[inline]
    pub fn spilled(&self) -> bool {
        self.buf.spilled()
    }
}

#[cfg(test)]
mod tests;
