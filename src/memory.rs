//! Engine Memory - access to the engine's linear byte region.
//!
//! The engine may grow (and so reallocate) its memory between calls. The
//! registry never caches a slice: every command asks the accessor again.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::CodecError;

/// Accessor for the engine's current memory.
pub trait EngineMemory {
    /// Run `f` against the bytes as they are right now.
    fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R;
}

impl EngineMemory for Vec<u8> {
    fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(self.as_slice())
    }
}

/// Growable memory shared between an engine and a registry.
///
/// Clones share the same bytes, so the engine side can keep writing while
/// the registry holds its own clone.
#[derive(Debug, Clone, Default)]
pub struct SharedMemory {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl SharedMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Memory of `len` zeroed bytes.
    pub fn with_len(len: usize) -> Self {
        Self::from_vec(vec![0; len])
    }

    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Rc::new(RefCell::new(bytes)),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.borrow().is_empty()
    }

    /// Grow by `additional` zeroed bytes. Returns the previous length.
    pub fn grow(&self, additional: usize) -> usize {
        let mut bytes = self.bytes.borrow_mut();
        let previous = bytes.len();
        bytes.resize(previous + additional, 0);
        previous
    }

    /// Copy `data` into memory at `offset`.
    pub fn write(&self, offset: usize, data: &[u8]) -> Result<(), CodecError> {
        let mut bytes = self.bytes.borrow_mut();
        let available = bytes.len();
        let end = offset.checked_add(data.len()).ok_or(CodecError::Overflow {
            offset,
            count: data.len(),
        })?;
        let target = bytes.get_mut(offset..end).ok_or(CodecError::OutOfBounds {
            offset,
            len: data.len(),
            available,
        })?;
        target.copy_from_slice(data);
        Ok(())
    }

    /// Write `values` as little-endian `u32` at `offset`.
    pub fn write_u32s(&self, offset: usize, values: &[u32]) -> Result<(), CodecError> {
        let data: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.write(offset, &data)
    }
}

impl EngineMemory for SharedMemory {
    fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(self.bytes.borrow().as_slice())
    }
}
