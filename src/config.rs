//! Registry configuration.

use bitflags::bitflags;

use crate::types::EventKind;

bitflags! {
    /// Behaviour switches for a registry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RegistryFlags: u32 {
        /// Add the `component` class to every created element.
        const MARK_COMPONENTS = 1 << 0;
        /// Bind hover handlers to pointer-enter instead of mouseover.
        const HOVER_ON_ENTER = 1 << 1;
    }
}

impl Default for RegistryFlags {
    fn default() -> Self {
        Self::MARK_COMPONENTS
    }
}

/// Configuration passed to [`Registry::with_config`](crate::Registry::with_config).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegistryConfig {
    pub flags: RegistryFlags,
}

impl RegistryConfig {
    pub fn new(flags: RegistryFlags) -> Self {
        Self { flags }
    }

    pub fn marks_components(&self) -> bool {
        self.flags.contains(RegistryFlags::MARK_COMPONENTS)
    }

    /// Event kind hover handlers attach to.
    pub fn hover_event(&self) -> EventKind {
        if self.flags.contains(RegistryFlags::HOVER_ON_ENTER) {
            EventKind::PointerEnter
        } else {
            EventKind::MouseOver
        }
    }
}
