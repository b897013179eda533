//! Core types for spark-dom.
//!
//! Everything that crosses the engine boundary is a small integer. These
//! types give those integers names on the host side and fix the mapping
//! tables both sides agree on.

use bitflags::bitflags;

// =============================================================================
// Handle
// =============================================================================

/// Integer identity the engine holds for an element.
pub type Handle = u32;

/// Handle of the mount container, reassigned by every `begin_render`.
pub const ROOT_HANDLE: Handle = 0;

/// Returned by `create` once every handle is in use. Never live.
pub const INVALID_HANDLE: Handle = Handle::MAX;

// =============================================================================
// Tag
// =============================================================================

/// Element kind requested by the engine.
///
/// Wire codes: 1=container, 2=text, 3=actionable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Tag {
    #[default]
    Container = 1,
    Text = 2,
    Actionable = 3,
}

impl Tag {
    /// Map a wire code to a tag. Unknown codes yield `None`; the registry
    /// degrades those to [`Tag::Container`].
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Container),
            2 => Some(Self::Text),
            3 => Some(Self::Actionable),
            _ => None,
        }
    }

    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Host element name (`div`, `p`, `button`).
    pub const fn element_name(self) -> &'static str {
        match self {
            Self::Container => "div",
            Self::Text => "p",
            Self::Actionable => "button",
        }
    }
}

// =============================================================================
// Classes
// =============================================================================

bitflags! {
    /// Class list of a managed element.
    ///
    /// `COMPONENT` marks every element the registry created; the rest are the
    /// layout roles the engine can request by token.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ClassFlags: u8 {
        const COMPONENT = 1 << 0;
        const HORIZONTAL = 1 << 1;
        const VERTICAL = 1 << 2;
        const FLEX = 1 << 3;
        const GRID = 1 << 4;
    }
}

const CLASS_NAMES: [(ClassFlags, &str); 5] = [
    (ClassFlags::COMPONENT, "component"),
    (ClassFlags::HORIZONTAL, "horizontal"),
    (ClassFlags::VERTICAL, "vertical"),
    (ClassFlags::FLEX, "flex"),
    (ClassFlags::GRID, "grid"),
];

impl ClassFlags {
    /// Class names in a stable order, as they appear in a class attribute.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        CLASS_NAMES
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

/// Layout role the engine names by class token.
///
/// Wire codes: 1=horizontal, 2=vertical, 3=flex, 4=grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum LayoutClass {
    Horizontal = 1,
    Vertical = 2,
    Flex = 3,
    Grid = 4,
}

impl LayoutClass {
    pub const fn from_token(token: u32) -> Option<Self> {
        match token {
            1 => Some(Self::Horizontal),
            2 => Some(Self::Vertical),
            3 => Some(Self::Flex),
            4 => Some(Self::Grid),
            _ => None,
        }
    }

    pub const fn token(self) -> u32 {
        self as u32
    }

    pub const fn flag(self) -> ClassFlags {
        match self {
            Self::Horizontal => ClassFlags::HORIZONTAL,
            Self::Vertical => ClassFlags::VERTICAL,
            Self::Flex => ClassFlags::FLEX,
            Self::Grid => ClassFlags::GRID,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Flex => "flex",
            Self::Grid => "grid",
        }
    }
}

// =============================================================================
// Events & Styles
// =============================================================================

/// Interaction a listener is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    /// Fires on every move into the element or one of its children.
    MouseOver,
    /// Fires once when the pointer enters the element.
    PointerEnter,
}

impl EventKind {
    /// Native event name a host binds to.
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::MouseOver => "mouseover",
            Self::PointerEnter => "pointerenter",
        }
    }
}

/// Style property the registry writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    GridArea,
    GridTemplateAreas,
    GridTemplateRows,
    GridTemplateColumns,
}

impl StyleProperty {
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::GridArea => "grid-area",
            Self::GridTemplateAreas => "grid-template-areas",
            Self::GridTemplateRows => "grid-template-rows",
            Self::GridTemplateColumns => "grid-template-columns",
        }
    }
}
