//! Imports - the engine-facing call table.
//!
//! An engine links against named host functions and passes plain integers.
//! [`Command::decode`] turns one such call into a typed command and
//! [`Registry::apply`] runs it.
//!
//! | import                           | arguments                          | returns |
//! |----------------------------------|------------------------------------|---------|
//! | `element_render_begin`           | -                                  | handle  |
//! | `element_render_end`             | -                                  | -       |
//! | `element_create`                 | tag                                | handle  |
//! | `element_remove`                 | handle                             | -       |
//! | `element_setTextS`               | handle, offset, length             | -       |
//! | `element_setClickEvent`          | handle, code                       | -       |
//! | `element_removeClickEvent`       | handle, code                       | -       |
//! | `element_setHoverEvent`          | handle, code                       | -       |
//! | `element_removeHoverEvent`       | handle, code                       | -       |
//! | `element_addClass`               | handle, class                      | -       |
//! | `element_setGridArea`            | handle, area                       | -       |
//! | `element_setGridTemplateAreasS`  | handle, offset, width, height      | -       |
//! | `element_setGridTemplateRowsS`   | handle, offset, count              | -       |
//! | `element_setGridTemplateColumnsS`| handle, offset, count              | -       |
//! | `element_appendChild`            | parent, child                      | -       |

use crate::dom::Dom;
use crate::error::ImportError;
use crate::memory::EngineMemory;
use crate::registry::Registry;
use crate::types::Handle;

/// Host function an engine can import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Import {
    RenderBegin,
    RenderEnd,
    Create,
    Remove,
    SetText,
    SetClickEvent,
    RemoveClickEvent,
    SetHoverEvent,
    RemoveHoverEvent,
    AddClass,
    SetGridArea,
    SetGridTemplateAreas,
    SetGridTemplateRows,
    SetGridTemplateColumns,
    AppendChild,
}

impl Import {
    pub const ALL: [Self; 15] = [
        Self::RenderBegin,
        Self::RenderEnd,
        Self::Create,
        Self::Remove,
        Self::SetText,
        Self::SetClickEvent,
        Self::RemoveClickEvent,
        Self::SetHoverEvent,
        Self::RemoveHoverEvent,
        Self::AddClass,
        Self::SetGridArea,
        Self::SetGridTemplateAreas,
        Self::SetGridTemplateRows,
        Self::SetGridTemplateColumns,
        Self::AppendChild,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::RenderBegin => "element_render_begin",
            Self::RenderEnd => "element_render_end",
            Self::Create => "element_create",
            Self::Remove => "element_remove",
            Self::SetText => "element_setTextS",
            Self::SetClickEvent => "element_setClickEvent",
            Self::RemoveClickEvent => "element_removeClickEvent",
            Self::SetHoverEvent => "element_setHoverEvent",
            Self::RemoveHoverEvent => "element_removeHoverEvent",
            Self::AddClass => "element_addClass",
            Self::SetGridArea => "element_setGridArea",
            Self::SetGridTemplateAreas => "element_setGridTemplateAreasS",
            Self::SetGridTemplateRows => "element_setGridTemplateRowsS",
            Self::SetGridTemplateColumns => "element_setGridTemplateColumnsS",
            Self::AppendChild => "element_appendChild",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|import| import.name() == name)
    }

    /// Number of integer arguments.
    pub const fn arity(self) -> usize {
        match self {
            Self::RenderBegin | Self::RenderEnd => 0,
            Self::Create | Self::Remove => 1,
            Self::SetClickEvent
            | Self::RemoveClickEvent
            | Self::SetHoverEvent
            | Self::RemoveHoverEvent
            | Self::AddClass
            | Self::SetGridArea
            | Self::AppendChild => 2,
            Self::SetText | Self::SetGridTemplateRows | Self::SetGridTemplateColumns => 3,
            Self::SetGridTemplateAreas => 4,
        }
    }

    /// Whether the call returns a handle.
    pub const fn returns_handle(self) -> bool {
        matches!(self, Self::RenderBegin | Self::Create)
    }
}

/// One decoded engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    RenderBegin,
    RenderEnd,
    Create { tag: u32 },
    Remove { handle: Handle },
    SetText { handle: Handle, offset: u32, length: u32 },
    SetClickEvent { handle: Handle, code: u32 },
    RemoveClickEvent { handle: Handle, code: u32 },
    SetHoverEvent { handle: Handle, code: u32 },
    RemoveHoverEvent { handle: Handle, code: u32 },
    AddClass { handle: Handle, class: u32 },
    SetGridArea { handle: Handle, area: u32 },
    SetGridTemplateAreas { handle: Handle, offset: u32, width: u32, height: u32 },
    SetGridTemplateRows { handle: Handle, offset: u32, count: u32 },
    SetGridTemplateColumns { handle: Handle, offset: u32, count: u32 },
    AppendChild { parent: Handle, child: Handle },
}

impl Command {
    /// Decode an import call by name.
    pub fn decode(name: &str, args: &[u32]) -> Result<Self, ImportError> {
        let import =
            Import::from_name(name).ok_or_else(|| ImportError::UnknownImport(name.to_string()))?;
        Self::from_import(import, args)
    }

    /// Build a command from an import and its raw arguments.
    pub fn from_import(import: Import, args: &[u32]) -> Result<Self, ImportError> {
        if args.len() != import.arity() {
            return Err(ImportError::Arity {
                name: import.name(),
                expected: import.arity(),
                got: args.len(),
            });
        }
        let arg = |i: usize| args[i];

        Ok(match import {
            Import::RenderBegin => Self::RenderBegin,
            Import::RenderEnd => Self::RenderEnd,
            Import::Create => Self::Create { tag: arg(0) },
            Import::Remove => Self::Remove { handle: arg(0) },
            Import::SetText => Self::SetText { handle: arg(0), offset: arg(1), length: arg(2) },
            Import::SetClickEvent => Self::SetClickEvent { handle: arg(0), code: arg(1) },
            Import::RemoveClickEvent => Self::RemoveClickEvent { handle: arg(0), code: arg(1) },
            Import::SetHoverEvent => Self::SetHoverEvent { handle: arg(0), code: arg(1) },
            Import::RemoveHoverEvent => Self::RemoveHoverEvent { handle: arg(0), code: arg(1) },
            Import::AddClass => Self::AddClass { handle: arg(0), class: arg(1) },
            Import::SetGridArea => Self::SetGridArea { handle: arg(0), area: arg(1) },
            Import::SetGridTemplateAreas => Self::SetGridTemplateAreas {
                handle: arg(0),
                offset: arg(1),
                width: arg(2),
                height: arg(3),
            },
            Import::SetGridTemplateRows => {
                Self::SetGridTemplateRows { handle: arg(0), offset: arg(1), count: arg(2) }
            }
            Import::SetGridTemplateColumns => {
                Self::SetGridTemplateColumns { handle: arg(0), offset: arg(1), count: arg(2) }
            }
            Import::AppendChild => Self::AppendChild { parent: arg(0), child: arg(1) },
        })
    }

    pub fn import(&self) -> Import {
        match self {
            Self::RenderBegin => Import::RenderBegin,
            Self::RenderEnd => Import::RenderEnd,
            Self::Create { .. } => Import::Create,
            Self::Remove { .. } => Import::Remove,
            Self::SetText { .. } => Import::SetText,
            Self::SetClickEvent { .. } => Import::SetClickEvent,
            Self::RemoveClickEvent { .. } => Import::RemoveClickEvent,
            Self::SetHoverEvent { .. } => Import::SetHoverEvent,
            Self::RemoveHoverEvent { .. } => Import::RemoveHoverEvent,
            Self::AddClass { .. } => Import::AddClass,
            Self::SetGridArea { .. } => Import::SetGridArea,
            Self::SetGridTemplateAreas { .. } => Import::SetGridTemplateAreas,
            Self::SetGridTemplateRows { .. } => Import::SetGridTemplateRows,
            Self::SetGridTemplateColumns { .. } => Import::SetGridTemplateColumns,
            Self::AppendChild { .. } => Import::AppendChild,
        }
    }
}

impl<D: Dom, M: EngineMemory> Registry<D, M> {
    /// Run a decoded command. Returns the handle for calls that produce one.
    pub fn apply(&mut self, command: Command) -> Option<Handle> {
        match command {
            Command::RenderBegin => return Some(self.begin_render()),
            Command::RenderEnd => self.end_render(),
            Command::Create { tag } => return Some(self.create(tag)),
            Command::Remove { handle } => self.remove(handle),
            Command::SetText { handle, offset, length } => self.set_text(handle, offset, length),
            Command::SetClickEvent { handle, code } => self.set_click_handler(handle, code),
            Command::RemoveClickEvent { handle, code } => self.remove_click_handler(handle, code),
            Command::SetHoverEvent { handle, code } => self.set_hover_handler(handle, code),
            Command::RemoveHoverEvent { handle, code } => self.remove_hover_handler(handle, code),
            Command::AddClass { handle, class } => self.add_class(handle, class),
            Command::SetGridArea { handle, area } => self.set_grid_area(handle, area),
            Command::SetGridTemplateAreas { handle, offset, width, height } => {
                self.set_grid_template_areas(handle, offset, width, height)
            }
            Command::SetGridTemplateRows { handle, offset, count } => {
                self.set_grid_template_rows(handle, offset, count)
            }
            Command::SetGridTemplateColumns { handle, offset, count } => {
                self.set_grid_template_columns(handle, offset, count)
            }
            Command::AppendChild { parent, child } => self.append_child(parent, child),
        }
        None
    }

    /// Decode and run an import call in one step.
    pub fn call(&mut self, name: &str, args: &[u32]) -> Result<Option<Handle>, ImportError> {
        let command = Command::decode(name, args)?;
        Ok(self.apply(command))
    }
}
