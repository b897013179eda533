//! # spark-dom
//!
//! Handle-based element registry for engines that drive a host UI tree.
//!
//! The engine (typically a WebAssembly module) never holds references into
//! the presentation layer. It names elements by integer handles, passes text
//! and numeric arrays as offsets into its own memory, and receives user
//! interaction back as integer event codes.
//!
//! ## Architecture
//!
//! ```text
//! Engine                                        Host
//! ──────                                        ────
//!   element_create(3)  ───────────────►  Registry ──► HandleTable (slot + LIFO free list)
//!   element_setTextS(h, ptr, len) ────►     │    ──► Codec (narrow text, LE u32 views)
//!   element_setClickEvent(h, 42) ─────►     │    ──► EventBridge
//!                                           ▼
//!                                          Dom (host tree, e.g. HeadlessDom)
//!   callback(42)  ◄──────────────────────── listener fires on click
//! ```
//!
//! Components are NOT objects on the engine side. They are indices into the
//! registry's slot table, reused LIFO once removed:
//!
//! ```text
//! Handle 0: mount container (reassigned by every begin_render)
//! Handle 1: <div class="component grid">
//! Handle 2: <p class="component">Hi</p>
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Handles, tags, class tokens, event kinds
//! - [`codec`] - Engine memory payload decoding and area-id encoding
//! - [`handles`] - Slot table with free list
//! - [`events`] - Click/hover listener bookkeeping
//! - [`registry`] - The facade the engine drives
//! - [`imports`] - Import names and command dispatch
//! - [`dom`] / [`headless`] - Host tree seam and its in-memory implementation
//! - [`memory`] - Engine memory access

pub mod codec;
pub mod config;
pub mod dom;
pub mod error;
pub mod events;
pub mod handles;
pub mod headless;
pub mod imports;
pub mod memory;
pub mod registry;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use codec::{
    U32View, decode_narrow, decode_u32_array, encode_area_id, fr_tracks, grid_template_areas,
};
pub use config::{RegistryConfig, RegistryFlags};
pub use dom::{Dom, Listener};
pub use error::{CodecError, ImportError};
pub use events::{EventBridge, EventCallback};
pub use handles::HandleTable;
pub use headless::{HeadlessDom, NodeId};
pub use imports::{Command, Import};
pub use memory::{EngineMemory, SharedMemory};
pub use registry::Registry;
