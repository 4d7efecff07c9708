//! # Barras - EAN/UPC Barcode Encoder
//!
//! Barras encodes decimal digit strings into the bar/space module
//! sequences of the linear retail symbologies. It provides:
//!
//! - **Detection**: the symbology is inferred from digit count and
//!   checksum, never stated by the caller
//! - **Encoding**: EAN-13, UPC-A, EAN-8 and UPC-E module assembly,
//!   including UPC-E zero-suppression expansion
//! - **Packing**: a word-oriented transport form for renderers
//! - **Rendering**: a reference PNG rasterizer over the packed form
//!
//! ## Quick Start
//!
//! ```
//! use barras::{RenderOptions, Symbology};
//!
//! // Parse, detect and assemble in one call.
//! let symbol = barras::encode("4006381333931")?;
//! assert_eq!(symbol.symbology, Symbology::Ean13);
//! assert_eq!(symbol.modules.len(), 95);
//!
//! // Pack for transport, then rasterize.
//! let packed = symbol.pack();
//! let png = barras::render::render_png(&packed, &RenderOptions::default())?;
//! # Ok::<(), barras::BarrasError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`digits`] | Strict decimal digit parsing |
//! | [`symbology`] | Detection, checksums and symbol assembly |
//! | [`modules`] | Module sequences and word packing |
//! | [`render`] | Reference raster renderer |
//! | [`error`] | Error types |
//!
//! ## Scope
//!
//! The encoder produces bare symbols: no quiet zones, no human-readable
//! digit line, no add-on symbols. Margins are a renderer concern (see
//! [`RenderOptions::quiet_zone`]).

pub mod digits;
pub mod error;
pub mod modules;
pub mod render;
pub mod symbology;

// Re-exports for convenience
pub use error::{BarrasError, DetectError, EncodeError};
pub use modules::{Modules, PackedSymbol, SYMBOL_HEIGHT, WORD_BITS};
pub use render::{RenderError, RenderOptions};
pub use symbology::{Symbol, Symbology, encode};
