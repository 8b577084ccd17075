//! # platequote-dxf
//!
//! DXF drawing reader for the platequote analysis engine.
//!
//! This crate is the parsing collaborator: it turns a DXF file into the
//! [`EntitySet`](platequote_core::EntitySet) the engine consumes and does
//! nothing else: no geometry, no unit conversion, no validation beyond
//! what parsing itself requires. Read and parse failures surface as
//! [`DxfError`], a distinct outcome from a drawing that parses fine but
//! contains no closed shapes.
//!
//! ```no_run
//! use platequote_core::Analyzer;
//! use platequote_dxf::read_drawing;
//!
//! let entities = read_drawing("part.dxf").unwrap();
//! let result = Analyzer::default().analyze(&entities).unwrap();
//! println!("net area: {:.6} m²", result.net_area);
//! ```

pub mod error;
pub mod reader;

pub use error::{DxfError, Result};
pub use reader::{entities_from_drawing, read_drawing};
