//! Vectree exposes parsed SVG documents as safe, typed, read-only trees and
//! turns them into pixels or normalized markup.
//!
//! The crate wraps the `usvg`/`resvg` engine behind three surfaces:
//!
//! - [`Tree`]: parse bytes or a file into an owning document tree, then walk
//!   it through borrowed views ([`Node`], [`Group`], [`Path`], ...) that can
//!   never outlive the tree they came from.
//! - [`rasterize`]: parse, validate, render at a scale factor, and convert
//!   the engine's premultiplied output to straight-alpha RGBA8.
//! - [`normalize`]: parse and re-export the spec-resolved form of the
//!   document (defaults applied, `use` expanded, styles inlined).
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: rasterization is pure arithmetic over the engine's
//!   output; equal inputs produce equal pixels.
//! - **Terminal errors**: every engine failure maps to exactly one
//!   [`VectreeError`] case at the call site; nothing is retried or swallowed,
//!   and no partial results are returned.
#![forbid(unsafe_code)]

mod foundation;
mod gradient;
mod image;
mod node;
mod normalize;
mod path;
mod raster;
mod text;
mod tree;

pub use crate::foundation::error::{VectreeError, VectreeResult};
pub use crate::foundation::geom::{Color, Point, Rect, Size, Transform};
pub use crate::gradient::{GradientStop, LinearGradient, RadialGradient, SpreadMethod};
pub use crate::image::{ImageKind, ImageNode};
pub use crate::node::{BlendMode, ClipPath, Group, Mask, MaskKind, Node, NodeKind};
pub use crate::normalize::{normalize, normalize_file, normalize_to_string};
pub use crate::path::{
    Fill, FillRule, LineCap, LineJoin, Paint, PaintKind, Path, PathSegment, Stroke,
};
pub use crate::raster::{RasterImage, rasterize, rasterize_file, rasterize_tree};
pub use crate::text::TextNode;
pub use crate::tree::Tree;
