//! # Capstrip
//!
//! A caption bar compositor: give it an image and a caption, get back a
//! new image with a rendered, auto-sized, auto-wrapped caption bar
//! appended below the original content, written to disk as a PNG.
//!
//! # Architecture: Five-Stage Pipeline
//!
//! An overlay runs through five stages; every stage except the last is a
//! pure function of its inputs, so identical image + caption + style
//! always produce a pixel-identical canvas:
//!
//! ```text
//! 1. Size      caption length  →  font size       (step function, bounded)
//! 2. Wrap      caption + width →  lines           (greedy fit, measured)
//! 3. Layout    lines + size    →  bar / canvas dimensions
//! 4. Compose   image + plan    →  canvas          (paste + centered glyphs)
//! 5. Persist   canvas          →  PNG + metadata  (the only side effect)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`caption`] | The engine: sizing, measurement, wrapping, layout, compositing, persistence |
//! | [`config`] | `capstrip.toml` style loading and validation |
//! | [`types`] | [`CaptionResult`](types::CaptionResult), the serialized record returned per overlay |
//! | [`naming`] | Timestamped output filename generation |
//! | [`output`] | CLI output formatting — pure `format_*` functions plus `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Greedy Wrapping, On Purpose
//!
//! Line breaking is a plain greedy fit: words join the current line until
//! the next one would exceed the available width. No minimum-line or
//! balanced-line optimization. Bar height is derived directly from the
//! line count this policy produces, so measurement, wrapping, and drawing
//! stay in lockstep — a cleverer breaker would have to keep all three in
//! sync to gain anything.
//!
//! ## Bundled Font
//!
//! A DejaVu Sans face is embedded in the binary (`assets/DejaVuSans.ttf`),
//! so captioning works on machines with no fonts installed. A different
//! TTF/OTF can be supplied via config; whichever face is active is used
//! for both measurement and drawing, keeping wrap decisions consistent
//! with rendered output.
//!
//! ## Pure-Rust Imaging
//!
//! Decoding, compositing, glyph rasterization, and PNG encoding all come
//! from the `image` / `imageproc` / `ab_glyph` stack — no ImageMagick, no
//! system libraries. The binary is fully self-contained.
//!
//! ## Collision-Safe Filenames
//!
//! Output files are named `captioned_<YYYYMMDD_HHMMSS>_<seq>.png`. The
//! wall-clock timestamp is what callers see in the returned metadata; the
//! process-wide sequence number keeps two overlays landing in the same
//! second from overwriting each other.
//!
//! ## The Bar Is Appended, Never Blended
//!
//! The caption bar extends the canvas below the source image instead of
//! covering part of it. Nothing sits underneath the bar, so it has no
//! opacity setting — a translucent bar over fresh canvas is
//! indistinguishable from a darker opaque one.

pub mod caption;
pub mod config;
pub mod naming;
pub mod output;
pub mod types;
