//! Rich-text primitives for chat output.
//!
//! The host framework's messaging facility accepts either a legacy
//! `§`-formatted string or a JSON text-component tree; everything this
//! library hands to it is built from the types here. A [`Span`] is a run of
//! text with optional styling and interaction hints, a [`Line`] is an
//! ordered sequence of spans sent as one chat message.
//!
//! Lines render late: they stay structured until one of the output formats
//! is requested ([`Line::to_legacy`], [`Line::to_plain`], or the `Serialize`
//! impl for the component tree).

mod color;
pub use color::Color;

mod text;
pub use text::*;
