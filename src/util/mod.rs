//! Page enhancement logic, independent of the DOM.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module computes what one enhancement should do from plain inputs.
//! The browser wiring in `enhancer` reads the DOM, calls into these, and
//! writes the result back, so the decisions are testable natively.

pub mod fade;
pub mod fallback;
pub mod relative_time;
pub mod search;
pub mod theme;
pub mod ticker;
pub mod trending;
