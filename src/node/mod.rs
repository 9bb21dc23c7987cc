//! The notation compiler: turns short notation attributes into a [symbol tree](SymbolTree).
//!
//! Each stage is a pure function producing a subtree. A base symbol is built with [decorate], the
//! main subscript with [compose_subscript] (which uses [parse_status] for lives and [angle] for
//! durations), and finally [assemble] arranges everything around the base.
//!
//! Trees can then be written out by an [emitter](crate::emitters).

mod symbol;
pub use symbol::*;

mod decoration;
pub use decoration::*;

mod angle_marker;
pub use angle_marker::*;

mod status;
pub use status::*;

mod subscript;
pub use subscript::*;

mod corners;
pub use corners::*;
