//! Composing thematic map specifications.
//!
//! This crate implements the composition layer of a thematic mapping
//! system: constructors for the individual map elements (grid, compass,
//! scale bar, credits and friends), the stacking operator combining them
//! into an ordered specification, and the session history behind a
//! "give me the last map" feature. Rendering the composed specification
//! is the job of a separate engine consuming [`MapSpec`].

pub use self::element::{Element, ElementKind};
pub use self::history::{Expr, Session};
pub use self::options::Options;
pub use self::spec::MapSpec;
pub use self::value::{LabelFormat, Value};

pub mod element;
pub mod elements;
pub mod history;
pub mod options;
pub mod spec;
pub mod value;
