//! Domain types

pub mod features;
pub mod input;
pub mod value;

pub use features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES, SCHEMA_VERSION};
pub use input::{ParsedInput, RawInput};
pub use value::InputValue;
