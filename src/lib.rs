//! Deterministic text-format conversion engine.
//!
//! Take raw text claimed to be in format A and produce text in format B
//! without any network or model call: recursive structural type inference
//! with name deduplication, a JSON-Schema-to-type compiler, a Zod validator
//! generator, a heuristic indentation transpiler between Python-like and
//! JavaScript-like block syntax, a lenient JSON repair parser, and a
//! priority-ordered format detection classifier.
//!
//! Entry points:
//! - [`engine::transform`] — slug-dispatched conversion;
//! - [`detect::detect_format`] — best-guess format suggestion, independent of
//!   the conversion path.

pub mod cli;
pub mod detect;
pub mod engine;
pub mod error;
pub mod infer;
pub mod lenient;
pub mod markup;
pub mod registry;
pub mod textcodec;
pub mod transpile;

pub use detect::{Confidence, DetectedFormat, detect_format};
pub use engine::{TransformResult, transform};
pub use error::{Result, TransformError};
pub use registry::{ConverterDescriptor, ConverterSettings, SettingValue};
