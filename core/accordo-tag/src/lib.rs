#![cfg_attr(not(any(feature = "std", test)), no_std)] // Usable from embedded/WASM hosts

extern crate alloc;

pub mod codec;
pub mod feature;
pub mod pos;
pub mod reading;
pub mod relation;

// Re-export core types for convenience
pub use codec::{generate, parse, ParsedTag, TagLayout};
pub use feature::*;
pub use pos::PartOfSpeech;
pub use reading::Reading;
pub use relation::{sanitize_label, DependencyRelation};
