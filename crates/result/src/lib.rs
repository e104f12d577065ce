#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod errors;
pub use errors::{AccessError, AccessErrorKind, AccessResult};

mod outcome;
pub use outcome::Outcome;

mod combinators;

mod ext;
pub use ext::{Ensure, IntoOutcome};
