#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod errors;
pub use errors::{Cancellable, Cancelled};

mod cancel;
pub use cancel::{CancellationToken, WaitForCancellation};

mod suspend;
pub use suspend::until_cancelled;

mod stage;
pub use stage::{StageError, StageOutput, StageValue};

mod pending_outcome;
pub use pending_outcome::PendingOutcomeExt;

mod pending_value;
pub use pending_value::PendingValueExt;

#[cfg(test)]
mod test_utils;
