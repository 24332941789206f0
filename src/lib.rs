#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::len_without_is_empty)]

#[macro_use]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod utils;
pub use utils::{Kahan, ReductionTree, Window, helper, kahan_sum};

mod moving_average;
pub use moving_average::{MovingAverage, SmaKind, SmaVisitor};

mod full_recompute;
pub use full_recompute::FullRecomputeSma;

mod naive;
pub use naive::NaiveSma;

mod compensated;
pub use compensated::CompensatedSma;

mod tree;
pub use tree::TreeSma;
