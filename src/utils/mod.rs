pub mod helper;

mod cursor;
pub(crate) use cursor::Cursor;

mod window;
pub use window::Window;

mod kahan;
pub use kahan::{Kahan, kahan_sum};

mod reduction_tree;
pub use reduction_tree::ReductionTree;
