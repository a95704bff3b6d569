//! Request handlers, one module per resource.

mod boards;
mod cards;
mod lists;
mod system;

#[cfg(test)]
mod lists_test;
#[cfg(test)]
mod test_support;

pub use boards::*;
pub use cards::*;
pub use lists::*;
pub use system::*;
