//! Testing utilities for the Kryon runtime

pub mod testing;

pub use testing::*;

pub mod prelude {
    pub use crate::props;
    pub use crate::testing::*;
}
