#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use trajkit_storage as storage;

#[doc(inline)]
pub use trajkit_trajectory as trajectory;
