//! Styled building blocks shared by the clinic console pages.

pub mod components;

pub use components::*;

#[cfg(test)]
mod test_support;
