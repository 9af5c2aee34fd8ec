//! Internal arithmetic helpers.

pub(crate) mod modular;
