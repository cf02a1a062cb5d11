//! Platform adapters — storage backends behind the core's [`StatePort`].
//!
//! [`StatePort`]: qanda_core::ports::StatePort

pub mod storage;
