//! Host-side tooling for the LS-8 virtual machine: the text program loader
//! used by the `ls8` runner binary.

use env_logger as _;
#[cfg(test)]
use tempfile as _;

/// Text program loading.
pub mod loader;
