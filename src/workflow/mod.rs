//! Command workflows for the `bc20` binary.
//!
//! Each `run_*` function backs one CLI command; the interactive loop lives in
//! [`session`] so it can be driven from tests without a terminal.
mod context;
mod draft;
mod fields;
mod generate;
mod init;
pub(crate) mod session;
mod wizard;

pub(crate) use context::WorkflowContext;
pub use draft::run_draft;
pub use fields::run_fields;
pub use generate::run_generate;
pub use init::run_init;
pub use wizard::run_wizard;
