//! Multi-step wizard: engine, validators, and the declaration step set.
mod engine;
mod render;
mod steps;
mod validators;

pub use engine::{CompletionHandler, NextOutcome, WizardEngine};
pub use render::{StepInput, StepRenderer};
pub use steps::declaration_steps;
