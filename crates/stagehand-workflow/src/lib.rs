//! Stagehand Workflow
//!
//! This crate contains the serializable workflow definition types for
//! stagehand. A workflow is an ordered list of stages, each an ordered list
//! of jobs; every job carries a job-type tag and a type-specific spec.
//!
//! A job spec exists in two states:
//! - `Raw` - the untyped payload as loaded from storage or an authoring
//!   document
//! - typed - the concrete spec a lifecycle phase decodes it into
//!
//! The `codec` module converts between the two. Lifecycle phases decode on
//! entry and write the typed form back before returning, so later phases
//! observe consistent typed state.

pub mod codec;
mod error;
mod job;
mod patch;
mod workflow;

pub use error::DecodeError;
pub use job::{JobDefinition, JobSpec, JobType};
pub use patch::{ClusterBrief, PatchItem, PatchJobSpec, PatchStrategy, StrategyBrief};
pub use workflow::{StageDefinition, WorkflowDefinition};
