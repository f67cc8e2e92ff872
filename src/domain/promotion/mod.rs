//! Promotion domain module.
//!
//! - `request` - PromotionRequest entity and its read model
//! - `workflow` - PromotionWorkflow (initiate / approve / query)

mod request;
mod workflow;

pub use request::{PromotionRequest, PromotionRequestView};
pub use workflow::PromotionWorkflow;
