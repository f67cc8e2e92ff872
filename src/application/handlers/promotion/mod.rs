//! Promotion command and query handlers.

mod approve_promotion;
mod get_promotion_request;
mod initiate_promotion;

pub use approve_promotion::{
    ApprovePromotionCommand, ApprovePromotionHandler, ApprovePromotionResult,
};
pub use get_promotion_request::{GetPromotionRequestHandler, GetPromotionRequestQuery};
pub use initiate_promotion::{
    InitiatePromotionCommand, InitiatePromotionHandler, InitiatePromotionResult,
};
