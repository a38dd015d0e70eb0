pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
mod plan_requester;

pub use plan_requester::PlanRequester;
