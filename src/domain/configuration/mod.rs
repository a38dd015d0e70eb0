pub mod class_plan_config;
pub mod endpoint_config;

pub use class_plan_config::{
    ClassPlanConfig, CompletionSettings, DEFAULT_MODEL, DEFAULT_TEMPERATURE, parse_config_content,
};
pub use endpoint_config::{API_KEY_ENV, BASE_URL_ENV, EndpointConfig};
