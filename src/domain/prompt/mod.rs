//! Prompt construction for class plan requests.

mod message;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::AppError;
use crate::domain::class_plan::{ClassPlanRequest, render_references};

pub use message::{ChatMessage, Role};

/// Persona sent as the system message on every request.
pub const SYSTEM_PROMPT: &str = "You are a pedagogy expert tasked with helping teachers create effective class plans. \n\
You will be provided with questions and reference materials (when applicable) to craft a class plan.
Your advice should be practical, evidence-based, and adaptable to various teaching contexts";

const USER_PROMPT_NAME: &str = "user_prompt";

const USER_PROMPT_TEMPLATE: &str = "Please generate a class plan based using the following information as reference: \
Class topic: {{ topic }}, \
Number of students: {{ student_count }}, \
Time available: {{ duration }}, \
Class level: {{ level }}, \
Modality: {{ modality }}, \
Purpose: {{ purpose }}, \
Reference materials: {{ reference_materials }}";

/// Render the user message for a request.
///
/// Output depends only on the request fields.
pub fn render_user_prompt(request: &ClassPlanRequest) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template(USER_PROMPT_NAME, USER_PROMPT_TEMPLATE)
        .map_err(|e| AppError::PromptRender(e.to_string()))?;

    let template =
        env.get_template(USER_PROMPT_NAME).map_err(|e| AppError::PromptRender(e.to_string()))?;

    template
        .render(context! {
            topic => request.topic,
            student_count => request.student_count,
            duration => request.duration_minutes,
            level => request.level.label(),
            modality => request.modality.label(),
            purpose => request.purpose.label(),
            reference_materials => render_references(&request.reference_materials),
        })
        .map_err(|e| AppError::PromptRender(e.to_string()))
}

/// Build the system + user message pair for a request.
pub fn build_messages(request: &ClassPlanRequest) -> Result<Vec<ChatMessage>, AppError> {
    Ok(vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(render_user_prompt(request)?)])
}
