use std::io::ErrorKind;
use std::path::PathBuf;

use clap::Args;
use dialoguer::{Error as DialoguerError, Input, Select};

use crate::domain::{
    AppError, ChatMessage, ClassLevel, ClassPlanForm, Modality, Purpose, ReferenceMaterial,
};

#[derive(Args)]
pub(crate) struct PlanArgs {
    /// Main topic of the class
    #[arg(long)]
    topic: Option<String>,
    /// Number of students
    #[arg(long)]
    students: Option<String>,
    /// Time available for the class, in minutes
    #[arg(long)]
    duration: Option<String>,
    /// Class level: Elementary, Middle School, High School
    #[arg(long)]
    level: Option<String>,
    /// Modality: Online, In-Person
    #[arg(long)]
    modality: Option<String>,
    /// Class purpose: Intro, Review, Evaluation
    #[arg(long)]
    purpose: Option<String>,
    /// Reference material (.txt or .pdf); may be repeated
    #[arg(long = "reference", value_name = "FILE")]
    references: Vec<PathBuf>,
    /// Settings file (defaults to ./classplan.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print the prompt that would be sent without calling the endpoint
    #[arg(long)]
    prompt_preview: bool,
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), AppError> {
    // Configuration problems are fatal before any input is collected.
    let settings = crate::app::api::load_settings(args.config.as_deref())?.completion;
    let endpoint =
        if args.prompt_preview { None } else { Some(crate::app::api::load_endpoint()?) };

    let Some(mut form) = resolve_form(&args)? else {
        return Ok(());
    };

    let Some(endpoint) = endpoint else {
        let messages = crate::app::api::preview_plan_prompt(&mut form)?;
        print_preview(&messages, &settings.model, settings.temperature);
        return Ok(());
    };

    if crate::domain::form::validate(&form.topic, &form.student_count, &form.duration_minutes) {
        eprintln!("Generating class plan...");
    }
    let response = crate::app::api::generate_plan(&mut form, &settings, &endpoint)?;

    println!("Generated Class Plan:");
    println!();
    println!("{}", response.text);
    Ok(())
}

/// Fill a form from flags, prompting for whatever is missing.
///
/// Returns `None` when the user cancels a prompt.
fn resolve_form(args: &PlanArgs) -> Result<Option<ClassPlanForm>, AppError> {
    let level = args.level.as_deref().map(ClassLevel::from_label).transpose()?;
    let modality = args.modality.as_deref().map(Modality::from_label).transpose()?;
    let purpose = args.purpose.as_deref().map(Purpose::from_label).transpose()?;
    let reference_materials = args
        .references
        .iter()
        .map(|path| ReferenceMaterial::from_path(path))
        .collect::<Result<Vec<_>, _>>()?;

    let interactive = args.topic.is_none() || args.students.is_none() || args.duration.is_none();
    if interactive {
        println!("Welcome teacher! Answer a few questions and I'll help you create a class plan.");
    }

    let Some(topic) = answer_or_prompt(&args.topic, "What is the main topic of the class?")? else {
        return Ok(None);
    };
    let Some(student_count) = answer_or_prompt(&args.students, "What is the number of students?")?
    else {
        return Ok(None);
    };
    let Some(duration_minutes) = answer_or_prompt(
        &args.duration,
        "What is the time available for the class? (in minutes)",
    )?
    else {
        return Ok(None);
    };

    let Some(level) =
        select_or_default(level, interactive, "Class Level", &ClassLevel::ALL, |o| o.label())?
    else {
        return Ok(None);
    };
    let Some(modality) =
        select_or_default(modality, interactive, "Modality", &Modality::ALL, |o| o.label())?
    else {
        return Ok(None);
    };
    let Some(purpose) =
        select_or_default(purpose, interactive, "Class Purpose", &Purpose::ALL, |o| o.label())?
    else {
        return Ok(None);
    };

    let mut form = ClassPlanForm::new();
    form.topic = topic;
    form.student_count = student_count;
    form.duration_minutes = duration_minutes;
    form.level = level;
    form.modality = modality;
    form.purpose = purpose;
    form.reference_materials = reference_materials;
    Ok(Some(form))
}

fn answer_or_prompt(value: &Option<String>, prompt: &str) -> Result<Option<String>, AppError> {
    if let Some(value) = value {
        return Ok(Some(value.clone()));
    }

    match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Input(format!("{}: {}", prompt, err))),
    }
}

/// Use the flag value, else prompt in interactive sessions, else the default.
fn select_or_default<T: Copy + Default>(
    value: Option<T>,
    interactive: bool,
    prompt: &str,
    options: &[T],
    label: fn(&T) -> &'static str,
) -> Result<Option<T>, AppError> {
    if let Some(value) = value {
        return Ok(Some(value));
    }
    if !interactive {
        return Ok(Some(T::default()));
    }

    let items: Vec<&str> = options.iter().map(label).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Input(format!("{}: {}", prompt, err)))?;

    Ok(selection.map(|index| options[index]))
}

fn print_preview(messages: &[ChatMessage], model: &str, temperature: f32) {
    println!("=== Prompt Preview ===");
    println!("Model: {}", model);
    println!("Temperature: {}", temperature);
    for message in messages {
        println!();
        println!("--- {} ---", message.role.as_str());
        println!("{}", message.content);
    }
}
