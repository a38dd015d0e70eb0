mod prompt_preview_contract;
mod rejects_empty_answers_contract;
mod rejects_invalid_options_contract;
mod rejects_missing_configuration_contract;
