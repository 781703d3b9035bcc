//! Command implementations for the wordsyn CLI.
//!
//! Every network command runs through a [`Form`], so the CLI enforces the
//! same enablement, validation and notification rules as any other front end.

use log::debug;

use crate::api::ApiClient;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ClientConfig;
use crate::error::{Result, WordsynError};
use crate::form::{Action, Form};
use crate::schema;
use crate::types::FormData;

/// Execute a CLI command.
///
/// Returns `Ok(false)` when the action was refused or failed after being
/// reported to the user; `Err` is reserved for failures nothing has reported
/// yet (bad configuration, broken output).
pub async fn execute_command(args: WordsynArgs) -> Result<bool> {
    match &args.command {
        Command::AddWord(add_args) => {
            let synonym = add_args.synonym.as_deref().unwrap_or("");
            run_action(Action::AddWord, &add_args.word, synonym, &args).await
        }
        Command::AddSynonym(add_args) => {
            run_action(Action::AddSynonym, &add_args.word, &add_args.synonym, &args).await
        }
        Command::Synonyms(synonyms_args) => {
            run_action(Action::GetSynonyms, &synonyms_args.word, "", &args).await
        }
        Command::Words(words_args) => {
            run_action(Action::GetWordsForSynonym, "", &words_args.synonym, &args).await
        }
        Command::Validate(validate_args) => validate_input(validate_args, &args),
    }
}

/// Resolve the service address from `--base-uri` or the environment.
fn client_config(args: &WordsynArgs) -> Result<ClientConfig> {
    match &args.base_uri {
        Some(base_uri) => ClientConfig::new(base_uri),
        None => ClientConfig::from_env(),
    }
}

/// Fill a form, submit one action and report the result.
async fn run_action(action: Action, word: &str, synonym: &str, args: &WordsynArgs) -> Result<bool> {
    let config = client_config(args)?;
    debug!("Using service at {}", config.base_uri());

    let mut form = Form::new(ApiClient::new(config));
    form.fill(word, synonym)?;

    let result = form.submit(action).await;
    for notification in form.drain_notifications() {
        output_notification(&notification, args)?;
    }

    match result {
        Ok(outcome) => {
            output_outcome(&outcome, args)?;
            Ok(true)
        }
        Err(WordsynError::Validation(errors)) => {
            output_validation_errors(&errors, args)?;
            Ok(false)
        }
        // Already surfaced as an error notification.
        Err(WordsynError::Api { .. }) | Err(WordsynError::Http(_)) | Err(WordsynError::Json(_)) => {
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Validate input without contacting the service.
fn validate_input(args: &ValidateArgs, cli_args: &WordsynArgs) -> Result<bool> {
    match schema::validate(&FormData::new(&*args.word, &*args.synonym)) {
        Ok(form) => {
            output_validated(&form, cli_args)?;
            Ok(true)
        }
        Err(errors) => {
            output_validation_errors(&errors, cli_args)?;
            Ok(false)
        }
    }
}
