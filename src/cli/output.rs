//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::args::{OutputFormat, WordsynArgs};
use crate::display::{SynonymWithWords, WordWithSynonyms};
use crate::error::Result;
use crate::form::{Notification, Outcome};
use crate::schema::{ValidatedForm, ValidationErrors};

/// Result structure for offline validation.
#[derive(Debug, Serialize)]
pub struct ValidationReport<'a> {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<&'a ValidatedForm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<&'a ValidationErrors>,
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, args: &WordsynArgs) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Report a notification. Errors go to stderr, successes to stdout.
///
/// JSON mode keeps stdout for results, so success notifications are dropped
/// there and errors are written as JSON lines on stderr.
pub fn output_notification(notification: &Notification, args: &WordsynArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human if notification.is_error() => {
            writeln!(io::stderr(), "{notification}")?;
        }
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                writeln!(io::stdout(), "{notification}")?;
            }
        }
        OutputFormat::Json if notification.is_error() => {
            write_json(&mut io::stderr(), notification, args)?;
        }
        OutputFormat::Json => {}
    }
    Ok(())
}

/// Print the result of a successful action.
pub fn output_outcome(outcome: &Outcome, args: &WordsynArgs) -> Result<()> {
    let mut stdout = io::stdout();
    match args.output_format {
        OutputFormat::Json => write_json(&mut stdout, outcome, args)?,
        OutputFormat::Human => match outcome {
            Outcome::Synonyms(result) => writeln!(stdout, "{}", WordWithSynonyms::from(result))?,
            Outcome::Words(result) => writeln!(stdout, "{}", SynonymWithWords::from(result))?,
            // Mutations are reported through their notification.
            Outcome::WordAdded(_) | Outcome::SynonymAdded(_) => {}
        },
    }
    Ok(())
}

/// Print per-field validation errors.
pub fn output_validation_errors(errors: &ValidationErrors, args: &WordsynArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => write_json(
            &mut io::stdout(),
            &ValidationReport {
                valid: false,
                form: None,
                errors: Some(errors),
            },
            args,
        ),
        OutputFormat::Human => {
            let mut stderr = io::stderr();
            for error in errors.iter() {
                writeln!(stderr, "{}: {}", error.field, error.message)?;
            }
            Ok(())
        }
    }
}

/// Print a form that passed validation.
pub fn output_validated(form: &ValidatedForm, args: &WordsynArgs) -> Result<()> {
    let mut stdout = io::stdout();
    match args.output_format {
        OutputFormat::Json => write_json(
            &mut stdout,
            &ValidationReport {
                valid: true,
                form: Some(form),
                errors: None,
            },
            args,
        ),
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                writeln!(stdout, "Valid ({:?})", form.shape())?;
            }
            if let Some(word) = form.word() {
                writeln!(stdout, "word: {word}")?;
            }
            if let Some(synonym) = form.synonym() {
                writeln!(stdout, "synonym: {synonym}")?;
            }
            Ok(())
        }
    }
}
