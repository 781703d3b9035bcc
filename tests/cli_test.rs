//! CLI command tests against the stub service: exit status per outcome.

mod common;

use clap::Parser;

use wordsyn::cli::args::WordsynArgs;
use wordsyn::cli::commands::execute_command;
use wordsyn::config::ClientConfig;
use wordsyn::prelude::*;

fn parse(config: &ClientConfig, command: &[&str]) -> WordsynArgs {
    let mut argv = vec!["wordsyn", "-q", "--base-uri", config.base_uri().as_str()];
    argv.extend_from_slice(command);
    WordsynArgs::try_parse_from(argv).unwrap()
}

#[tokio::test]
async fn test_successful_commands_report_true() -> Result<()> {
    let config = common::spawn_service().await;

    assert!(execute_command(parse(&config, &["synonyms", "cat"])).await?);
    assert!(execute_command(parse(&config, &["words", "Ice Cream"])).await?);
    assert!(execute_command(parse(&config, &["add-word", "cat", "-s", "feline"])).await?);
    assert!(execute_command(parse(&config, &["add-synonym", "cat", "kitty"])).await?);
    Ok(())
}

#[tokio::test]
async fn test_service_errors_report_false() -> Result<()> {
    let config = common::spawn_service().await;

    // 404 with an error body
    assert!(!execute_command(parse(&config, &["synonyms", "unknown"])).await?);
    // 409 conflict
    assert!(!execute_command(parse(&config, &["add-word", "dog"])).await?);
    // 200 with a body that is not JSON
    assert!(!execute_command(parse(&config, &["synonyms", "garbled"])).await?);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_service_reports_false() -> Result<()> {
    let config = common::dead_service().await;
    assert!(!execute_command(parse(&config, &["synonyms", "cat"])).await?);
    Ok(())
}

#[tokio::test]
async fn test_invalid_input_reports_false() -> Result<()> {
    let config = common::spawn_service().await;

    assert!(!execute_command(parse(&config, &["add-word", "42"])).await?);
    assert!(!execute_command(parse(&config, &["words", "   "])).await?);
    Ok(())
}

#[tokio::test]
async fn test_disabled_action_is_an_error() {
    let config = common::spawn_service().await;

    let result = execute_command(parse(&config, &["add-word", ""])).await;
    assert!(matches!(result, Err(WordsynError::InvalidOperation(_))));

    let result = execute_command(parse(&config, &["add-synonym", "cat", ""])).await;
    assert!(matches!(result, Err(WordsynError::InvalidOperation(_))));
}
