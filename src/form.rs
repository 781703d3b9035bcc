//! Form orchestration.
//!
//! [`FormState`] holds the two inputs, field errors, the single loading flag,
//! the latest query results and pending notifications. It is driven in two
//! steps: [`FormState::begin`] validates and marks the form as loading,
//! [`FormState::finish`] records the outcome of the request. [`Form`] pairs a
//! state with a [`WordApi`] and runs both steps around the HTTP call.
//!
//! Only one request can be outstanding at a time. A failure leaves the inputs
//! untouched and queues an error notification; nothing is retried.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::api::WordApi;
use crate::error::{Result, WordsynError};
use crate::schema::{self, ValidationErrors};
use crate::types::{
    AddSynonymResponse, AddWordResponse, FormData, GetSynonymsResponse,
    GetWordsForSynonymResponse,
};

/// The four things a user can do with the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    AddWord,
    AddSynonym,
    GetSynonyms,
    GetWordsForSynonym,
}

impl Action {
    /// Every action, in button order.
    pub const ALL: [Action; 4] = [
        Action::AddWord,
        Action::AddSynonym,
        Action::GetSynonyms,
        Action::GetWordsForSynonym,
    ];

    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            Action::AddWord => "Add Word",
            Action::AddSynonym => "Add Synonym to Word",
            Action::GetSynonyms => "Get Synonyms",
            Action::GetWordsForSynonym => "Get Words for Synonym",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a notification reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    fn new(kind: NotificationKind, title: String, description: Option<String>) -> Self {
        Notification {
            kind,
            title,
            description,
            created_at: Utc::now(),
        }
    }

    /// Create a success notification.
    pub fn success<T: Into<String>>(title: T, description: Option<String>) -> Self {
        Self::new(NotificationKind::Success, title.into(), description)
    }

    /// Create an error notification.
    pub fn error<T: Into<String>>(title: T, description: Option<String>) -> Self {
        Self::new(NotificationKind::Error, title.into(), description)
    }

    /// Whether this notification reports a failure.
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{}: {}", self.title, description),
            None => f.write_str(&self.title),
        }
    }
}

/// A validated request, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub action: Action,
    /// Normalized inputs.
    pub data: FormData,
}

/// What a successful request returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "result", rename_all = "snake_case")]
pub enum Outcome {
    WordAdded(AddWordResponse),
    SynonymAdded(AddSynonymResponse),
    Synonyms(GetSynonymsResponse),
    Words(GetWordsForSynonymResponse),
}

impl Outcome {
    /// Get the action this outcome answers.
    pub fn action(&self) -> Action {
        match self {
            Outcome::WordAdded(_) => Action::AddWord,
            Outcome::SynonymAdded(_) => Action::AddSynonym,
            Outcome::Synonyms(_) => Action::GetSynonyms,
            Outcome::Words(_) => Action::GetWordsForSynonym,
        }
    }
}

/// Inputs, loading flag, results and notifications of one form.
#[derive(Debug, Default)]
pub struct FormState {
    word: String,
    synonym: String,
    field_errors: ValidationErrors,
    pending: Option<Request>,
    synonyms_result: Option<GetSynonymsResponse>,
    words_result: Option<GetWordsForSynonymResponse>,
    notifications: VecDeque<Notification>,
}

impl FormState {
    /// Create an empty, idle form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the word input as typed.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Get the synonym input as typed.
    pub fn synonym(&self) -> &str {
        &self.synonym
    }

    /// Set the word input. Fails with `Busy` while loading.
    pub fn set_word<S: Into<String>>(&mut self, word: S) -> Result<()> {
        self.ensure_idle()?;
        self.word = word.into();
        Ok(())
    }

    /// Set the synonym input. Fails with `Busy` while loading.
    pub fn set_synonym<S: Into<String>>(&mut self, synonym: S) -> Result<()> {
        self.ensure_idle()?;
        self.synonym = synonym.into();
        Ok(())
    }

    /// Whether a request is in flight.
    pub fn loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Get the errors from the last rejected submission.
    pub fn field_errors(&self) -> &ValidationErrors {
        &self.field_errors
    }

    /// Get the latest synonyms-for-word result.
    pub fn synonyms_result(&self) -> Option<&GetSynonymsResponse> {
        self.synonyms_result.as_ref()
    }

    /// Get the latest words-for-synonym result.
    pub fn words_result(&self) -> Option<&GetWordsForSynonymResponse> {
        self.words_result.as_ref()
    }

    /// Whether the button for `action` can be pressed.
    pub fn is_enabled(&self, action: Action) -> bool {
        if self.loading() {
            return false;
        }
        match action {
            Action::AddWord | Action::GetSynonyms => !self.word.is_empty(),
            Action::AddSynonym => !self.word.is_empty() && !self.synonym.is_empty(),
            Action::GetWordsForSynonym => !self.synonym.is_empty(),
        }
    }

    /// Clear both inputs and their errors.
    pub fn reset(&mut self) {
        self.word.clear();
        self.synonym.clear();
        self.field_errors = ValidationErrors::default();
    }

    /// Take all queued notifications, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.loading() {
            Err(WordsynError::Busy)
        } else {
            Ok(())
        }
    }

    /// Validate the inputs for `action` and mark the form as loading.
    ///
    /// On a validation failure the field errors are kept for display and the
    /// form stays idle.
    pub fn begin(&mut self, action: Action) -> Result<Request> {
        self.ensure_idle()?;
        if !self.is_enabled(action) {
            return Err(WordsynError::invalid_operation(format!(
                "'{action}' needs {}",
                match action {
                    Action::AddSynonym => "a word and a synonym",
                    Action::GetWordsForSynonym => "a synonym",
                    _ => "a word",
                }
            )));
        }

        let validated = match schema::validate(&FormData::new(&*self.word, &*self.synonym)) {
            Ok(validated) => validated,
            Err(errors) => {
                debug!("'{action}' rejected: {errors}");
                self.field_errors = errors.clone();
                return Err(errors.into());
            }
        };
        self.field_errors = ValidationErrors::default();

        match action {
            Action::GetSynonyms => self.words_result = None,
            Action::GetWordsForSynonym => self.synonyms_result = None,
            _ => {}
        }

        let request = Request {
            action,
            data: validated.to_form_data(),
        };
        debug!("'{action}' started with {:?}", request.data);
        self.pending = Some(request.clone());
        Ok(request)
    }

    /// Record the result of the pending request and clear the loading flag.
    pub fn finish(&mut self, result: Result<Outcome>) -> Result<Outcome> {
        let request = self
            .pending
            .take()
            .ok_or_else(|| WordsynError::invalid_operation("no request in progress"))?;

        match result {
            Ok(outcome) if outcome.action() == request.action => {
                self.record_success(&request, &outcome);
                Ok(outcome)
            }
            Ok(outcome) => Err(WordsynError::invalid_operation(format!(
                "'{}' finished with a result for '{}'",
                request.action,
                outcome.action()
            ))),
            Err(error) => {
                warn!("'{}' failed: {error}", request.action);
                let title = match request.action {
                    Action::AddWord => format!("Error Adding Word: {}", request.data.word),
                    Action::AddSynonym => {
                        format!("Error Adding Synonym: {}", request.data.synonym)
                    }
                    Action::GetSynonyms => "Error fetching Synonyms".to_string(),
                    Action::GetWordsForSynonym => "Error fetching words for synonym".to_string(),
                };
                self.notifications
                    .push_back(Notification::error(title, Some(error.to_string())));
                Err(error)
            }
        }
    }

    fn record_success(&mut self, request: &Request, outcome: &Outcome) {
        info!("'{}' succeeded", request.action);
        self.reset();

        match outcome {
            Outcome::WordAdded(added) => {
                self.clear_results();
                self.notifications
                    .push_back(Notification::success("Word Added", Some(added.word.clone())));
            }
            Outcome::SynonymAdded(added) => {
                self.clear_results();
                self.notifications.push_back(Notification::success(
                    format!("Synonym added to {}", request.data.word),
                    Some(added.id.to_string()),
                ));
            }
            Outcome::Synonyms(result) => self.synonyms_result = Some(result.clone()),
            Outcome::Words(result) => self.words_result = Some(result.clone()),
        }
    }

    fn clear_results(&mut self) {
        self.synonyms_result = None;
        self.words_result = None;
    }
}

/// Send a validated request through `api`.
pub async fn perform<A: WordApi + ?Sized>(api: &A, request: &Request) -> Result<Outcome> {
    let data = &request.data;
    match request.action {
        Action::AddWord => api.create_word(data).await.map(Outcome::WordAdded),
        Action::AddSynonym => api.attach_synonym(data).await.map(Outcome::SynonymAdded),
        Action::GetSynonyms => api.fetch_synonyms(&data.word).await.map(Outcome::Synonyms),
        Action::GetWordsForSynonym => api
            .fetch_words_for_synonym(&data.synonym)
            .await
            .map(Outcome::Words),
    }
}

/// A form bound to an API implementation.
pub struct Form<A> {
    api: A,
    state: FormState,
}

impl<A: WordApi> Form<A> {
    /// Create an empty form backed by `api`.
    pub fn new(api: A) -> Self {
        Form {
            api,
            state: FormState::new(),
        }
    }

    /// Get the API implementation.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Get the form state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Get the form state mutably.
    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    /// Fill both inputs.
    pub fn fill<W: Into<String>, S: Into<String>>(&mut self, word: W, synonym: S) -> Result<()> {
        self.state.set_word(word)?;
        self.state.set_synonym(synonym)
    }

    /// Validate, send and record one action.
    pub async fn submit(&mut self, action: Action) -> Result<Outcome> {
        let request = self.state.begin(action)?;
        let result = perform(&self.api, &request).await;
        self.state.finish(result)
    }

    /// Take all queued notifications, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.state.drain_notifications()
    }
}
