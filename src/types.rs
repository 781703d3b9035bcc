//! Request and response bodies exchanged with the words service.

use serde::{Deserialize, Serialize};

/// The two form inputs, exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub word: String,
    pub synonym: String,
}

impl FormData {
    /// Create form input from the two fields.
    pub fn new<W: Into<String>, S: Into<String>>(word: W, synonym: S) -> Self {
        FormData {
            word: word.into(),
            synonym: synonym.into(),
        }
    }
}

/// Body returned by `POST /word`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddWordResponse {
    /// Row id, when the service reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub word: String,
    #[serde(default)]
    pub synonym: String,
}

/// Body returned by `POST /synonym/{word}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddSynonymResponse {
    /// Id of the word/synonym association.
    pub id: i64,
}

/// Body returned by `GET /synonyms/{word}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSynonymsResponse {
    pub word: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

/// Body returned by `GET /words/{synonym}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetWordsForSynonymResponse {
    pub synonym: String,
    #[serde(default)]
    pub words: Vec<String>,
}

/// Body the service sends alongside a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(
        rename = "statusCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub status_code: Option<u16>,
}
