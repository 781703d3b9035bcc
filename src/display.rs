//! Text rendering of query results.
//!
//! A result is shown as its heading term on one line followed by the related
//! terms in server order:
//!
//! ```text
//! cat
//! [ feline, kitty ]
//! ```

use std::fmt;

use crate::types::{GetSynonymsResponse, GetWordsForSynonymResponse};

/// A word with its list of synonyms.
#[derive(Debug, Clone, Copy)]
pub struct WordWithSynonyms<'a> {
    pub word: &'a str,
    pub synonyms: &'a [String],
}

/// A synonym with the list of words it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct SynonymWithWords<'a> {
    pub synonym: &'a str,
    pub words: &'a [String],
}

fn write_entry(f: &mut fmt::Formatter<'_>, heading: &str, terms: &[String]) -> fmt::Result {
    writeln!(f, "{heading}")?;
    write!(f, "[ {} ]", terms.join(", "))
}

impl fmt::Display for WordWithSynonyms<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entry(f, self.word, self.synonyms)
    }
}

impl fmt::Display for SynonymWithWords<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entry(f, self.synonym, self.words)
    }
}

impl<'a> From<&'a GetSynonymsResponse> for WordWithSynonyms<'a> {
    fn from(response: &'a GetSynonymsResponse) -> Self {
        WordWithSynonyms {
            word: &response.word,
            synonyms: &response.synonyms,
        }
    }
}

impl<'a> From<&'a GetWordsForSynonymResponse> for SynonymWithWords<'a> {
    fn from(response: &'a GetWordsForSynonymResponse) -> Self {
        SynonymWithWords {
            synonym: &response.synonym,
            words: &response.words,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_with_synonyms_keeps_order() {
        let response = GetSynonymsResponse {
            word: "cat".to_string(),
            synonyms: vec!["feline".to_string(), "kitty".to_string()],
        };
        let rendered = WordWithSynonyms::from(&response).to_string();
        assert_eq!(rendered, "cat\n[ feline, kitty ]");
        assert!(rendered.find("feline").unwrap() < rendered.find("kitty").unwrap());
    }

    #[test]
    fn test_synonym_with_words() {
        let response = GetWordsForSynonymResponse {
            synonym: "quick".to_string(),
            words: vec!["fast".to_string()],
        };
        assert_eq!(
            SynonymWithWords::from(&response).to_string(),
            "quick\n[ fast ]"
        );
    }

    #[test]
    fn test_empty_list() {
        let response = GetSynonymsResponse {
            word: "lonely".to_string(),
            synonyms: Vec::new(),
        };
        assert_eq!(WordWithSynonyms::from(&response).to_string(), "lonely\n[  ]");
    }
}
