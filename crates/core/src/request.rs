//! Task Extraction Request
//!
//! Builds the instruction block and the transcript-bearing content block sent
//! to the model. Pure data transformation; an empty alias list still yields a
//! (degenerate) request.

use serde::{Deserialize, Serialize};

/// Separator line placed around the verbatim transcript.
const TRANSCRIPT_DELIMITER: &str = "---";

/// A complete extraction request: fixed instructions plus variable content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRequest {
    /// System instructions (the extraction policy)
    pub system: String,
    /// User content embedding the aliases and the transcript
    pub user: String,
}

/// Build the system prompt describing the extraction policy and JSON schema.
pub fn build_extraction_system_prompt() -> String {
    r#"You are a project management expert and a text analysis engine.
From the given meeting transcript, extract ONLY the tasks assigned to the user, infer the dependencies between those tasks, and output them as JSON.

The output must follow this JSON schema exactly:

{
  "tasks": [
    {
      "id": "unique ID string such as T1, T2",
      "title": "short task name",
      "detail": "task details if needed; an empty string is allowed",
      "owner": "me",
      "deadline": "YYYY-MM-DD or null",
      "depends_on": ["T1", "T2"]
    }
  ]
}

Rules:
1. Extract only tasks assigned to the user. Attribute a task to the user from how they are addressed in the dialogue, e.g. "<name>, please handle ...", "<name> is in charge of ...", "can <name> take care of ...".
2. Infer "depends_on" from sequencing language such as "first", "after that", "once X is done", "when X finishes".
3. If a deadline is unknown, set "deadline" to null. Never guess a date.
4. Return ONLY the valid JSON object. No explanatory text, no markdown fences."#
        .to_string()
}

/// Build the user message embedding the alias list and the verbatim transcript.
pub fn build_extraction_user_message(transcript: &str, aliases: &[String]) -> String {
    format!(
        "How the user is addressed: {}\n\n\
         Below is the meeting transcript. Extract the tasks from it.\n\n\
         {delim}\n{}\n{delim}\n",
        aliases.join(", "),
        transcript,
        delim = TRANSCRIPT_DELIMITER
    )
}

/// Build the full extraction request for a transcript.
pub fn build_extraction_request(transcript: &str, aliases: &[String]) -> ExtractionRequest {
    ExtractionRequest {
        system: build_extraction_system_prompt(),
        user: build_extraction_user_message(transcript, aliases),
    }
}
