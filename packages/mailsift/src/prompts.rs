//! Prompt templates and response parsing for the model-assisted pass.

/// System role for the extraction request.
pub const SYSTEM_PROMPT: &str = "You are an expert at extracting email addresses from text data. \
     Return only email addresses, one per line.";

/// Sentinel the model is told to return for an empty chunk.
pub const NO_EMAILS_SENTINEL: &str = "No emails found";

/// Build the user prompt for one chunk of CSV text.
///
/// Asks for contextual finds the regex would miss (obfuscated or
/// spaced-out addresses) alongside plainly written ones.
pub fn user_prompt(chunk: &str) -> String {
    format!(
        "Analyze the following CSV data and extract all email addresses, \
         including any written in an obfuscated or spaced-out form. \
         Return only the email addresses, one per line, without any \
         additional text or explanation.\n\
         If no emails are found, return \"{NO_EMAILS_SENTINEL}\".\n\n\
         CSV Data:\n{chunk}"
    )
}

/// Pull candidate addresses out of a completion.
///
/// Keeps lines that contain an '@' and are not the sentinel; trimming
/// only. Validation happens in the engine, where failures are discarded.
pub fn parse_suggestions(completion: &str) -> Vec<String> {
    completion
        .lines()
        .map(str::trim)
        .filter(|line| line.contains('@') && !line.contains(NO_EMAILS_SENTINEL))
        .map(str::to_string)
        .collect()
}
