//! Prompt templates.

/// Instruction asking for a titled, multi-paragraph story about `location`.
///
/// # Examples
///
/// ```
/// let prompt = lore_flows::story_prompt("Petra, Jordan");
/// assert!(prompt.contains("Location: Petra, Jordan"));
/// ```
pub fn story_prompt(location: &str) -> String {
    format!(
        "You are a storyteller who crafts engaging stories related to the given location.\n\
         \n\
         Location: {location}\n\
         \n\
         Please generate a story with a title that is relevant to the location.\n\
         The story should be a good length to read in one sitting, with multiple paragraphs \
         separated by blank lines.\n\
         Focus on historical events, local legends, or interesting facts about the location."
    )
}

/// Instruction asking for a concise summary aimed at a visitor.
pub fn summary_prompt(location: &str) -> String {
    format!(
        "Summarize the key historical and cultural details of the following location: \
         {location}. Provide a concise and informative summary. Focus on information that \
         would be relevant to a visitor."
    )
}
