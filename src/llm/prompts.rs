/// Build the meeting-notes prompt. The transcript is embedded verbatim at the end.
pub fn build_notes_prompt(transcript: &str) -> String {
    format!(
        "Analyze this meeting transcript and provide:\n\
1. SUMMARY: A concise 2-3 sentence summary of the meeting\n\
2. ACTION ITEMS: List specific action items with who is responsible (if mentioned)\n\
3. FOLLOW-UPS: List topics or questions that need follow-up\n\
\n\
Format your response as a valid JSON object with these keys:\n\
\"summary\" (string), \"action_items\" (list of strings), \"follow_ups\" (list of strings).\n\
\n\
Do not include markdown formatting like ```json ... ```. Just return the raw JSON.\n\
\n\
Transcript:\n\
{transcript}"
    )
}
