/// Prepares assistant text for rendering: fenced code-block delimiters get
/// line breaks on both sides so a fence always sits on its own line, then
/// every newline becomes an explicit `<br>` marker.
///
/// Text without newlines or fences passes through unchanged.
pub fn format_response(text: &str) -> String {
    text.replace("```", "<br>```<br>").replace('\n', "<br>")
}
