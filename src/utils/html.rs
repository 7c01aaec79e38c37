use std::collections::HashSet;

/// Strips every HTML tag from a display name and returns plain text.
///
/// Text content is kept; `<script>` and `<style>` bodies are dropped entirely.
/// Ammonia serializes its output as HTML, so the handful of entities the
/// serializer emits for text nodes are turned back into characters.
pub fn clean_name(input: &str) -> String {
    let mut builder = ammonia::Builder::empty();
    builder.clean_content_tags(HashSet::from(["script", "style"]));
    let cleaned = builder.clean(input).to_string();
    unescape_text(&cleaned).trim().to_string()
}

// `&amp;` last, so an escaped entity like `&amp;lt;` stays literal text.
fn unescape_text(serialized: &str) -> String {
    serialized
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}
