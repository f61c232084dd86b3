//! Greedy word wrapping to a fixed character width.

/// Soft line width, in characters, used for quotes.
pub const DEFAULT_WRAP_WIDTH: usize = 40;

/// Wraps `text` into display lines of at most `max_chars` characters.
///
/// Words are taken from `text` split on whitespace and packed greedily. A word
/// joins the current line when the line plus the word (without its own
/// trailing space) fits in `max_chars`. Every line keeps the single trailing
/// space that follows its last word; layout measures it.
///
/// A word longer than `max_chars` is never split. It ends up alone on its
/// own line. If it is the very first word, the empty line in front of it is
/// kept too.
///
/// Empty or whitespace-only input yields `[""]`. Callers are expected to
/// check for that before rendering.
///
/// # Example
/// ```
/// let lines = quoteforge::wrap("hello world", 40);
/// assert_eq!(lines, vec!["hello world ".to_string()]);
/// ```
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();
    // Chars in `current_line`, trailing space included.
    let mut current_chars = 0usize;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();

        if current_chars + word_chars <= max_chars {
            current_line.push_str(word);
            current_line.push(' ');
            current_chars += word_chars + 1;
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line.push_str(word);
            current_line.push(' ');
            current_chars = word_chars + 1;
        }
    }

    lines.push(current_line);
    lines
}

/// Joins wrapped lines into the newline separated block the compositor draws.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.as_ref());
    }
    out
}

/// Wraps `text` and joins the result, the form used for measuring and drawing.
pub fn wrap_joined(text: &str, max_chars: usize) -> String {
    join_lines(&wrap(text, max_chars))
}
