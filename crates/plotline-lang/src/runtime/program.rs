/// Non-blank lines of a program, trimmed, with their 1-based line numbers.
///
/// Blank lines are skipped but still counted, so numbers match the editor.
/// `\r\n` and `\n` terminators are both accepted.
pub fn lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}
