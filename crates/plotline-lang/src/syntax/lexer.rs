/// Splits a single command line into words. Never fails: anything that is not
/// whitespace belongs to some word. Whitespace is `char::is_whitespace`, the
/// same set `str::trim` strips.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    pub fn tokenize(self) -> Vec<&'a str> {
        self.collect()
    }

    /// Byte offset of the next char matching `pred`, or end of input.
    fn find_from(&self, pred: impl Fn(char) -> bool) -> usize {
        self.source[self.pos..]
            .char_indices()
            .find(|(_, c)| pred(*c))
            .map_or(self.source.len(), |(i, _)| self.pos + i)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.pos = self.find_from(|c| !c.is_whitespace());
        if self.pos >= self.source.len() {
            return None;
        }

        let start = self.pos;
        self.pos = self.find_from(char::is_whitespace);
        Some(&self.source[start..self.pos])
    }
}
