//! Minimal multi-line text buffer for the bank editor.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextArea {
    lines: Vec<String>,
    row: usize,
    /// Cursor column in characters.
    col: usize,
    pub scroll: u16,
}

impl TextArea {
    pub fn new(text: &str) -> Self {
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            row: 0,
            col: 0,
            scroll: 0,
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, |l| l.chars().count())
    }

    fn byte_at(line: &str, col: usize) -> usize {
        line.char_indices().nth(col).map_or(line.len(), |(i, _)| i)
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(line) = self.lines.get_mut(self.row) {
            let at = Self::byte_at(line, self.col);
            line.insert(at, c);
            self.col += 1;
        }
    }

    pub fn newline(&mut self) {
        let Some(line) = self.lines.get_mut(self.row) else {
            return;
        };
        let at = Self::byte_at(line, self.col);
        let rest = line.split_off(at);
        self.row += 1;
        self.col = 0;
        self.lines.insert(self.row, rest);
    }

    pub fn backspace(&mut self) {
        if self.col > 0 {
            if let Some(line) = self.lines.get_mut(self.row) {
                let at = Self::byte_at(line, self.col - 1);
                line.remove(at);
                self.col -= 1;
            }
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.line_len(self.row);
            if let Some(prev) = self.lines.get_mut(self.row) {
                prev.push_str(&current);
            }
        }
    }

    pub fn left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.line_len(self.row);
        }
    }

    pub fn right(&mut self) {
        if self.col < self.line_len(self.row) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    pub fn down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    /// Keep the cursor row inside a viewport of `height` lines.
    pub fn follow_cursor(&mut self, height: u16) {
        let row = u16::try_from(self.row).unwrap_or(u16::MAX);
        if row < self.scroll {
            self.scroll = row;
        } else if height > 0 && row >= self.scroll.saturating_add(height) {
            self.scroll = row.saturating_sub(height - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_round_trip() {
        let mut t = TextArea::new("{\n}");
        t.right();
        t.newline();
        for c in "\"a\": ñ".chars() {
            t.insert_char(c);
        }
        assert_eq!(t.text(), "{\n\"a\": ñ\n}");
        t.backspace();
        assert_eq!(t.text(), "{\n\"a\": \n}");
    }

    #[test]
    fn backspace_at_line_start_joins_lines() {
        let mut t = TextArea::new("ab\ncd");
        t.down();
        t.backspace();
        assert_eq!(t.text(), "abcd");
        assert_eq!(t.cursor(), (0, 2));
    }

    #[test]
    fn empty_text_has_one_line() {
        let t = TextArea::new("");
        assert_eq!(t.lines().len(), 1);
    }
}
