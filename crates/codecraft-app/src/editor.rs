//! Multi-line editor buffer for the code panel.
//!
//! Cursor positions are measured in characters, not bytes, so editing works
//! on non-ASCII drafts. Rendering assumes single-width glyphs, which holds
//! for the code beginners type here.

#[derive(Debug, Clone)]
pub struct EditorState {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl EditorState {
    pub fn new(text: &str) -> Self {
        let lines: Vec<String> = if text.is_empty() {
            vec![String::new()]
        } else {
            text.split('\n').map(str::to_string).collect()
        };
        let row = lines.len() - 1;
        let col = char_count(&lines[row]);
        Self { lines, row, col }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Cursor as (row, column) in character units.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn insert_char(&mut self, c: char) {
        let offset = byte_offset(&self.lines[self.row], self.col);
        self.lines[self.row].insert(offset, c);
        self.col += 1;
    }

    pub fn insert_newline(&mut self) {
        let offset = byte_offset(&self.lines[self.row], self.col);
        let rest = self.lines[self.row].split_off(offset);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    /// Delete the character before the cursor, joining lines at column zero.
    pub fn backspace(&mut self) {
        if self.col > 0 {
            let offset = byte_offset(&self.lines[self.row], self.col - 1);
            self.lines[self.row].remove(offset);
            self.col -= 1;
        } else if self.row > 0 {
            let tail = self.lines.remove(self.row);
            self.row -= 1;
            self.col = char_count(&self.lines[self.row]);
            self.lines[self.row].push_str(&tail);
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = char_count(&self.lines[self.row]);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < char_count(&self.lines[self.row]) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(char_count(&self.lines[self.row]));
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(char_count(&self.lines[self.row]));
        }
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self) {
        self.col = char_count(&self.lines[self.row]);
    }
}

fn char_count(line: &str) -> usize {
    line.chars().count()
}

fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(offset, _)| offset)
        .unwrap_or(line.len())
}
