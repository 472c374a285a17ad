//! Progressive text reveal for banners.
//!
//! Models the animated-typing collaborator: a fixed HTML string revealed a
//! few visible characters per tick. Markup never shows half-open -- tags
//! are crossed atomically and an entity counts as one character.

/// A running typed-text effect over an HTML fragment.
#[derive(Debug, Clone)]
pub struct TypedEffect {
    html: String,
    /// Byte offset of the reveal frontier. Always on a char boundary and
    /// never inside a tag.
    pos: usize,
    /// Visible characters revealed per tick; 0 reveals everything at once.
    speed: u32,
}

impl TypedEffect {
    pub fn new(html: String, speed: u32) -> Self {
        let mut effect = Self {
            html,
            pos: 0,
            speed,
        };
        // Leading tags carry no visible text; cross them immediately.
        effect.skip_tags();
        effect
    }

    /// The full target fragment.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// The revealed prefix.
    pub fn visible(&self) -> &str {
        &self.html[..self.pos]
    }

    pub fn is_finished(&self) -> bool {
        self.pos >= self.html.len()
    }

    /// Jump to the end.
    pub fn finish(&mut self) {
        self.pos = self.html.len();
    }

    /// Advance by `ticks` ticks. Returns true once the effect finished.
    pub fn advance(&mut self, ticks: u32) -> bool {
        if self.speed == 0 {
            self.finish();
            return true;
        }
        let mut remaining = u64::from(self.speed) * u64::from(ticks);
        while remaining > 0 && !self.is_finished() {
            self.reveal_one();
            self.skip_tags();
            remaining -= 1;
        }
        self.is_finished()
    }

    /// Reveal one visible unit: a whole entity or a single character.
    fn reveal_one(&mut self) {
        let rest = &self.html[self.pos..];
        if rest.starts_with('&')
            && let Some(end) = rest.find(';').filter(|&i| i < 8)
        {
            self.pos += end + 1;
            return;
        }
        match rest.chars().next() {
            Some(c) => self.pos += c.len_utf8(),
            None => self.pos = self.html.len(),
        }
    }

    /// Cross any tags sitting at the frontier.
    fn skip_tags(&mut self) {
        while self.html[self.pos..].starts_with('<') {
            match self.html[self.pos..].find('>') {
                Some(i) => self.pos += i + 1,
                None => self.pos = self.html.len(),
            }
        }
    }
}
