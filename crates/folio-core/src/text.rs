//! Animated text: the rotating role line and the greeting typewriter

/// Cycles through role phrases.
#[derive(Debug, Clone)]
pub struct RoleRotator {
    roles: Vec<String>,
    index: usize,
}

impl RoleRotator {
    /// `None` when there is nothing to rotate.
    pub fn new(roles: Vec<String>) -> Option<Self> {
        if roles.is_empty() {
            return None;
        }
        Some(Self { roles, index: 0 })
    }

    pub fn current(&self) -> &str {
        &self.roles[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Step to the next phrase, wrapping around, and return it.
    pub fn advance(&mut self) -> &str {
        self.index = (self.index + 1) % self.roles.len();
        self.current()
    }
}

/// Reveals text one character at a time.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    /// Byte length of the revealed prefix; always on a char boundary.
    shown: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }

    pub fn visible(&self) -> &str {
        &self.text[..self.shown]
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.len()
    }

    /// Reveal one more character. Returns the visible prefix, or `None`
    /// once the whole text is shown.
    pub fn step(&mut self) -> Option<&str> {
        let next = self.text[self.shown..].chars().next()?;
        self.shown += next.len_utf8();
        Some(self.visible())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotator_wraps() {
        let mut r = RoleRotator::new(vec!["a".into(), "b".into(), "c".into()]).unwrap();
        assert_eq!(r.current(), "a");
        assert_eq!(r.advance(), "b");
        assert_eq!(r.advance(), "c");
        assert_eq!(r.advance(), "a");
        assert_eq!(r.index(), 0);
    }

    #[test]
    fn test_empty_rotator() {
        assert!(RoleRotator::new(Vec::new()).is_none());
    }

    #[test]
    fn test_typewriter_reveals_per_char() {
        let mut t = Typewriter::new("Hi!");
        assert_eq!(t.visible(), "");
        assert_eq!(t.step(), Some("H"));
        assert_eq!(t.step(), Some("Hi"));
        assert_eq!(t.step(), Some("Hi!"));
        assert!(t.is_done());
        assert_eq!(t.step(), None);
    }

    #[test]
    fn test_typewriter_multibyte() {
        let mut t = Typewriter::new("héllo 👋");
        let frames: Vec<String> = std::iter::from_fn(|| t.step().map(str::to_string)).collect();
        assert_eq!(frames.len(), 7);
        assert_eq!(frames.last().map(String::as_str), Some("héllo 👋"));
    }
}
