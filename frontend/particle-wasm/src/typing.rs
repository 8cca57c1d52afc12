//! Typewriter loop for the hero role titles.
//!
//! Types one character every [`TYPE_DELAY_MS`], holds the finished title
//! for [`HOLD_DELAY_MS`], then deletes one character every
//! [`DELETE_DELAY_MS`] before moving on to the next title.

pub const TYPE_DELAY_MS: u32 = 80;
pub const DELETE_DELAY_MS: u32 = 40;
pub const HOLD_DELAY_MS: u32 = 2000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Typewriter {
    role_lengths: Vec<usize>,
    role: usize,
    visible: usize,
    deleting: bool,
}

impl Typewriter {
    /// Builds from role lengths in characters.
    pub fn new(role_lengths: Vec<usize>) -> Self {
        Self {
            role_lengths,
            ..Self::default()
        }
    }

    pub fn from_roles(roles: &[&str]) -> Self {
        Self::new(roles.iter().map(|role| role.chars().count()).collect())
    }

    pub fn push_role(&mut self, length: usize) {
        self.role_lengths.push(length);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn role(&self) -> usize {
        self.role
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// The currently shown prefix of `role`.
    pub fn visible_text<'a>(&self, role: &'a str) -> &'a str {
        match role.char_indices().nth(self.visible) {
            Some((end, _)) => &role[..end],
            None => role,
        }
    }

    fn advance_role(&mut self) {
        self.role = (self.role + 1) % self.role_lengths.len();
    }

    /// Runs one step and returns the delay until the next one, or `None`
    /// when there is nothing to type.
    pub fn tick(&mut self) -> Option<u32> {
        if self.role_lengths.iter().all(|&len| len == 0) {
            return None;
        }
        if self.role >= self.role_lengths.len() {
            self.role = 0;
        }
        while !self.deleting && self.role_lengths[self.role] == 0 {
            self.advance_role();
        }

        let length = self.role_lengths[self.role];
        if self.deleting {
            self.visible = self.visible.saturating_sub(1);
            if self.visible == 0 {
                self.deleting = false;
                self.advance_role();
                return Some(TYPE_DELAY_MS);
            }
            Some(DELETE_DELAY_MS)
        } else {
            self.visible = (self.visible + 1).min(length);
            if self.visible == length {
                self.deleting = true;
                return Some(HOLD_DELAY_MS);
            }
            Some(TYPE_DELAY_MS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_holds_deletes_then_moves_on() {
        let roles = ["Data", "BI"];
        let mut writer = Typewriter::from_roles(&roles);

        let delays: Vec<u32> = (0..4).filter_map(|_| writer.tick()).collect();
        assert_eq!(delays, vec![80, 80, 80, 2000]);
        assert_eq!(writer.visible_text(roles[0]), "Data");
        assert!(writer.is_deleting());

        assert_eq!(writer.tick(), Some(40));
        assert_eq!(writer.visible_text(roles[0]), "Dat");
        assert_eq!(writer.tick(), Some(40));
        assert_eq!(writer.tick(), Some(40));
        assert_eq!(writer.tick(), Some(80));
        assert_eq!(writer.visible(), 0);
        assert_eq!(writer.role(), 1);
        assert!(!writer.is_deleting());

        assert_eq!(writer.tick(), Some(80));
        assert_eq!(writer.visible_text(roles[1]), "B");
        assert_eq!(writer.tick(), Some(2000));
        assert_eq!(writer.tick(), Some(40));
        assert_eq!(writer.tick(), Some(80));
        assert_eq!(writer.role(), 0);
    }

    #[test]
    fn single_character_role_holds_immediately() {
        let mut writer = Typewriter::new(vec![1]);
        assert_eq!(writer.tick(), Some(2000));
        assert_eq!(writer.tick(), Some(80));
        assert_eq!(writer.role(), 0);
        assert_eq!(writer.visible(), 0);
    }

    #[test]
    fn empty_roles_are_skipped() {
        let mut writer = Typewriter::new(vec![0, 2, 0]);
        assert_eq!(writer.tick(), Some(80));
        assert_eq!(writer.role(), 1);
        assert_eq!(writer.tick(), Some(2000));
        assert_eq!(writer.tick(), Some(40));
        assert_eq!(writer.tick(), Some(80));
        assert_eq!(writer.role(), 2);
        assert_eq!(writer.tick(), Some(80));
        assert_eq!(writer.role(), 1);
        assert_eq!(writer.visible(), 1);
    }

    #[test]
    fn nothing_to_type() {
        assert_eq!(Typewriter::default().tick(), None);
        assert_eq!(Typewriter::new(vec![0, 0]).tick(), None);
    }

    #[test]
    fn visible_text_respects_char_boundaries() {
        let role = "Données";
        let mut writer = Typewriter::from_roles(&[role]);
        for _ in 0..4 {
            writer.tick();
        }
        assert_eq!(writer.visible_text(role), "Donn");
        for _ in 0..3 {
            writer.tick();
        }
        assert_eq!(writer.visible_text(role), role);
    }

    #[test]
    fn reset_forgets_roles() {
        let mut writer = Typewriter::from_roles(&["abc"]);
        writer.tick();
        writer.reset();
        assert_eq!(writer, Typewriter::default());
        writer.push_role(2);
        assert_eq!(writer.tick(), Some(80));
    }
}
