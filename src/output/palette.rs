//! Colors for each kind of output text

use termcolor::{Color, ColorSpec};

const ROLE_COUNT: usize = 7;

/// The kinds of text that get their own color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    RootLabel,
    FolderLabel,
    FileLabel,
    SizeZero,
    SizeNonZero,
    SizeUnit,
    PermissionError,
}

impl Role {
    pub const ALL: [Role; ROLE_COUNT] = [
        Role::RootLabel,
        Role::FolderLabel,
        Role::FileLabel,
        Role::SizeZero,
        Role::SizeNonZero,
        Role::SizeUnit,
        Role::PermissionError,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Lookup table from `Role` to the color it is drawn in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    specs: [ColorSpec; ROLE_COUNT],
}

impl Palette {
    pub fn get(&self, role: Role) -> &ColorSpec {
        &self.specs[role.index()]
    }

    /// Replace the color used for one role.
    pub fn with(mut self, role: Role, spec: ColorSpec) -> Self {
        self.specs[role.index()] = spec;
        self
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            specs: Role::ALL.map(default_spec),
        }
    }
}

fn fg(color: Color) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color));
    spec
}

/// White on red, bold: used for anything that signals a problem or emptiness.
fn alert() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::White))
        .set_bg(Some(Color::Red))
        .set_bold(true)
        .set_intense(true);
    spec
}

fn default_spec(role: Role) -> ColorSpec {
    match role {
        Role::RootLabel | Role::FolderLabel => fg(Color::Rgb(255, 255, 0)),
        Role::FileLabel => fg(Color::Rgb(0, 255, 255)),
        Role::SizeZero | Role::PermissionError => alert(),
        Role::SizeNonZero => fg(Color::Rgb(255, 128, 255)),
        Role::SizeUnit => fg(Color::Ansi256(214)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_index_their_own_slot() {
        for (i, role) in Role::ALL.iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn test_default_colors() {
        let palette = Palette::default();
        assert_eq!(
            palette.get(Role::FolderLabel).fg(),
            Some(&Color::Rgb(255, 255, 0))
        );
        assert_eq!(palette.get(Role::SizeUnit).fg(), Some(&Color::Ansi256(214)));
        assert_eq!(palette.get(Role::SizeZero), palette.get(Role::PermissionError));
        assert_ne!(palette.get(Role::SizeZero), palette.get(Role::SizeNonZero));
    }

    #[test]
    fn test_override_one_role() {
        let palette = Palette::default().with(Role::FileLabel, fg(Color::Green));
        assert_eq!(palette.get(Role::FileLabel).fg(), Some(&Color::Green));
        assert_eq!(
            palette.get(Role::RootLabel),
            Palette::default().get(Role::RootLabel)
        );
    }
}
