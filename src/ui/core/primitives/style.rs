use std::ops::BitOr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Reset,
    Rgb(u8, u8, u8),
    Indexed(u8),
}

/// Text attribute set, one bit per attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Mod(u8);

impl Mod {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(0b0001);
    pub const DIM: Self = Self(0b0010);
    pub const UNDERLINE: Self = Self(0b0100);
    pub const REVERSE: Self = Self(0b1000);

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Mod {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// Cell style. `None` colours leave whatever the backend already has.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub mods: Mod,
}

impl Style {
    pub const fn plain() -> Self {
        Self {
            fg: None,
            bg: None,
            mods: Mod::NONE,
        }
    }

    pub const fn fg(self, color: Color) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    pub const fn bg(self, color: Color) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    pub const fn add_mod(self, m: Mod) -> Self {
        Self {
            mods: self.mods.union(m),
            ..self
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/ui/core/style.rs"]
mod tests;
