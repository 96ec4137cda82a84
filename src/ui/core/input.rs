/// Logical navigation input, independent of the device that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Back,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Confirm,
        Direction::Back,
    ];

    pub fn is_directional(self) -> bool {
        self.vector().is_some()
    }

    /// Unit step in screen space (y grows downwards). `None` for Confirm/Back.
    pub fn vector(self) -> Option<(f32, f32)> {
        match self {
            Direction::Up => Some((0.0, -1.0)),
            Direction::Down => Some((0.0, 1.0)),
            Direction::Left => Some((-1.0, 0.0)),
            Direction::Right => Some((1.0, 0.0)),
            Direction::Confirm | Direction::Back => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Confirm => "confirm",
            Direction::Back => "back",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/input.rs"]
mod tests;
