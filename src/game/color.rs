use serde::Serialize;

/// Population membership. Yellow moves first and reads payoff slot 0,
/// Blue moves second and reads payoff slot 1.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Color {
    Yellow = 0,
    Blue = 1,
}

impl Color {
    pub fn opponent(&self) -> Self {
        match self {
            Self::Yellow => Self::Blue,
            Self::Blue => Self::Yellow,
        }
    }
}

impl From<usize> for Color {
    fn from(seat: usize) -> Self {
        match seat {
            0 => Self::Yellow,
            1 => Self::Blue,
            _ => panic!("centipede only has 2 seats"),
        }
    }
}
impl From<Color> for usize {
    fn from(c: Color) -> usize {
        c as usize
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Self::Yellow => "yellow",
            Self::Blue => "blue",
        })
    }
}
