use std::fmt::{self, Display};
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Colour {
    Red,
    Blue,
}

impl Colour {
    pub fn opposite(&self) -> Colour {
        match self {
            Colour::Red => Colour::Blue,
            Colour::Blue => Colour::Red,
        }
    }

    /// Red owns the opening move unless a swap occurs.
    pub fn first_player() -> Colour {
        Colour::Red
    }

    pub fn to_char(&self) -> char {
        match self {
            Colour::Red => 'R',
            Colour::Blue => 'B',
        }
    }
}

impl Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Colour {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(Colour::Red),
            "B" => Ok(Colour::Blue),
            other => Err(format!("unknown colour: {:?} (expected R or B)", other)),
        }
    }
}

/// A single reply to the host: either place a stone on a free cell, or
/// claim the opponent's opening move via the swap rule.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Move {
    Place { row: usize, column: usize },
    Swap,
}

impl Move {
    pub fn place(row: usize, column: usize) -> Move {
        Move::Place { row, column }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place { row, column } => write!(f, "{},{}", row, column),
            // "-1,-1" is the swap sentinel understood by the host
            Move::Swap => write!(f, "-1,-1"),
        }
    }
}
