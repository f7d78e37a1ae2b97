use std::fmt::Display;

pub const NO_RANK_LABEL: &str = "No rank";

/// Competitive brackets, lowest first. The discriminant is the tens digit of a rank code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MedalTier {
    Herald = 1,
    Guardian = 2,
    Crusader = 3,
    Archon = 4,
    Legend = 5,
    Ancient = 6,
    Divine = 7,
    Immortal = 8,
}

impl MedalTier {
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1 => Some(MedalTier::Herald),
            2 => Some(MedalTier::Guardian),
            3 => Some(MedalTier::Crusader),
            4 => Some(MedalTier::Archon),
            5 => Some(MedalTier::Legend),
            6 => Some(MedalTier::Ancient),
            7 => Some(MedalTier::Divine),
            8 => Some(MedalTier::Immortal),
            _ => None,
        }
    }

    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            MedalTier::Herald => "Herald",
            MedalTier::Guardian => "Guardian",
            MedalTier::Crusader => "Crusader",
            MedalTier::Archon => "Archon",
            MedalTier::Legend => "Legend",
            MedalTier::Ancient => "Ancient",
            MedalTier::Divine => "Divine",
            MedalTier::Immortal => "Immortal",
        }
    }
}

impl Display for MedalTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded medal. `tier` is 0 for unranked or unknown brackets and is what rankings sort on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Medal {
    pub tier: u8,
    pub stars: u8,
    pub label: String,
}

impl Medal {
    pub fn unranked() -> Self {
        Medal {
            tier: 0,
            stars: 0,
            label: String::from(NO_RANK_LABEL),
        }
    }
}

impl Default for Medal {
    fn default() -> Self {
        Medal::unranked()
    }
}

impl Display for Medal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}
