use serde::{Deserialize, Serialize};

/// How many numbers are drawn in one game, at most.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Competitive,
    Normal,
    Easy,
}

impl Mode {
    pub fn rounds(self) -> usize {
        match self {
            Mode::Competitive => 30,
            Mode::Normal => 45,
            Mode::Easy => 99,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Mode::Competitive => "Competitive",
            Mode::Normal => "Normal",
            Mode::Easy => "Easy",
        };
        write!(f, "{} ({} rounds)", name, self.rounds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harder_modes_have_fewer_rounds() {
        assert!(Mode::Competitive.rounds() < Mode::Normal.rounds());
        assert!(Mode::Normal.rounds() < Mode::Easy.rounds());
        assert_eq!(Mode::Easy.to_string(), "Easy (99 rounds)");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Mode::Competitive).unwrap(),
            "\"competitive\""
        );
    }
}
