use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Media condition on the Goldmine grading scale, ordered best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Condition {
    /// Mint
    Mint,
    /// Near Mint
    NearMint,
    /// Excellent
    Excellent,
    /// Very Good Plus
    VeryGoodPlus,
    /// Very Good
    VeryGood,
    /// Good Plus
    GoodPlus,
    /// Good
    Good,
    /// Fair
    Fair,
    /// Poor
    Poor,
}

/// Rank assigned to condition labels the scale does not know.
/// Unknown grades sort last rather than failing.
pub const UNKNOWN_CONDITION_RANK: u8 = 99;

impl Condition {
    pub fn all() -> &'static [Condition] {
        use Condition::*;
        &[
            Mint, NearMint, Excellent, VeryGoodPlus, VeryGood, GoodPlus,
            Good, Fair, Poor,
        ]
    }

    /// Short grade label as printed on sleeves and in the grading tables.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Mint => "M",
            Condition::NearMint => "NM",
            Condition::Excellent => "EX",
            Condition::VeryGoodPlus => "VG+",
            Condition::VeryGood => "VG",
            Condition::GoodPlus => "G+",
            Condition::Good => "G",
            Condition::Fair => "F",
            Condition::Poor => "P",
        }
    }

    /// Numeric sort rank, 1 = best.
    pub fn rank(&self) -> u8 {
        match self {
            Condition::Mint => 1,
            Condition::NearMint => 2,
            Condition::Excellent => 3,
            Condition::VeryGoodPlus => 4,
            Condition::VeryGood => 5,
            Condition::GoodPlus => 6,
            Condition::Good => 7,
            Condition::Fair => 8,
            Condition::Poor => 9,
        }
    }

    /// Rank for a free-text grade label. Labels outside the scale get
    /// [`UNKNOWN_CONDITION_RANK`] so they sort last instead of erroring.
    pub fn rank_of_label(label: &str) -> u8 {
        label
            .parse::<Condition>()
            .map(|condition| condition.rank())
            .unwrap_or(UNKNOWN_CONDITION_RANK)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Condition {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "M" => Ok(Condition::Mint),
            "NM" => Ok(Condition::NearMint),
            "EX" => Ok(Condition::Excellent),
            "VG+" => Ok(Condition::VeryGoodPlus),
            "VG" => Ok(Condition::VeryGood),
            "G+" => Ok(Condition::GoodPlus),
            "G" => Ok(Condition::Good),
            "F" => Ok(Condition::Fair),
            "P" => Ok(Condition::Poor),
            other => Err(ModelError::MalformedAttributes(format!(
                "unknown condition grade: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_cover_the_scale_in_order() {
        let ranks: Vec<u8> =
            Condition::all().iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for condition in Condition::all() {
            assert_eq!(condition.label().parse::<Condition>().ok(), Some(*condition));
        }
    }

    #[test]
    fn unknown_label_ranks_last() {
        assert_eq!(Condition::rank_of_label("VG+"), 4);
        assert_eq!(
            Condition::rank_of_label("Mint-ish"),
            UNKNOWN_CONDITION_RANK
        );
        assert_eq!(Condition::rank_of_label(""), UNKNOWN_CONDITION_RANK);
    }
}
