//! Non-extract, non-hop ingredients (spices, fruit, clarifiers)

use crate::common::Stage;
use crate::error::{check_non_negative, Result};

/// An adjunct: anything that is neither an extract giver, a hop nor a yeast.
///
/// Adjuncts affect flavor, clarity or color but not gravity. Color-active
/// adjuncts report their tint through `deg_ebc`, everything else leaves it at
/// zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjunct {
    /// The stage at which the adjunct is added.
    pub stage: Stage,
    pub name: String,
    /// Optional description of the adjunct.
    pub description: String,
    /// Instructions on how to prepare and precisely when and how to add the
    /// adjunct to the beer.
    pub instructions: String,
    /// Amount in kilograms.
    pub kg: f64,
    /// Color contribution in degrees EBC, for color-active adjuncts.
    pub deg_ebc: f64,
}

impl Adjunct {
    /// Create a new adjunct. Fails if the amount or color is negative.
    pub fn new(
        stage: Stage,
        name: impl Into<String>,
        description: impl Into<String>,
        instructions: impl Into<String>,
        kg: f64,
        deg_ebc: f64,
    ) -> Result<Self> {
        check_non_negative("kg", kg)?;
        check_non_negative("deg_ebc", deg_ebc)?;
        Ok(Adjunct {
            stage,
            name: name.into(),
            description: description.into(),
            instructions: instructions.into(),
            kg,
            deg_ebc,
        })
    }

    /// Color contribution in EMCU given post-boil volume in litres.
    pub fn emcu(&self, volume: f64) -> f64 {
        self.kg * self.deg_ebc / volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::assert_close;

    #[test]
    fn plain_adjunct_has_no_color() {
        let whirlfloc = Adjunct::new(
            Stage::Boil,
            "Whirlfloc",
            "clarifier",
            "add 15 min before flameout",
            0.001,
            0.0,
        )
        .unwrap();
        assert_close(0.0, whirlfloc.emcu(20.0), 9);
    }

    #[test]
    fn color_active_adjunct_contributes_emcu() {
        let cherries =
            Adjunct::new(Stage::Ferment, "Sour cherries", "", "", 2.0, 10.0).unwrap();
        assert_close(1.0, cherries.emcu(20.0), 6);
    }

    #[test]
    fn construction_rejects_negative_amount() {
        assert!(Adjunct::new(Stage::Boil, "x", "", "", -0.5, 0.0).is_err());
        assert!(Adjunct::new(Stage::Boil, "x", "", "", 0.5, -1.0).is_err());
    }
}
