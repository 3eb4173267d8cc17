//! Fermentable extract sources (malt, grain, sugar)

use log::warn;

use crate::common::Stage;
use crate::error::{check_fraction, check_non_negative, Result};

/// Efficiency coefficient applied to mashable grains that are steeped in the
/// boil kettle instead of mashed.
pub const DEFAULT_STEEPING_EFFICIENCY: f64 = 0.35;

/// Standard fermentables with known hot water extract and fermentability.
///
/// Fermentability `None` means the yeast's expected attenuation applies, which
/// is what you want for malt-derived extracts like LME and DME.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fermentable {
    Lme,
    Dme,
    Sucrose,
    CornSugar,
    RiceSyrupSolids,
    Molasses,
    CandiSugar,
    Lactose,
    Honey,
    MapleSyrup,
    Maltodextrin,
}

impl Fermentable {
    /// Hot water extract in liter degrees per kilogram.
    pub fn hwe(self) -> f64 {
        match self {
            Fermentable::Lme => 300.0,
            Fermentable::Dme => 375.0,
            Fermentable::Sucrose => 384.0,
            Fermentable::CornSugar => 351.0,
            Fermentable::RiceSyrupSolids => 351.0,
            Fermentable::Molasses => 300.0,
            Fermentable::CandiSugar => 384.0,
            Fermentable::Lactose => 384.0,
            Fermentable::Honey => 317.0,
            Fermentable::MapleSyrup => 259.0,
            Fermentable::Maltodextrin => 351.0,
        }
    }

    /// Fermentability as a fraction between 0 and 1, or `None` to use the
    /// yeast's expected attenuation.
    pub fn fermentability(self) -> Option<f64> {
        match self {
            Fermentable::Lme | Fermentable::Dme => None,
            Fermentable::Sucrose => Some(1.0),
            Fermentable::CornSugar => Some(1.0),
            Fermentable::RiceSyrupSolids => Some(0.8),
            Fermentable::Molasses => Some(0.9),
            Fermentable::CandiSugar => Some(1.0),
            Fermentable::Lactose => Some(0.0),
            Fermentable::Honey => Some(0.95),
            Fermentable::MapleSyrup => Some(1.0),
            Fermentable::Maltodextrin => Some(0.0),
        }
    }
}

/// An extract giver: mashable grain, steeping grain, LME, DME or plain sugar.
///
/// Contributes to pre-boil gravity, original gravity and beer color.
#[derive(Debug, Clone, PartialEq)]
pub struct Extract {
    /// The stage at which the extract giver is added.
    pub stage: Stage,
    pub name: String,
    /// Optional description (malt, LME, DME, sugar etc).
    pub description: String,
    /// Amount in kilograms.
    pub kg: f64,
    /// Max hot water extract in liter degrees per kilogram.
    pub max_hwe: f64,
    /// Color contribution in degrees EBC.
    pub deg_ebc: f64,
    /// How much of the sugar content any yeast is expected to ferment, as a
    /// fraction between 0 and 1. `None` (or `mashable` set) means the yeast's
    /// expected attenuation is used instead.
    pub fermentability: Option<f64>,
    /// True if the extract giver can be mashed or steeped.
    pub mashable: bool,
}

impl Extract {
    /// Create a new extract giver. Fails if an amount is negative or a
    /// fermentability is outside [0, 1].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        stage: Stage,
        name: impl Into<String>,
        description: impl Into<String>,
        kg: f64,
        max_hwe: f64,
        deg_ebc: f64,
        fermentability: Option<f64>,
        mashable: bool,
    ) -> Result<Self> {
        check_non_negative("kg", kg)?;
        check_non_negative("max_hwe", max_hwe)?;
        check_non_negative("deg_ebc", deg_ebc)?;
        if let Some(f) = fermentability {
            check_fraction("fermentability", f)?;
        }
        Ok(Extract {
            stage,
            name: name.into(),
            description: description.into(),
            kg,
            max_hwe,
            deg_ebc,
            fermentability,
            mashable,
        })
    }

    /// Create an extract giver from a [`Fermentable`] preset.
    pub fn from_fermentable(
        stage: Stage,
        name: impl Into<String>,
        fermentable: Fermentable,
        kg: f64,
        deg_ebc: f64,
    ) -> Result<Self> {
        Extract::new(
            stage,
            name,
            "",
            kg,
            fermentable.hwe(),
            deg_ebc,
            fermentable.fermentability(),
            false,
        )
    }

    /// Expected hot water extract at the given mash efficiency.
    pub fn hwe(&self, efficiency: f64) -> f64 {
        self.max_hwe * efficiency
    }

    /// Expected contribution to gravity as specific gravity (e.g. 1.040).
    ///
    /// `volume` is the post-boil volume in litres and `efficiency` the mash
    /// efficiency as a fraction. With `include_post_boil` set to false, sugar
    /// additions to the fermentation vessel contribute nothing, which is what
    /// post-boil gravity calculations want. `steeping_efficiency` applies to
    /// mashable grains added to the boil (see [`DEFAULT_STEEPING_EFFICIENCY`]).
    pub fn sg(
        &self,
        volume: f64,
        efficiency: f64,
        include_post_boil: bool,
        steeping_efficiency: f64,
    ) -> f64 {
        let efficiency = if self.mashable && self.stage == Stage::Ferment {
            // Adding a mashable to the fermenter extracts nothing.
            warn!(
                "mashable extract {:?} added at the ferment stage contributes no gravity",
                self.name
            );
            0.0
        } else if self.mashable && self.stage == Stage::Boil {
            // A mashable in the boil indicates a steeping grain.
            steeping_efficiency
        } else if !include_post_boil && self.stage == Stage::Ferment {
            0.0
        } else if !self.mashable {
            // Non-mashable extracts contribute all of their HWE regardless of
            // mash efficiency.
            1.0
        } else {
            efficiency
        };
        1.0 + 0.001 * self.hwe(efficiency) * self.kg / volume
    }

    /// Expected color contribution in EMCU given post-boil volume in litres.
    pub fn emcu(&self, volume: f64) -> f64 {
        self.kg * self.deg_ebc / volume
    }

    /// Convert %Extract (common in malt datasheets) to hot water extract in
    /// liter degrees per kilogram.
    pub fn percent_extract_to_hwe(percent_extract: f64) -> f64 {
        percent_extract * 0.01 * Fermentable::Sucrose.hwe()
    }

    /// Convert points/pound/gallon to liter degrees per kilogram.
    pub fn ppg_to_hwe(ppg: f64) -> f64 {
        // points/pound/gallon = gallon*degrees/pound
        // gallon = 3.78541178 l, pound = 0.45359237 kg
        ppg * 3.78541178 / 0.45359237
    }

    /// Convert liter degrees per kilogram to points/pound/gallon.
    pub fn hwe_to_ppg(hwe: f64) -> f64 {
        hwe * 0.45359237 / 3.78541178
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::assert_close;

    fn grain(stage: Stage, kg: f64, max_hwe: f64) -> Extract {
        Extract::new(stage, "test grain", "", kg, max_hwe, 0.0, None, true).unwrap()
    }

    fn sugar(stage: Stage, kg: f64, max_hwe: f64) -> Extract {
        Extract::new(stage, "test sugar", "", kg, max_hwe, 0.0, Some(1.0), false).unwrap()
    }

    #[test]
    fn hwe_scales_with_efficiency() {
        let extract = grain(Stage::Mash, 2.0, 300.0);
        assert_close(300.0 * 0.75, extract.hwe(0.75), 6);
    }

    #[test]
    fn sg_mashable_in_mash() {
        // The common all-grain case.
        let extract = grain(Stage::Mash, 2.0, 300.0);
        assert_close(
            1.048,
            extract.sg(10.0, 0.8, true, DEFAULT_STEEPING_EFFICIENCY),
            6,
        );
    }

    #[test]
    fn sg_mashable_in_boil_is_steeped() {
        let extract = grain(Stage::Boil, 2.0, 300.0);
        assert_close(1.015, extract.sg(10.0, 0.8, true, 0.25), 6);
    }

    #[test]
    fn sg_mashable_in_fermenter_contributes_nothing() {
        let extract = grain(Stage::Ferment, 2.0, 300.0);
        assert_close(
            1.0,
            extract.sg(10.0, 0.8, true, DEFAULT_STEEPING_EFFICIENCY),
            6,
        );
    }

    #[test]
    fn sg_non_mashable_ignores_efficiency() {
        let extract = sugar(Stage::Boil, 0.5, 380.0);
        assert_close(
            1.019,
            extract.sg(10.0, 0.8, true, DEFAULT_STEEPING_EFFICIENCY),
            6,
        );
    }

    #[test]
    fn sg_fermenter_addition_excluded_from_post_boil() {
        let extract = sugar(Stage::Ferment, 0.5, 380.0);
        assert_close(
            1.019,
            extract.sg(10.0, 0.8, true, DEFAULT_STEEPING_EFFICIENCY),
            6,
        );
        assert_close(
            1.0,
            extract.sg(10.0, 0.8, false, DEFAULT_STEEPING_EFFICIENCY),
            6,
        );
    }

    #[test]
    fn emcu_color_contribution() {
        let extract = Extract::new(Stage::Mash, "crystal", "", 0.5, 0.0, 25.0, None, true).unwrap();
        assert_close(1.25, extract.emcu(10.0), 6);
    }

    #[test]
    fn unit_conversions() {
        assert_close(307.2, Extract::percent_extract_to_hwe(80.0), 6);
        assert_close(383.8886043, Extract::ppg_to_hwe(46.0), 6);
        assert_close(46.0, Extract::hwe_to_ppg(383.8886043), 6);
    }

    #[test]
    fn fermentable_presets() {
        assert_close(384.0, Fermentable::Sucrose.hwe(), 9);
        assert_eq!(Some(1.0), Fermentable::Sucrose.fermentability());
        assert_eq!(Some(0.0), Fermentable::Lactose.fermentability());
        assert_eq!(None, Fermentable::Dme.fermentability());
    }

    #[test]
    fn construction_rejects_out_of_range_values() {
        assert!(Extract::new(Stage::Mash, "x", "", -1.0, 300.0, 0.0, None, true).is_err());
        assert!(Extract::new(Stage::Mash, "x", "", 1.0, -300.0, 0.0, None, true).is_err());
        assert!(Extract::new(Stage::Mash, "x", "", 1.0, 300.0, -2.0, None, true).is_err());
        assert!(Extract::new(Stage::Mash, "x", "", 1.0, 300.0, 0.0, Some(1.1), true).is_err());
        assert!(Extract::new(Stage::Mash, "x", "", f64::NAN, 300.0, 0.0, None, true).is_err());
    }
}
