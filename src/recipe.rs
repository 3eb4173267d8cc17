//! Recipe aggregation: whole-batch metrics from per-ingredient contributions

use crate::adjunct::Adjunct;
use crate::brewhouse::Brewhouse;
use crate::calc::to_plato;
use crate::co2::Co2;
use crate::common::Stage;
use crate::error::{check_non_negative, BrewError, Result};
use crate::extract::{Extract, DEFAULT_STEEPING_EFFICIENCY};
use crate::hop::Hop;
use crate::mash::Mash;
use crate::water::{SaltAdditions, WaterProfile};
use crate::yeast::Yeast;

/// A beer recipe: the ingredient lists plus batch-level process parameters.
///
/// Every metric is re-derived from the current field values on each call;
/// nothing is cached and no field is mutated by a computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub name: String,
    /// Equipment parameters.
    pub brewhouse: Brewhouse,
    /// Extract givers.
    pub extracts: Vec<Extract>,
    /// Hop additions.
    pub hops: Vec<Hop>,
    /// The fermenting yeast. Gravity-derived metrics that model fermentation
    /// fail with [`BrewError::MissingIngredient`] while this is `None`.
    pub yeast: Option<Yeast>,
    /// Carbonation target.
    pub co2: Option<Co2>,
    /// Spices, fruit, clarifiers and other adjuncts.
    pub adjuncts: Vec<Adjunct>,
    /// The mash process.
    pub mash: Mash,
    /// Desired water profile, for reference when choosing salt additions.
    pub target_water_profile: Option<WaterProfile>,
    /// Brewing salts added to the liquor.
    pub salt_additions: Option<SaltAdditions>,
    /// Boil time in minutes.
    pub boil_time: f64,
    /// Post-boil volume in litres.
    pub post_boil_volume: f64,
    /// Pitch temperature in degrees Celsius.
    pub pitch_temp: f64,
    /// Author(s) of the recipe.
    pub authors: Vec<String>,
    pub description: String,
}

impl Recipe {
    /// Create a new recipe from completed ingredient lists. Fails if the boil
    /// time is negative or the post-boil volume is not positive.
    ///
    /// Optional metadata (`authors`, `description`, `target_water_profile`,
    /// `salt_additions`) starts out empty.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        brewhouse: Brewhouse,
        extracts: Vec<Extract>,
        hops: Vec<Hop>,
        yeast: Option<Yeast>,
        co2: Option<Co2>,
        adjuncts: Vec<Adjunct>,
        mash: Mash,
        boil_time: f64,
        post_boil_volume: f64,
        pitch_temp: f64,
    ) -> Result<Self> {
        check_non_negative("boil_time", boil_time)?;
        check_non_negative("post_boil_volume", post_boil_volume)?;
        if post_boil_volume == 0.0 {
            return Err(BrewError::InvalidIngredientValue {
                field: "post_boil_volume",
                value: post_boil_volume,
                reason: "must be positive",
            });
        }
        if !pitch_temp.is_finite() {
            return Err(BrewError::InvalidIngredientValue {
                field: "pitch_temp",
                value: pitch_temp,
                reason: "must be a finite number",
            });
        }
        Ok(Recipe {
            name: name.into(),
            brewhouse,
            extracts,
            hops,
            yeast,
            co2,
            adjuncts,
            mash,
            target_water_profile: None,
            salt_additions: None,
            boil_time,
            post_boil_volume,
            pitch_temp,
            authors: Vec::new(),
            description: String::new(),
        })
    }

    /// Pre-boil volume in litres: the post-boil volume grossed up by the
    /// brewhouse's hourly boil-off over the boil duration.
    pub fn pre_boil_volume(&self) -> f64 {
        let boil_hours = self.boil_time / 60.0;
        self.post_boil_volume / (1.0 - self.brewhouse.boil_off_rate).powf(boil_hours)
    }

    /// Original gravity. Unlike [`Recipe::post_boil_gravity`] this includes
    /// sugar additions to the fermenter.
    pub fn og(&self) -> f64 {
        self.gravity(true)
    }

    /// Post-boil gravity. Unlike [`Recipe::og`] this excludes sugar additions
    /// to the fermenter.
    pub fn post_boil_gravity(&self) -> f64 {
        self.gravity(false)
    }

    fn gravity(&self, include_post_boil: bool) -> f64 {
        self.extracts
            .iter()
            .map(|x| {
                x.sg(
                    self.post_boil_volume,
                    self.mash.efficiency,
                    include_post_boil,
                    DEFAULT_STEEPING_EFFICIENCY,
                ) - 1.0
            })
            .sum::<f64>()
            + 1.0
    }

    /// Pre-boil gravity: post-boil gravity points diluted to the pre-boil
    /// volume.
    pub fn bg(&self) -> f64 {
        (self.post_boil_gravity() - 1.0) * self.post_boil_volume / self.pre_boil_volume() + 1.0
    }

    /// Expected apparent attenuation, blending yeast attenuation with the
    /// fermentability of each extract, weighted by extract amount.
    ///
    /// Fails with [`BrewError::MissingIngredient`] when there are no extracts,
    /// or when an extract defers to yeast attenuation and there is no yeast.
    pub fn attenuation(&self) -> Result<f64> {
        if self.extracts.is_empty() {
            return Err(BrewError::MissingIngredient("extract"));
        }
        let sum_kg: f64 = self.extracts.iter().map(|x| x.kg).sum();
        if sum_kg <= 0.0 {
            return Err(BrewError::InsufficientData("total extract amount is zero"));
        }
        let mut attenuation = 0.0;
        for extract in &self.extracts {
            let fermentability = match extract.fermentability {
                Some(f) if !extract.mashable => f,
                _ => {
                    self.yeast
                        .as_ref()
                        .ok_or(BrewError::MissingIngredient("yeast"))?
                        .attenuation
                }
            };
            attenuation += extract.kg / sum_kg * fermentability;
        }
        Ok(attenuation)
    }

    /// Final gravity: original gravity reduced by the expected attenuation.
    /// Unfermentable extract (zero fermentability) keeps the floor up.
    ///
    /// Fails with [`BrewError::MissingIngredient`] when there is no yeast.
    pub fn fg(&self) -> Result<f64> {
        if self.yeast.is_none() {
            return Err(BrewError::MissingIngredient("yeast"));
        }
        let og = self.og();
        Ok(og - self.attenuation()? * (og - 1.0))
    }

    /// Alcohol by volume as a percentage, derived from the OG/FG pair via
    /// real extract in degrees Plato (Balling).
    pub fn abv(&self) -> Result<f64> {
        let fg = self.fg()?;
        let original_extract = to_plato(self.og());
        let apparent_extract = to_plato(fg);
        let q = 0.22 + 0.001 * original_extract;
        let real_extract = (q * original_extract + apparent_extract) / (1.0 + q);
        let abw = (original_extract - real_extract) / (2.0665 - 0.010665 * original_extract);
        Ok(abw * fg / 0.794)
    }

    /// Bitterness in IBU, summed over all hop additions. A recipe without
    /// boil hops is simply not bitter: the result is 0, not an error.
    pub fn ibu(&self) -> Result<f64> {
        if !self.hops.iter().any(|h| h.stage == Stage::Boil) {
            return Ok(0.0);
        }
        let cooling_coefficient = self.brewhouse.cooling_coefficient()?;
        let bg = self.bg();
        let post_boil_gravity = self.post_boil_gravity();
        let mut total = 0.0;
        for hop in &self.hops {
            total += hop.ibu(
                bg,
                post_boil_gravity,
                self.post_boil_volume,
                self.brewhouse.temp_approach,
                self.pitch_temp,
                cooling_coefficient,
            )?;
        }
        Ok(total)
    }

    /// Beer color in degrees EBC using Morey's formula over the summed EMCU
    /// contributions from extracts and color-active adjuncts.
    pub fn deg_ebc(&self) -> f64 {
        let emcu: f64 = self
            .extracts
            .iter()
            .map(|x| x.emcu(self.post_boil_volume))
            .chain(self.adjuncts.iter().map(|a| a.emcu(self.post_boil_volume)))
            .sum();
        7.913 * emcu.powf(0.6859)
    }

    /// The brewing water's per-ion content: the brewhouse source water
    /// adjusted by any salt additions dissolved in the pre-boil volume.
    pub fn water_profile(&self) -> Result<WaterProfile> {
        match &self.salt_additions {
            Some(salts) => salts.profile(&self.brewhouse.water_profile, self.pre_boil_volume()),
            None => Ok(self.brewhouse.water_profile),
        }
    }
}
