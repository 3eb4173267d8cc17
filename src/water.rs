//! Brewing water chemistry

use crate::common::Stage;
use crate::error::{check_non_negative, BrewError, Result};

/// Ion content of brewing water, in parts per million.
///
/// Presets and salt conversion factors follow How to Brew (John Palmer).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WaterProfile {
    /// Ca+2 ions.
    pub ppm_calcium: f64,
    /// Na+ ions.
    pub ppm_sodium: f64,
    /// Mg+2 ions.
    pub ppm_magnesium: f64,
    /// Cl- ions.
    pub ppm_chloride: f64,
    /// Alkalinity as HCO3- ions.
    pub ppm_bicarbonate: f64,
    /// SO4-2 ions.
    pub ppm_sulfate: f64,
}

impl WaterProfile {
    /// Create a new water profile. Fails if any ion concentration is negative.
    pub fn new(
        ppm_calcium: f64,
        ppm_sodium: f64,
        ppm_magnesium: f64,
        ppm_chloride: f64,
        ppm_bicarbonate: f64,
        ppm_sulfate: f64,
    ) -> Result<Self> {
        check_non_negative("ppm_calcium", ppm_calcium)?;
        check_non_negative("ppm_sodium", ppm_sodium)?;
        check_non_negative("ppm_magnesium", ppm_magnesium)?;
        check_non_negative("ppm_chloride", ppm_chloride)?;
        check_non_negative("ppm_bicarbonate", ppm_bicarbonate)?;
        check_non_negative("ppm_sulfate", ppm_sulfate)?;
        Ok(WaterProfile {
            ppm_calcium,
            ppm_sodium,
            ppm_magnesium,
            ppm_chloride,
            ppm_bicarbonate,
            ppm_sulfate,
        })
    }

    fn preset(ca: f64, na: f64, mg: f64, cl: f64, hco3: f64, so4: f64) -> Self {
        WaterProfile {
            ppm_calcium: ca,
            ppm_sodium: na,
            ppm_magnesium: mg,
            ppm_chloride: cl,
            ppm_bicarbonate: hco3,
            ppm_sulfate: so4,
        }
    }

    /// Water similar to that of Pilsen, useful for pilseners.
    pub fn preset_pilsen() -> Self {
        Self::preset(10.0, 3.0, 3.0, 4.0, 3.0, 4.0)
    }

    /// Water similar to that of Dublin, useful for dry stouts.
    pub fn preset_dublin() -> Self {
        Self::preset(118.0, 12.0, 4.0, 19.0, 319.0, 54.0)
    }

    /// Water similar to that of Dortmund, useful for export lagers.
    pub fn preset_dortmund() -> Self {
        Self::preset(225.0, 60.0, 40.0, 60.0, 220.0, 120.0)
    }

    /// Water similar to that of Vienna, useful for Vienna lagers.
    pub fn preset_vienna() -> Self {
        Self::preset(200.0, 8.0, 60.0, 12.0, 120.0, 125.0)
    }

    /// Water similar to that of Munich, useful for oktoberfest beers.
    pub fn preset_munich() -> Self {
        Self::preset(76.0, 5.0, 18.0, 2.0, 152.0, 10.0)
    }

    /// Water similar to that of London, useful for British bitters.
    pub fn preset_london() -> Self {
        Self::preset(52.0, 86.0, 32.0, 34.0, 104.0, 32.0)
    }

    /// Water similar to that of Edinburgh, useful for Scottish ales.
    pub fn preset_edinburgh() -> Self {
        Self::preset(125.0, 55.0, 25.0, 65.0, 225.0, 140.0)
    }

    /// Water similar to that of Burton-on-Trent, useful for India pale ales.
    pub fn preset_burton() -> Self {
        Self::preset(352.0, 54.0, 24.0, 16.0, 320.0, 820.0)
    }

    /// Convert alkalinity as CaCO3 to bicarbonate content in ppm.
    pub fn alkalinity_as_caco3_to_ppm_hco3(alkalinity: f64) -> f64 {
        alkalinity * 61.0 / 50.0
    }

    /// Convert bicarbonate content in ppm to alkalinity as CaCO3.
    pub fn ppm_hco3_to_alkalinity_as_caco3(hco3: f64) -> f64 {
        hco3 * 50.0 / 61.0
    }
}

/// Brewing salt additions in grams, typically added to the mash.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaltAdditions {
    /// The stage at which the salts are added.
    pub stage: Stage,
    /// Chalk (CaCO3) addition in grams.
    pub g_caco3: f64,
    /// Sodium bicarbonate addition in grams.
    pub g_nahco3: f64,
    /// Gypsum (CaSO4) addition in grams.
    pub g_caso4: f64,
    /// Calcium chloride addition in grams.
    pub g_cacl2: f64,
    /// Epsom salt (MgSO4) addition in grams.
    pub g_mgso4: f64,
}

impl Default for SaltAdditions {
    fn default() -> Self {
        SaltAdditions {
            stage: Stage::Mash,
            g_caco3: 0.0,
            g_nahco3: 0.0,
            g_caso4: 0.0,
            g_cacl2: 0.0,
            g_mgso4: 0.0,
        }
    }
}

impl SaltAdditions {
    /// Create new salt additions, added at the mash stage. Fails if any
    /// amount is negative.
    pub fn new(g_caco3: f64, g_nahco3: f64, g_caso4: f64, g_cacl2: f64, g_mgso4: f64) -> Result<Self> {
        check_non_negative("g_caco3", g_caco3)?;
        check_non_negative("g_nahco3", g_nahco3)?;
        check_non_negative("g_caso4", g_caso4)?;
        check_non_negative("g_cacl2", g_cacl2)?;
        check_non_negative("g_mgso4", g_mgso4)?;
        Ok(SaltAdditions {
            stage: Stage::Mash,
            g_caco3,
            g_nahco3,
            g_caso4,
            g_cacl2,
            g_mgso4,
        })
    }

    /// The water profile resulting from dissolving these salts in `volume`
    /// litres of source water.
    ///
    /// A zero volume returns the source profile unchanged; a negative volume
    /// is an error. Chalk contributes bicarbonate rather than carbonate: in
    /// wort any carbonate picks up a proton, so the ppm factor is scaled by
    /// the 61/30 equivalent-weight ratio.
    pub fn profile(&self, source: &WaterProfile, volume: f64) -> Result<WaterProfile> {
        let mut profile = *source;

        if volume == 0.0 {
            return Ok(profile);
        } else if volume < 0.0 {
            return Err(BrewError::InsufficientData(
                "water volume must not be negative",
            ));
        }

        // Chalk
        profile.ppm_calcium += self.g_caco3 * 397.5 / volume;
        profile.ppm_bicarbonate += self.g_caco3 * (598.1 * 61.0 / 30.0) / volume;

        // Sodium bicarbonate
        profile.ppm_sodium += self.g_nahco3 * 283.9 / volume;
        profile.ppm_bicarbonate += self.g_nahco3 * 723.0 / volume;

        // Gypsum
        profile.ppm_calcium += self.g_caso4 * 232.8 / volume;
        profile.ppm_sulfate += self.g_caso4 * 558.0 / volume;

        // Calcium chloride
        profile.ppm_calcium += self.g_cacl2 * 272.5 / volume;
        profile.ppm_chloride += self.g_cacl2 * 480.7 / volume;

        // Epsom salt
        profile.ppm_magnesium += self.g_mgso4 * 98.4 / volume;
        profile.ppm_sulfate += self.g_mgso4 * 389.9 / volume;

        Ok(profile)
    }
}
