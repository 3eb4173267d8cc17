//! Mash schedule and infusion water arithmetic

use crate::error::{check_fraction, check_non_negative, BrewError, Result};

/// Heat capacity of water in Joules per gram per degree Celsius.
const WATER_HEAT_CAPACITY: f64 = 4.2;

/// A temperature, or a temperature change, held over a period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureStep {
    /// Temperature at the start of the period in degrees Celsius.
    pub temp_init: f64,
    /// Temperature at the end of the period in degrees Celsius.
    pub temp_final: f64,
    /// Length of the period in minutes.
    pub time: f64,
}

impl TemperatureStep {
    /// A step held at a constant temperature.
    pub fn rest(temp: f64, time: f64) -> Self {
        TemperatureStep {
            temp_init: temp,
            temp_final: temp,
            time,
        }
    }
}

/// The mash: temperature steps plus the thermal and volumetric properties of
/// the grist needed for strike and infusion water calculations.
///
/// The water volume formulas follow How to Brew (John Palmer); the default
/// grist heat capacity of 1.722 J/g/degC reproduces Palmer's 0.41 ratio
/// against water.
#[derive(Debug, Clone, PartialEq)]
pub struct Mash {
    /// Mash steps, in order. Step temperatures drive the infusion math.
    pub steps: Vec<TemperatureStep>,
    /// Mash efficiency as a fraction (0.8 = 80%).
    pub efficiency: f64,
    /// Mash thickness for the first step, litres of water per kg of grist.
    pub liquor_to_grist_ratio: f64,
    /// Water absorption capacity of the grain in litres per kg.
    pub absorption: f64,
    /// Heat capacity of grist in Joules per gram per degree Celsius.
    pub grist_heat_capacity: f64,
    /// Grain displacement factor in litres per kg.
    pub displacement: f64,
}

impl Default for Mash {
    fn default() -> Self {
        Mash {
            steps: Vec::new(),
            efficiency: 0.75,
            liquor_to_grist_ratio: 3.0,
            absorption: 1.0,
            grist_heat_capacity: 1.722,
            displacement: 0.67,
        }
    }
}

impl Mash {
    /// Create a mash with the given steps and efficiency and default
    /// thickness, absorption, heat capacity and displacement. Fails if
    /// efficiency is outside [0, 1].
    pub fn new(steps: Vec<TemperatureStep>, efficiency: f64) -> Result<Self> {
        check_fraction("efficiency", efficiency)?;
        for step in &steps {
            check_non_negative("time", step.time)?;
        }
        Ok(Mash {
            steps,
            efficiency,
            ..Mash::default()
        })
    }

    /// Strike water in litres needed to hit the liquor-to-grist ratio for the
    /// first step, given grist weight in kg.
    pub fn strike_volume(&self, grist_weight: f64) -> f64 {
        self.liquor_to_grist_ratio * grist_weight
    }

    /// Total water in litres needed to drain `wort_volume` litres from the
    /// mash, accounting for grain absorption.
    ///
    /// For batch sparging the sparge volume is total volume minus strike
    /// volume. For the no-sparge method this is the strike volume.
    pub fn total_volume(&self, grist_weight: f64, wort_volume: f64) -> f64 {
        wort_volume + grist_weight * self.absorption
    }

    /// Strike water temperature needed to land the first step's initial
    /// temperature, given grist at `grist_temp` degrees Celsius.
    pub fn strike_temp(&self, grist_temp: f64, grist_weight: f64, strike_volume: f64) -> Result<f64> {
        let target = self
            .steps
            .first()
            .ok_or(BrewError::InsufficientData("mash has no steps"))?
            .temp_init;
        Ok((target - grist_temp) * self.hc_ratio() * grist_weight / strike_volume + target)
    }

    /// Boiling (or `water_temp` degree) water in litres needed to raise the
    /// mash from the final temperature of step `step - 1` to the initial
    /// temperature of step `step` (1-based; step 0 is the strike itself).
    ///
    /// When `mash_temp` or `liquor_volume` is `None` they default to the
    /// previous step's final temperature and the sum of strike and earlier
    /// infusion volumes. Measured values give better estimates.
    pub fn infusion_volume(
        &self,
        step: usize,
        grist_weight: f64,
        strike_volume: f64,
        mash_temp: Option<f64>,
        liquor_volume: Option<f64>,
        water_temp: f64,
    ) -> Result<f64> {
        if step < 1 || step >= self.steps.len() {
            return Err(BrewError::InsufficientData("mash step index out of range"));
        }
        let temp_init = mash_temp.unwrap_or(self.steps[step - 1].temp_final);
        let liquor_volume = match liquor_volume {
            Some(v) => v,
            None => {
                let mut v = strike_volume;
                for s in 1..step {
                    v += self.infusion_volume(s, grist_weight, strike_volume, None, None, water_temp)?;
                }
                v
            }
        };
        Ok(self.adjustment_volume(
            grist_weight,
            temp_init,
            self.steps[step].temp_init,
            liquor_volume,
            water_temp,
        ))
    }

    /// Water in litres at `water_temp` needed to move the mash from
    /// `mash_temp` to `target_temp`.
    pub fn adjustment_volume(
        &self,
        grist_weight: f64,
        mash_temp: f64,
        target_temp: f64,
        mash_volume: f64,
        water_temp: f64,
    ) -> f64 {
        (target_temp - mash_temp) * (self.hc_ratio() * grist_weight + mash_volume)
            / (water_temp - target_temp)
    }

    /// Amount of water in the mash in litres, accounting for grain
    /// displacement, given the total mash volume.
    pub fn liquor_volume(&self, grist_weight: f64, mash_volume: f64) -> f64 {
        mash_volume - grist_weight * self.displacement
    }

    /// Mash tun size in litres needed to fit grain and water.
    pub fn required_space(&self, grist_weight: f64, liquor_volume: f64) -> f64 {
        liquor_volume + grist_weight * self.displacement
    }

    /// Heat capacity of grist relative to water.
    fn hc_ratio(&self) -> f64 {
        self.grist_heat_capacity / WATER_HEAT_CAPACITY
    }
}
