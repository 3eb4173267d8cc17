//! Hop additions and bitterness formulas

use crate::calc::{celsius_to_kelvin, cool_time};
use crate::common::Stage;
use crate::error::{check_fraction, check_non_negative, Result};

/// A hop addition.
///
/// Bitterness contributions use Tinseth's utilization formula for the boil
/// plus a simplified mIBU term for isomerization that continues while the
/// wort chills after flameout.
#[derive(Debug, Clone, PartialEq)]
pub struct Hop {
    /// The stage at which the hop is added. Only boil additions contribute
    /// bitterness.
    pub stage: Stage,
    pub name: String,
    /// Amount in grams.
    pub g: f64,
    /// Boil time in minutes.
    pub time: f64,
    /// Alpha acid content as a fraction (0.14 = 14%).
    pub aa: f64,
}

impl Hop {
    /// Create a new hop addition. Fails if the amount or boil time is negative
    /// or the alpha acid fraction is outside [0, 1].
    pub fn new(stage: Stage, name: impl Into<String>, g: f64, time: f64, aa: f64) -> Result<Self> {
        check_non_negative("g", g)?;
        check_non_negative("time", time)?;
        check_fraction("aa", aa)?;
        Ok(Hop {
            stage,
            name: name.into(),
            g,
            time,
            aa,
        })
    }

    /// Alpha acid utilization during the boil, per Tinseth.
    ///
    /// `pre_boil_gravity` is the specific gravity when the boil starts and
    /// `post_boil_gravity` the gravity at flameout; Tinseth's bigness factor
    /// wants an average gravity over the whole boil.
    pub fn boil_utilization(&self, pre_boil_gravity: f64, post_boil_gravity: f64) -> f64 {
        // The bigness factor accounts for reduced utilization in heavier wort.
        let bigness_factor =
            1.65 * 0.000125f64.powf((pre_boil_gravity + post_boil_gravity) / 2.0 - 1.0);
        // The boil time factor accounts for the change in utilization over time.
        let boil_time_factor = (1.0 - (-0.04 * self.time).exp()) / 4.15;
        bigness_factor * boil_time_factor
    }

    /// Alpha acid utilization after flameout, while the wort cools from
    /// boiling down to `temp_target` (simplified mIBU).
    ///
    /// `temp_approach` is the temperature the wort approaches during chilling
    /// (e.g. ground water temperature for an immersion chiller) and
    /// `cooling_coefficient` the Newton cooling constant of the chiller setup.
    pub fn post_boil_utilization(
        &self,
        pre_boil_gravity: f64,
        post_boil_gravity: f64,
        temp_approach: f64,
        temp_target: f64,
        cooling_coefficient: f64,
    ) -> Result<f64> {
        // Integrate the Tinseth utilization derivative over the chill period,
        // scaled by a temperature-dependent degree of utilization.
        const INTEGRATION_TIME: f64 = 0.001;
        let sg = (pre_boil_gravity + post_boil_gravity) / 2.0;
        let ct = cool_time(temp_approach, temp_target, cooling_coefficient, 100.0)?;
        let mut utilization = 0.0;
        let mut t = self.time;
        while t < self.time + ct {
            let du = -1.65 * 0.000125f64.powf(sg - 1.0) * -0.04 * (-0.04 * t).exp() / 4.15;
            let temp_kelvin = celsius_to_kelvin(
                (100.0 - temp_approach) * (-1.0 * cooling_coefficient * (t - self.time)).exp()
                    + temp_approach,
            );
            let mut degree_of_utilization = 2.39e11 * (-9773.0 / temp_kelvin).exp();
            if t < 5.0 {
                degree_of_utilization = 1.0; // account for nonIAA components
            }
            utilization += du * degree_of_utilization * INTEGRATION_TIME;
            t += INTEGRATION_TIME;
        }
        Ok(utilization)
    }

    /// Bitterness contribution in IBU.
    ///
    /// `volume` is the post-boil volume in litres. Mash hopping and dry
    /// hopping contribute no bitterness, at least not predictably, so stages
    /// other than the boil yield 0.
    pub fn ibu(
        &self,
        pre_boil_gravity: f64,
        post_boil_gravity: f64,
        volume: f64,
        temp_approach: f64,
        temp_target: f64,
        cooling_coefficient: f64,
    ) -> Result<f64> {
        if self.stage != Stage::Boil {
            return Ok(0.0);
        }
        // IBU = D * U              (D is density of alpha acids in mg/l)
        //       D = AA * 1000m / V (m in grams, V in litres)
        //       U = Ub + Up        (boil utilization plus post-boil utilization)
        let u_b = self.boil_utilization(pre_boil_gravity, post_boil_gravity);
        let u_p = self.post_boil_utilization(
            pre_boil_gravity,
            post_boil_gravity,
            temp_approach,
            temp_target,
            cooling_coefficient,
        )?;
        Ok((u_b + u_p) * self.aa * 1000.0 * self.g / volume)
    }
}
