//! Brewhouse equipment parameters

use crate::calc;
use crate::error::{check_fraction, check_non_negative, Result};
use crate::water::WaterProfile;

/// The brewhouse: equipment and environment parameters that stay the same
/// from batch to batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Brewhouse {
    /// Evaporation rate per hour as a fraction (0.14 = 14%).
    pub boil_off_rate: f64,
    /// Lower wort temperature limit for the chilling procedure in degrees
    /// Celsius, e.g. the ground water temperature for an immersion chiller.
    pub temp_approach: f64,
    /// A wort temperature in degrees Celsius for which the cooling time from
    /// boiling is known.
    pub temp_target: f64,
    /// Time in minutes to cool the wort from boiling to `temp_target`.
    pub cool_time_boil_to_target: f64,
    /// Ion content of the source water.
    pub water_profile: WaterProfile,
}

impl Default for Brewhouse {
    fn default() -> Self {
        Brewhouse {
            boil_off_rate: 0.14,
            temp_approach: 15.0,
            temp_target: 20.0,
            cool_time_boil_to_target: 30.0,
            water_profile: WaterProfile::default(),
        }
    }
}

impl Brewhouse {
    /// Create a new brewhouse. Fails if the boil-off rate is outside [0, 1]
    /// or the cool time is negative.
    pub fn new(
        boil_off_rate: f64,
        temp_approach: f64,
        temp_target: f64,
        cool_time_boil_to_target: f64,
        water_profile: WaterProfile,
    ) -> Result<Self> {
        check_fraction("boil_off_rate", boil_off_rate)?;
        check_non_negative("cool_time_boil_to_target", cool_time_boil_to_target)?;
        Ok(Brewhouse {
            boil_off_rate,
            temp_approach,
            temp_target,
            cool_time_boil_to_target,
            water_profile,
        })
    }

    /// The Newton cooling constant of this brewhouse's chiller setup.
    pub fn cooling_coefficient(&self) -> Result<f64> {
        calc::cooling_coefficient(
            self.temp_approach,
            self.temp_target,
            self.cool_time_boil_to_target,
            100.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::assert_close;

    #[test]
    fn cooling_coefficient_matches_calc() {
        let brewhouse = Brewhouse::new(0.14, 10.0, 19.0, 45.0, WaterProfile::default()).unwrap();
        let expected = calc::cooling_coefficient(10.0, 19.0, 45.0, 100.0).unwrap();
        assert_close(expected, brewhouse.cooling_coefficient().unwrap(), 9);
    }

    #[test]
    fn cooling_coefficient_needs_reachable_target() {
        let mut brewhouse = Brewhouse::default();
        brewhouse.temp_target = brewhouse.temp_approach;
        assert!(brewhouse.cooling_coefficient().is_err());
    }

    #[test]
    fn new_validates_boil_off_rate() {
        assert!(Brewhouse::new(1.5, 15.0, 20.0, 30.0, WaterProfile::default()).is_err());
        assert!(Brewhouse::new(-0.1, 15.0, 20.0, 30.0, WaterProfile::default()).is_err());
    }
}
