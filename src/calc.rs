//! Unit conversions and standalone brewing formulas

use crate::error::{BrewError, Result};

/// Convert from degrees Celsius to degrees Kelvin.
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + 273.15
}

/// Convert from degrees Kelvin to degrees Celsius.
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}

/// Convert from degrees Celsius to degrees Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

/// Convert from degrees Fahrenheit to degrees Celsius.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Convert specific gravity to degrees Plato.
pub fn to_plato(sg: f64) -> f64 {
    -668.962 + 1262.45 * sg - 776.43 * sg.powi(2) + 182.94 * sg.powi(3)
}

/// Convert from bar to psi.
pub fn to_psi(bar: f64) -> f64 {
    bar / 0.06894757293168
}

/// Convert from psi to bar.
pub fn to_bar(psi: f64) -> f64 {
    psi * 0.06894757293168
}

/// Convert from litres to US gallons.
pub fn to_gallons(litres: f64) -> f64 {
    litres / 3.785411784
}

/// Convert from US gallons to litres.
pub fn to_litres(gallons: f64) -> f64 {
    gallons * 3.785411784
}

/// Calculate the cooling constant for a liquid. The constant can be used to get
/// the temperature at any time with Newton's formula:
///
/// ```text
/// T_t = T_s + (T_0 - T_s) * e^(-t * k)
/// ```
///
/// Where T_t is temperature at time t (minutes after cooling started), T_s is
/// the surrounding temperature and T_0 the initial temperature.
///
/// `temp_surround` is the temperature the wort approaches (e.g. ground water
/// temperature for an immersion chiller), `temp_target` a temperature known to
/// be reached after `time` minutes when starting from `temp_init`.
pub fn cooling_coefficient(
    temp_surround: f64,
    temp_target: f64,
    time: f64,
    temp_init: f64,
) -> Result<f64> {
    if temp_target <= temp_surround {
        return Err(BrewError::InsufficientData(
            "target temperature must be above the surrounding temperature",
        ));
    }
    if time <= 0.0 {
        return Err(BrewError::InsufficientData("cool time must be positive"));
    }
    // Solve Newton's formula for k:
    // (T_t - T_s) / (T_0 - T_s) = e^(-t * k)
    // ln((T_t - T_s) / (T_0 - T_s)) = -t * k
    Ok((1.0 / -time) * ((temp_target - temp_surround) / (temp_init - temp_surround)).ln())
}

/// Calculate the time in minutes it takes for a liquid to cool from `temp_init`
/// to `temp_target`, given a cooling constant from [`cooling_coefficient`].
pub fn cool_time(
    temp_surround: f64,
    temp_target: f64,
    cooling_coefficient: f64,
    temp_init: f64,
) -> Result<f64> {
    if temp_target <= temp_surround {
        return Err(BrewError::InsufficientData(
            "target temperature must be above the surrounding temperature",
        ));
    }
    // Newton's formula solved for t instead of k.
    Ok(-1.0 * ((temp_target - temp_surround) / (temp_init - temp_surround)).ln()
        / cooling_coefficient)
}

/// Compute hourly boil-off rate from measured pre- and post-boil volumes in
/// litres and boil time in minutes. Returns the evaporation rate per hour as a
/// decimal number (e.g. 0.15 = 15%).
pub fn boil_off_rate(pre_boil_volume: f64, post_boil_volume: f64, boil_time: f64) -> f64 {
    1.0 - (post_boil_volume / pre_boil_volume).powf(1.0 / (boil_time / 60.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::assert_close;

    #[test]
    fn temperature_conversions() {
        assert_close(293.15, celsius_to_kelvin(20.0), 6);
        assert_close(26.85, kelvin_to_celsius(300.0), 6);
        assert_close(50.0, celsius_to_fahrenheit(10.0), 6);
        assert_close(10.0, fahrenheit_to_celsius(50.0), 6);
    }

    #[test]
    fn plato_conversion() {
        assert_close(11.89749826, to_plato(1.048), 6);
        assert_close(17.03415942, to_plato(1.070), 6);
    }

    #[test]
    fn pressure_conversions() {
        assert_close(10.1526416, to_psi(0.7), 6);
        assert_close(0.5515808, to_bar(8.0), 6);
    }

    #[test]
    fn volume_conversions() {
        assert_close(5.0, to_gallons(18.92705892), 6);
        assert_close(18.92705892, to_litres(5.0), 6);
        assert_close(1.0, to_gallons(to_litres(1.0)), 9);
    }

    #[test]
    fn cooling_round_trip() {
        // Ground water at 7C, known to reach 20C after 40 min from boiling.
        let k = cooling_coefficient(7.0, 20.0, 40.0, 100.0).unwrap();
        let t = cool_time(7.0, 20.0, k, 100.0).unwrap();
        assert_close(40.0, t, 9);
    }

    #[test]
    fn cooling_rejects_unreachable_target() {
        assert!(cooling_coefficient(20.0, 15.0, 30.0, 100.0).is_err());
        assert!(cooling_coefficient(20.0, 20.0, 30.0, 100.0).is_err());
        assert!(cool_time(20.0, 15.0, 0.05, 100.0).is_err());
    }

    #[test]
    fn boil_off_rate_from_measurements() {
        // 28.46 l down to 22.7 l over a 90 minute boil is 14%/h.
        let rate = boil_off_rate(28.4628366478, 22.7, 90.0);
        assert_close(0.14, rate, 9);
    }
}
