//! Yeast and pitch rate calculations

use crate::calc::to_plato;
use crate::common::{BeerFamily, BeerStyle, Stage};
use crate::error::{check_fraction, Result};

/// A yeast strain.
#[derive(Debug, Clone, PartialEq)]
pub struct Yeast {
    /// The stage at which the yeast is pitched. Normally [`Stage::Ferment`].
    pub stage: Stage,
    pub name: String,
    /// Optional description of the yeast (type, reused etc).
    pub description: String,
    /// Expected attenuation as a fraction (0.75 = 75%).
    pub attenuation: f64,
}

impl Yeast {
    /// Create a new yeast pitched at the ferment stage. Fails if attenuation
    /// is outside [0, 1].
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        attenuation: f64,
    ) -> Result<Self> {
        check_fraction("attenuation", attenuation)?;
        Ok(Yeast {
            stage: Stage::Ferment,
            name: name.into(),
            description: description.into(),
            attenuation,
        })
    }

    /// Number of yeast cells to pitch into `volume` litres of wort.
    ///
    /// Rule of thumb is 1 million cells per ml of wort per degree Plato,
    /// scaled by beer family and gravity. Pass a rate in
    /// `million_cells_per_ml_per_deg_plato` to override the family/gravity
    /// lookup.
    pub fn cells_to_pitch(
        volume: f64,
        style: BeerStyle,
        gravity: f64,
        million_cells_per_ml_per_deg_plato: Option<f64>,
    ) -> u64 {
        let rate_factor = match million_cells_per_ml_per_deg_plato {
            Some(rate) => rate,
            None => match style.family() {
                BeerFamily::Ale => {
                    if gravity <= 1.060 {
                        0.75
                    } else {
                        1.0
                    }
                }
                BeerFamily::Lager => {
                    if gravity <= 1.060 {
                        1.5
                    } else {
                        2.0
                    }
                }
                BeerFamily::Hybrid => {
                    if gravity <= 1.060 {
                        1.0
                    } else {
                        1.5
                    }
                }
            },
        };
        let ml_of_wort = volume * 1000.0;
        let deg_plato = to_plato(gravity);
        (1_000_000.0 * rate_factor * ml_of_wort * deg_plato).round() as u64
    }

    /// Grams of dry yeast holding `number_of_cells` viable cells.
    /// Manufacturers quote around 20 billion cells per gram.
    pub fn grams_of_dry_yeast(number_of_cells: u64, billion_cells_per_gram: f64) -> f64 {
        number_of_cells as f64 / (billion_cells_per_gram * 1e9)
    }

    /// Number of liquid yeast packs needed, accounting for viability decay
    /// since the manufacturing date.
    pub fn packets_of_liquid_yeast(
        number_of_cells: u64,
        days_since_mfg_date: f64,
        billion_cells_per_package: f64,
    ) -> f64 {
        let viable_cells =
            Yeast::cells_in_liquid_yeast_package(days_since_mfg_date, billion_cells_per_package);
        number_of_cells as f64 / viable_cells as f64
    }

    /// Litres of harvested yeast slurry holding `number_of_cells`, at about
    /// 1 billion cells per ml.
    pub fn litres_of_slurry(number_of_cells: u64, billion_cells_per_ml: f64) -> f64 {
        number_of_cells as f64 / (1000.0 * billion_cells_per_ml * 1e9)
    }

    /// Viable cells left in a liquid yeast package after
    /// `days_since_mfg_date` days.
    pub fn cells_in_liquid_yeast_package(
        days_since_mfg_date: f64,
        billion_cells_per_package: f64,
    ) -> u64 {
        // Viability decays to 96% at packaging and then by a factor 0.785 per
        // month. This follows the Beersmith model, which avoids the artificial
        // 10% floor some calculators use.
        let months = days_since_mfg_date / 30.0;
        let viability = 0.96 * 0.785f64.powf(months);
        (viability * billion_cells_per_package * 1e9).round() as u64
    }

    /// Expected number of cells in a finished yeast starter.
    ///
    /// `volume` is the starter volume in litres. The growth data comes from
    /// starters at 1.036 and 21C; there are no data points below an
    /// inoculation rate of 5 so growth is capped at a factor of 6.
    pub fn starter(volume: f64, billion_cells_inoculated: f64) -> u64 {
        let rate = billion_cells_inoculated / volume;
        // (inoculation rate in million cells/ml, growth factor), from Yeast,
        // The practical guide to beer fermentation (White, Zainasheff).
        let yield_table: [(f64, f64); 11] = [
            (0.0, 6.0),
            (100.0 / 20.0, 600.0 / 100.0),
            (100.0 / 8.0, 400.0 / 100.0),
            (100.0 / 4.0, 276.0 / 100.0),
            (100.0 / 2.0, 205.0 / 100.0),
            (100.0 / 1.5, 181.0 / 100.0),
            (100.0 / 1.0, 152.0 / 100.0),
            (100.0 / 0.8, 138.0 / 100.0),
            (100.0 / 0.5, 112.0 / 100.0),
            (100.0 / 0.25, 1.0),
            (f64::INFINITY, 1.0),
        ];
        let mut growth_factor = 1.0;
        for window in yield_table.windows(2) {
            let (rate_lo, growth_lo) = window[0];
            let (rate_hi, growth_hi) = window[1];
            if rate >= rate_lo && rate < rate_hi {
                // Simple linear interpolation between data points.
                growth_factor =
                    (rate - rate_lo) * (growth_hi - growth_lo) / (rate_hi - rate_lo) + growth_lo;
                break;
            }
        }
        (growth_factor * billion_cells_inoculated * 1e9).round() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::assert_close;

    #[test]
    fn new_validates_attenuation() {
        assert!(Yeast::new("WLP565", "", 0.75).is_ok());
        assert!(Yeast::new("WLP565", "", 1.2).is_err());
        assert!(Yeast::new("WLP565", "", -0.1).is_err());
    }

    #[test]
    fn yeast_pitches_at_ferment_stage() {
        let yeast = Yeast::new("WLP565", "Saison", 0.75).unwrap();
        assert_eq!(Stage::Ferment, yeast.stage);
        assert_close(0.75, yeast.attenuation, 9);
    }

    #[test]
    fn cells_to_pitch_by_family_and_gravity() {
        let expected = (1_000_000.0 * 0.75 * 20_000.0 * to_plato(1.060)).round() as u64;
        assert_eq!(
            expected,
            Yeast::cells_to_pitch(20.0, BeerStyle::PaleAle, 1.060, None)
        );
        let expected = (1_000_000.0 * 1.5 * 20_000.0 * to_plato(1.060)).round() as u64;
        assert_eq!(
            expected,
            Yeast::cells_to_pitch(20.0, BeerStyle::PaleLager, 1.060, None)
        );
        let expected = (1_000_000.0 * 1.0 * 20_000.0 * to_plato(1.061)).round() as u64;
        assert_eq!(
            expected,
            Yeast::cells_to_pitch(20.0, BeerStyle::PaleAle, 1.061, None)
        );
        let expected = (1_000_000.0 * 2.0 * 20_000.0 * to_plato(1.061)).round() as u64;
        assert_eq!(
            expected,
            Yeast::cells_to_pitch(20.0, BeerStyle::PaleLager, 1.061, None)
        );
        let expected = (1_000_000.0 * 0.8 * 20_000.0 * to_plato(1.061)).round() as u64;
        assert_eq!(
            expected,
            Yeast::cells_to_pitch(20.0, BeerStyle::PaleLager, 1.061, Some(0.8))
        );
    }

    #[test]
    fn dry_yeast_and_slurry_amounts() {
        assert_close(2.5, Yeast::grams_of_dry_yeast(50_000_000_000, 20.0), 6);
        assert_close(5.0, Yeast::grams_of_dry_yeast(50_000_000_000, 10.0), 6);
        assert_close(0.15, Yeast::litres_of_slurry(150_000_000_000, 1.0), 6);
    }

    #[test]
    fn liquid_yeast_viability_decay() {
        // Fresh package: 96% viability.
        let fresh = Yeast::cells_in_liquid_yeast_package(0.0, 100.0);
        assert_eq!((0.96f64 * 100.0 * 1e9).round() as u64, fresh);
        // One month old: 96% * 78.5%.
        let month_old = Yeast::cells_in_liquid_yeast_package(30.0, 100.0);
        assert_eq!((0.96f64 * 0.785 * 100.0 * 1e9).round() as u64, month_old);
        assert!(month_old < fresh);
    }

    #[test]
    fn packets_of_liquid_yeast_scales_with_age() {
        let viability = 0.96 * 0.785f64.powf(1.0);
        let expected = 150.0 / (100.0 * viability);
        let actual = Yeast::packets_of_liquid_yeast(150_000_000_000, 30.0, 100.0);
        assert_close(expected, actual, 6);
    }

    #[test]
    fn starter_growth_interpolation() {
        // Inoculation rate 100/2 = 50 sits exactly on a table row: growth 2.05.
        let cells = Yeast::starter(2.0, 100.0);
        assert_eq!((2.05f64 * 100.0 * 1e9).round() as u64, cells);
        // Rates below the lowest data point are capped at growth factor 6.
        let cells = Yeast::starter(100.0, 100.0);
        assert!(cells <= (6.0f64 * 100.0 * 1e9).round() as u64);
        // Huge inoculation rates grow nothing.
        let cells = Yeast::starter(0.1, 100.0);
        assert_eq!((100.0f64 * 1e9) as u64, cells);
    }
}
