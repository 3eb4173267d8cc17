//! Recipe calculator for all-grain and extract brewing.
//!
//! Ingredients ([`Extract`], [`Hop`], [`Yeast`], [`Adjunct`], [`Co2`]) carry
//! their own contribution formulas; a [`Recipe`] combines them with the
//! [`Brewhouse`] and [`Mash`] parameters into batch-level metrics: gravities,
//! alcohol, bitterness, color and water chemistry. All units are metric
//! (litres, kilograms, degrees Celsius), with conversion helpers in [`calc`].
//!
//! ```
//! use brew_calculator::{Brewhouse, Extract, Mash, Recipe, Stage, Yeast};
//!
//! # fn main() -> brew_calculator::Result<()> {
//! let extract = Extract::new(Stage::Mash, "Pale malt", "", 5.0, 300.0, 5.0, None, true)?;
//! let yeast = Yeast::new("US-05", "", 0.75)?;
//! let recipe = Recipe::new(
//!     "House pale",
//!     Brewhouse::default(),
//!     vec![extract],
//!     Vec::new(),
//!     Some(yeast),
//!     None,
//!     Vec::new(),
//!     Mash::new(Vec::new(), 0.75)?,
//!     60.0,
//!     23.0,
//!     20.0,
//! )?;
//! assert!(recipe.og() > 1.040);
//! assert!(recipe.fg()? < recipe.og());
//! # Ok(())
//! # }
//! ```

pub mod adjunct;
pub mod brewhouse;
pub mod calc;
pub mod co2;
pub mod common;
pub mod error;
pub mod extract;
pub mod hop;
pub mod mash;
pub mod recipe;
pub mod water;
pub mod yeast;

pub use adjunct::Adjunct;
pub use brewhouse::Brewhouse;
pub use co2::Co2;
pub use common::{BeerFamily, BeerStyle, Stage};
pub use error::{BrewError, Result};
pub use extract::{Extract, Fermentable, DEFAULT_STEEPING_EFFICIENCY};
pub use hop::Hop;
pub use mash::{Mash, TemperatureStep};
pub use recipe::Recipe;
pub use water::{SaltAdditions, WaterProfile};
pub use yeast::Yeast;

#[cfg(test)]
pub(crate) mod test_util {
    /// Assert two floats are equal when rounded to `places` decimal places.
    pub fn assert_close(expected: f64, actual: f64, places: i32) {
        let tolerance = 0.5 * 10f64.powi(-places);
        assert!(
            (expected - actual).abs() < tolerance,
            "expected {expected} but got {actual} (tolerance {tolerance})"
        );
    }
}
