//! Shared brewing vocabulary

/// The stage of the brew at which an ingredient is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Mash,
    Boil,
    Ferment,
    Condition,
}

/// Top-level beer family, mainly relevant for yeast pitch rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeerFamily {
    Ale,
    Lager,
    Hybrid,
}

/// Common beer styles, each belonging to a [`BeerFamily`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeerStyle {
    Ale,
    PaleAle,
    BelgianAle,
    SourAle,
    WheatBeer,
    BrownAle,
    Porter,
    Stout,
    Lager,
    PaleLager,
    DarkLager,
    Bock,
    Hybrid,
}

impl BeerStyle {
    /// The beer family that the style belongs to.
    pub fn family(self) -> BeerFamily {
        match self {
            BeerStyle::Ale
            | BeerStyle::PaleAle
            | BeerStyle::BelgianAle
            | BeerStyle::SourAle
            | BeerStyle::WheatBeer
            | BeerStyle::BrownAle
            | BeerStyle::Porter
            | BeerStyle::Stout => BeerFamily::Ale,
            BeerStyle::Lager | BeerStyle::PaleLager | BeerStyle::DarkLager | BeerStyle::Bock => {
                BeerFamily::Lager
            }
            BeerStyle::Hybrid => BeerFamily::Hybrid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_families() {
        assert_eq!(BeerFamily::Ale, BeerStyle::Stout.family());
        assert_eq!(BeerFamily::Ale, BeerStyle::WheatBeer.family());
        assert_eq!(BeerFamily::Lager, BeerStyle::Bock.family());
        assert_eq!(BeerFamily::Lager, BeerStyle::PaleLager.family());
        assert_eq!(BeerFamily::Hybrid, BeerStyle::Hybrid.family());
    }
}
