use core::str::FromStr;

use cerebral_core::DomainError;

use crate::beer::Beer;

/// Availability filter taken from the `currently_available/:flag` route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    pub fn as_bool(self) -> bool {
        matches!(self, Availability::Available)
    }

    pub fn matches(self, beer: &Beer) -> bool {
        beer.is_available == self.as_bool()
    }
}

impl FromStr for Availability {
    type Err = DomainError;

    /// Only the literal strings `true` and `false` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(Availability::Available),
            "false" => Ok(Availability::Unavailable),
            other => Err(DomainError::validation(format!(
                "Availability flag must be 'true' or 'false', got '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cerebral_core::{BeerName, StyleName};
    use chrono::Utc;

    fn beer(is_available: bool) -> Beer {
        Beer {
            id: 1,
            name: BeerName::new("test"),
            description: String::new(),
            abv: "5%".to_string(),
            is_available,
            style: StyleName::new("Gose"),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn parses_literal_flags() {
        assert_eq!("true".parse::<Availability>().unwrap(), Availability::Available);
        assert_eq!("false".parse::<Availability>().unwrap(), Availability::Unavailable);
    }

    #[test]
    fn rejects_anything_else() {
        for raw in ["TRUE", "1", "yes", ""] {
            let err = raw.parse::<Availability>().unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "{raw} should be rejected");
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the two flags partition any beer set with no overlap and no omission.
            #[test]
            fn flags_partition_beers(flags in proptest::collection::vec(any::<bool>(), 0..50)) {
                let beers: Vec<Beer> = flags.iter().map(|f| beer(*f)).collect();
                let available = beers.iter().filter(|b| Availability::Available.matches(b)).count();
                let unavailable = beers.iter().filter(|b| Availability::Unavailable.matches(b)).count();
                let both = beers
                    .iter()
                    .filter(|b| Availability::Available.matches(b) && Availability::Unavailable.matches(b))
                    .count();
                prop_assert_eq!(available + unavailable, beers.len());
                prop_assert_eq!(both, 0);
            }
        }
    }
}
