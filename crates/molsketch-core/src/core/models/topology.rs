use super::ids::AtomId;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BondOrder {
    #[default]
    Single = 1,
    Double = 2,
    Triple = 3,
}

impl BondOrder {
    pub fn order(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Error)]
#[error("Invalid bond order string")]
pub struct ParseBondOrderError;

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "s" | "single" => Ok(Self::Single),
            "2" | "d" | "double" => Ok(Self::Double),
            "3" | "t" | "triple" => Ok(Self::Triple),
            _ => Err(ParseBondOrderError),
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Single => "Single",
                Self::Double => "Double",
                Self::Triple => "Triple",
            }
        )
    }
}

/// One half of a bond, stored in a slot of the atom that owns it.
///
/// Every bond exists twice, once in each endpoint, each copy pointing at the
/// other endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub target: AtomId, // The atom at the other end
    pub order: BondOrder,
}

impl Bond {
    pub fn new(target: AtomId, order: BondOrder) -> Self {
        Self { target, order }
    }

    pub fn single(target: AtomId) -> Self {
        Self::new(target, BondOrder::Single)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bond_order_from_str_parses_valid_strings() {
        assert_eq!("1".parse::<BondOrder>().unwrap(), BondOrder::Single);
        assert_eq!("single".parse::<BondOrder>().unwrap(), BondOrder::Single);
        assert_eq!("S".parse::<BondOrder>().unwrap(), BondOrder::Single);
        assert_eq!("2".parse::<BondOrder>().unwrap(), BondOrder::Double);
        assert_eq!("Double".parse::<BondOrder>().unwrap(), BondOrder::Double);
        assert_eq!("t".parse::<BondOrder>().unwrap(), BondOrder::Triple);
    }

    #[test]
    fn bond_order_from_str_rejects_invalid_strings() {
        assert!("".parse::<BondOrder>().is_err());
        assert!("aromatic".parse::<BondOrder>().is_err());
        assert!("4".parse::<BondOrder>().is_err());
    }

    #[test]
    fn bond_order_numeric_value_matches_multiplicity() {
        assert_eq!(BondOrder::Single.order(), 1);
        assert_eq!(BondOrder::Double.order(), 2);
        assert_eq!(BondOrder::Triple.order(), 3);
        assert_eq!(BondOrder::default(), BondOrder::Single);
    }

    #[test]
    fn bond_order_display_outputs_expected_strings() {
        assert_eq!(BondOrder::Single.to_string(), "Single");
        assert_eq!(BondOrder::Triple.to_string(), "Triple");
    }

    #[test]
    fn single_bond_points_at_target() {
        let bond = Bond::single(AtomId::new(4));
        assert_eq!(bond.target, AtomId::new(4));
        assert_eq!(bond.order, BondOrder::Single);
    }
}
