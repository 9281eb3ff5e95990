//! Bond-direction geometry for 2D sketching.
//!
//! Directions are six fixed placements around a clock face (12, 2, 4, 6, 8 and
//! 10 o'clock) in screen coordinates, where +x points right and +y points down.
//! The non-vertical directions sit `π/6` above or below the horizontal axis.

use crate::core::models::error::ModelError;
use nalgebra::Vector2;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_6};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BondDirection {
    Twelve = 0,
    Two = 1,
    Four = 2,
    Six = 3,
    Eight = 4,
    Ten = 5,
}

impl BondDirection {
    pub const ALL: [BondDirection; 6] = [
        BondDirection::Twelve,
        BondDirection::Two,
        BondDirection::Four,
        BondDirection::Six,
        BondDirection::Eight,
        BondDirection::Ten,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    /// The direction pointing the other way (`code + 3 mod 6`).
    pub fn opposite(self) -> Self {
        Self::ALL[usize::from((self.code() + 3) % 6)]
    }

    pub fn orientation_class(self) -> OrientationClass {
        if self.code() % 2 == 0 {
            OrientationClass::Splayed
        } else {
            OrientationClass::Inverted
        }
    }

    /// Maps modifier-key state to a placement: ctrl-click draws up and to the
    /// right, a plain click draws down and to the right.
    pub fn from_modifiers(ctrl: bool) -> Self {
        if ctrl {
            BondDirection::Two
        } else {
            BondDirection::Four
        }
    }
}

impl TryFrom<u8> for BondDirection {
    type Error = ModelError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(ModelError::InvalidDirectionCode(code))
    }
}

impl From<BondDirection> for u8 {
    fn from(direction: BondDirection) -> Self {
        direction.code()
    }
}

impl fmt::Display for BondDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = match self {
            Self::Twelve => 12,
            Self::Two => 2,
            Self::Four => 4,
            Self::Six => 6,
            Self::Eight => 8,
            Self::Ten => 10,
        };
        write!(f, "{hour} o'clock")
    }
}

/// Which tripod of directions an atom offers once its first bond is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OrientationClass {
    /// 12, 4 and 8 o'clock.
    Splayed = 0,
    /// 2, 6 and 10 o'clock.
    Inverted = 1,
}

impl OrientationClass {
    pub fn parity(self) -> u8 {
        self as u8
    }
}

pub fn direction_vector(direction: BondDirection, length: f64) -> Vector2<f64> {
    match direction {
        BondDirection::Twelve => Vector2::new(0.0, -length * FRAC_PI_2.sin()),
        BondDirection::Two => Vector2::new(length * FRAC_PI_6.cos(), -length * FRAC_PI_6.sin()),
        BondDirection::Four => Vector2::new(length * FRAC_PI_6.cos(), length * FRAC_PI_6.sin()),
        BondDirection::Six | BondDirection::Eight | BondDirection::Ten => {
            -direction_vector(direction.opposite(), length)
        }
    }
}

pub fn candidate_directions(class: OrientationClass) -> [BondDirection; 3] {
    match class {
        OrientationClass::Splayed => [
            BondDirection::Twelve,
            BondDirection::Four,
            BondDirection::Eight,
        ],
        OrientationClass::Inverted => [BondDirection::Two, BondDirection::Six, BondDirection::Ten],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const EPS: f64 = 1e-12;

    fn assert_vec_close(actual: Vector2<f64>, expected: Vector2<f64>) {
        assert!(
            (actual - expected).norm() < EPS,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    mod directions {
        use super::*;

        #[test]
        fn codes_round_trip_through_u8() {
            for code in 0u8..6 {
                let direction = BondDirection::try_from(code).unwrap();
                assert_eq!(u8::from(direction), code);
            }
        }

        #[test]
        fn out_of_range_code_is_rejected() {
            assert_eq!(
                BondDirection::try_from(6u8),
                Err(ModelError::InvalidDirectionCode(6))
            );
            assert_eq!(
                BondDirection::try_from(255u8),
                Err(ModelError::InvalidDirectionCode(255))
            );
        }

        #[test]
        fn opposite_adds_three_modulo_six() {
            assert_eq!(BondDirection::Twelve.opposite(), BondDirection::Six);
            assert_eq!(BondDirection::Two.opposite(), BondDirection::Eight);
            assert_eq!(BondDirection::Four.opposite(), BondDirection::Ten);
            assert_eq!(BondDirection::Ten.opposite(), BondDirection::Four);
            for direction in BondDirection::ALL {
                assert_eq!(direction.opposite().opposite(), direction);
            }
        }

        #[test]
        fn opposite_directions_have_opposite_parity() {
            for direction in BondDirection::ALL {
                assert_ne!(
                    direction.orientation_class(),
                    direction.opposite().orientation_class()
                );
            }
        }

        #[test]
        fn modifier_keys_select_up_or_down_placement() {
            assert_eq!(BondDirection::from_modifiers(true), BondDirection::Two);
            assert_eq!(BondDirection::from_modifiers(false), BondDirection::Four);
        }

        #[test]
        fn display_uses_clock_positions() {
            assert_eq!(BondDirection::Twelve.to_string(), "12 o'clock");
            assert_eq!(BondDirection::Eight.to_string(), "8 o'clock");
        }
    }

    mod vectors {
        use super::*;

        #[test]
        fn vertical_directions_point_straight_up_and_down() {
            assert_vec_close(
                direction_vector(BondDirection::Twelve, 40.0),
                Vector2::new(0.0, -40.0),
            );
            assert_vec_close(
                direction_vector(BondDirection::Six, 40.0),
                Vector2::new(0.0, 40.0),
            );
        }

        #[test]
        fn diagonal_directions_sit_thirty_degrees_off_horizontal() {
            let dx = 40.0 * 3f64.sqrt() / 2.0;
            assert_vec_close(
                direction_vector(BondDirection::Two, 40.0),
                Vector2::new(dx, -20.0),
            );
            assert_vec_close(
                direction_vector(BondDirection::Four, 40.0),
                Vector2::new(dx, 20.0),
            );
            assert_vec_close(
                direction_vector(BondDirection::Eight, 40.0),
                Vector2::new(-dx, 20.0),
            );
            assert_vec_close(
                direction_vector(BondDirection::Ten, 40.0),
                Vector2::new(-dx, -20.0),
            );
        }

        #[test]
        fn opposite_codes_are_exact_negations() {
            for code in 0u8..3 {
                let direction = BondDirection::try_from(code).unwrap();
                let inverse = BondDirection::try_from(code + 3).unwrap();
                assert_eq!(
                    direction_vector(inverse, 37.5),
                    -direction_vector(direction, 37.5)
                );
            }
        }

        #[test]
        fn vector_length_matches_requested_length() {
            for direction in BondDirection::ALL {
                let v = direction_vector(direction, 12.0);
                assert!((v.norm() - 12.0).abs() < EPS);
            }
        }

        #[test]
        fn results_are_deterministic() {
            for direction in BondDirection::ALL {
                assert_eq!(
                    direction_vector(direction, 40.0),
                    direction_vector(direction, 40.0)
                );
            }
        }
    }

    mod candidates {
        use super::*;

        #[test]
        fn classes_select_even_and_odd_codes() {
            let splayed: Vec<u8> = candidate_directions(OrientationClass::Splayed)
                .iter()
                .map(|d| d.code())
                .collect();
            let inverted: Vec<u8> = candidate_directions(OrientationClass::Inverted)
                .iter()
                .map(|d| d.code())
                .collect();
            assert_eq!(splayed, vec![0, 2, 4]);
            assert_eq!(inverted, vec![1, 3, 5]);
        }

        #[test]
        fn candidate_sets_partition_all_directions() {
            let splayed: HashSet<_> = candidate_directions(OrientationClass::Splayed)
                .into_iter()
                .collect();
            let inverted: HashSet<_> = candidate_directions(OrientationClass::Inverted)
                .into_iter()
                .collect();
            assert!(splayed.is_disjoint(&inverted));
            let all: HashSet<_> = splayed.union(&inverted).copied().collect();
            assert_eq!(all, BondDirection::ALL.into_iter().collect::<HashSet<_>>());
        }

        #[test]
        fn tripod_members_are_spread_evenly() {
            for class in [OrientationClass::Splayed, OrientationClass::Inverted] {
                let vectors: Vec<_> = candidate_directions(class)
                    .into_iter()
                    .map(|d| direction_vector(d, 1.0))
                    .collect();
                let sum = vectors.iter().fold(Vector2::zeros(), |acc, v| acc + v);
                assert!(sum.norm() < EPS);
            }
        }

        #[test]
        fn each_direction_belongs_to_its_own_class() {
            for direction in BondDirection::ALL {
                assert!(candidate_directions(direction.orientation_class()).contains(&direction));
            }
        }
    }
}
