use crate::cli::DirectionsArgs;
use crate::config;
use crate::error::Result;
use molsketch::core::geometry::{
    BondDirection, OrientationClass, candidate_directions, direction_vector,
};
use std::fmt::Write;

pub fn run(args: DirectionsArgs) -> Result<()> {
    let config = config::resolve(&args.sketch, None)?;
    print!("{}", render(config.bond_length));
    Ok(())
}

pub fn render(bond_length: f64) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{:>4}  {:<11} {:>9} {:>9}", "code", "direction", "dx", "dy");
    for direction in BondDirection::ALL {
        let v = direction_vector(direction, bond_length);
        let _ = writeln!(
            out,
            "{:>4}  {:<11} {:>9.2} {:>9.2}",
            direction.code(),
            direction.to_string(),
            v.x,
            v.y
        );
    }

    for (name, class) in [
        ("splayed", OrientationClass::Splayed),
        ("inverted", OrientationClass::Inverted),
    ] {
        let codes = candidate_directions(class)
            .iter()
            .map(|d| d.code().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "{} tripod: {{{}}}", name, codes);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_six_directions_and_two_tripods() {
        let text = render(40.0);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert!(lines[1].contains("12 o'clock") && lines[1].contains("-40.00"));
        assert!(lines[4].contains("6 o'clock") && lines[4].contains("40.00"));
        assert_eq!(lines[7], "splayed tripod: {0, 2, 4}");
        assert_eq!(lines[8], "inverted tripod: {1, 3, 5}");
    }

    #[test]
    fn vectors_scale_with_bond_length() {
        let text = render(10.0);
        assert!(text.lines().nth(3).unwrap().contains("5.00"));
    }
}
