use crate::cli::ChainArgs;
use crate::config;
use crate::error::Result;
use molsketch::core::geometry::BondDirection;
use molsketch::core::models::ids::AtomId;
use molsketch::core::valence::ValenceTable;
use molsketch::workflows::error::SketchError;
use molsketch::workflows::sketch::SketchSession;
use nalgebra::Point2;
use std::fmt::Write;
use tracing::info;

pub fn run(args: ChainArgs) -> Result<()> {
    let config = config::resolve(&args.sketch, args.label.as_deref())?;
    let valence = match &args.valence {
        Some(path) => {
            info!("Loading valence table from {:?}", path);
            ValenceTable::load(path)?
        }
        None => ValenceTable::new(),
    };

    let mut session = SketchSession::with_valence(config, valence)?;
    let atoms = build_chain(&mut session, args.length, args.start_up)?;
    info!("Sketched a chain of {} atom(s).", atoms.len());

    print!("{}", render_table(&session)?);
    Ok(())
}

/// Grows a zigzag chain of `length` atoms, alternating between the down and
/// up placements, starting from an atom at the origin.
pub fn build_chain(
    session: &mut SketchSession,
    length: usize,
    start_up: bool,
) -> std::result::Result<Vec<AtomId>, SketchError> {
    if length == 0 {
        return Ok(Vec::new());
    }

    let label = session.config().grow_label.clone();
    let mut atoms = vec![session.place_atom(&label, Point2::origin())?];
    let mut up = start_up;

    for _ in 1..length {
        let previous = atoms[atoms.len() - 1];
        atoms.push(session.grow(previous, BondDirection::from_modifiers(up))?);
        up = !up;
    }
    Ok(atoms)
}

pub fn render_table(session: &SketchSession) -> std::result::Result<String, SketchError> {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "{:>4}  {:<5} {:>6}  {:<5} {:>9} {:>9}  neighbors",
        "id", "label", "degree", "shown", "x", "y"
    );

    for atom in session.molecule().atoms() {
        let position = session.position(atom.id())?;
        let neighbors = atom
            .neighbors()
            .map(|id| id.index().to_string())
            .collect::<Vec<_>>()
            .join(",");
        let _ = writeln!(
            out,
            "{:>4}  {:<5} {:>6}  {:<5} {:>9.2} {:>9.2}  {}",
            atom.id().index(),
            atom.label(),
            atom.degree(),
            if atom.label_visible() { "yes" } else { "no" },
            position.x,
            position.y,
            neighbors
        );
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use molsketch::workflows::config::SketchConfig;

    fn session() -> SketchSession {
        SketchSession::new(SketchConfig::default()).unwrap()
    }

    #[test]
    fn builds_requested_number_of_atoms() {
        let mut session = session();
        let atoms = build_chain(&mut session, 5, false).unwrap();

        assert_eq!(atoms.len(), 5);
        assert_eq!(session.molecule().len(), 5);
        assert_eq!(session.molecule().bond_count(), 4);
    }

    #[test]
    fn empty_chain_creates_nothing() {
        let mut session = session();
        assert!(build_chain(&mut session, 0, false).unwrap().is_empty());
        assert!(session.molecule().is_empty());
    }

    #[test]
    fn chain_zigzags_between_two_rows() {
        let mut session = session();
        let atoms = build_chain(&mut session, 4, false).unwrap();

        let ys: Vec<f64> = atoms
            .iter()
            .map(|&id| session.position(id).unwrap().y)
            .collect();
        assert!(ys[0].abs() < 1e-9);
        assert!((ys[1] - 20.0).abs() < 1e-9);
        assert!(ys[2].abs() < 1e-9);
        assert!((ys[3] - 20.0).abs() < 1e-9);
    }

    #[test]
    fn starting_up_mirrors_the_zigzag() {
        let mut session = session();
        let atoms = build_chain(&mut session, 2, true).unwrap();
        assert!((session.position(atoms[1]).unwrap().y + 20.0).abs() < 1e-9);
    }

    #[test]
    fn table_lists_every_atom_with_visibility() {
        let mut session = session();
        build_chain(&mut session, 3, false).unwrap();
        let table = render_table(&session).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("neighbors"));
        assert!(lines[1].contains("yes") && lines[1].trim_end().ends_with('1'));
        assert!(lines[2].contains("no") && lines[2].trim_end().ends_with("0,2"));
        assert!(lines[3].contains("yes") && lines[3].trim_end().ends_with('1'));
    }
}
