use rayon::prelude::*;

use crate::machine::{Machine, MachineError};

/// Ask the drone system whether (x, y) sits inside the tractor beam. The
/// program reads the two coordinates and prints 1 or 0; it halts after one
/// probe, so every point gets a fresh machine.
pub fn point_in_beam(program: &[i64], x: i64, y: i64) -> Result<bool, MachineError> {
    let mut machine = Machine::new(program, &[x, y])?;
    machine.execute()?;
    Ok(machine.last_output() == Some(1))
}

/// Number of beam-covered points in the size x size square at the origin.
/// Probes are independent, so the scan fans out across threads.
pub fn count_beam_points(program: &[i64], size: i64) -> Result<usize, MachineError> {
    let probes: Result<Vec<bool>, MachineError> = (0..size * size)
        .into_par_iter()
        .map(|index| point_in_beam(program, index % size, index / size))
        .collect();
    Ok(probes?.into_iter().filter(|&hit| hit).count())
}

/// Closest position whose size x size square fits entirely inside the beam,
/// as the square's top-left corner.
///
/// Walks the beam's lower-left edge row by row; the edge only ever moves
/// right, so each row resumes from the previous edge. A square fits when
/// the opposite corner, size - 1 up and size - 1 right, is also covered.
pub fn find_square(program: &[i64], size: i64) -> Result<Option<(i64, i64)>, MachineError> {
    let mut edge = 0i64;

    for y in (size - 1)..10_000 {
        let mut x = edge;
        // Rows near the emitter can miss the beam entirely; bound the scan.
        let limit = edge + y + 16;
        while x < limit && !point_in_beam(program, x, y)? {
            x += 1;
        }
        if x >= limit {
            continue;
        }
        edge = x;

        let top = (x + size - 1, y - size + 1);
        if point_in_beam(program, top.0, top.1)? {
            return Ok(Some((x, top.1)));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Probe responder covering the diagonal: in the beam iff x == y.
    const DIAGONAL: [i64; 14] = [3, 11, 3, 12, 8, 11, 12, 13, 4, 13, 99, 0, 0, 0];

    /// Probe responder that says yes to everything.
    const EVERYWHERE: [i64; 9] = [3, 7, 3, 8, 104, 1, 99, 0, 0];

    #[test]
    fn test_point_in_beam() {
        assert!(point_in_beam(&DIAGONAL, 0, 0).unwrap());
        assert!(point_in_beam(&DIAGONAL, 7, 7).unwrap());
        assert!(!point_in_beam(&DIAGONAL, 3, 4).unwrap());
    }

    #[test]
    fn test_count_beam_points_on_diagonal() {
        assert_eq!(count_beam_points(&DIAGONAL, 5).unwrap(), 5);
    }

    #[test]
    fn test_count_beam_points_full_coverage() {
        assert_eq!(count_beam_points(&EVERYWHERE, 4).unwrap(), 16);
    }

    #[test]
    fn test_find_square_everywhere_fits_at_origin() {
        assert_eq!(find_square(&EVERYWHERE, 3).unwrap(), Some((0, 0)));
    }

    #[test]
    fn test_find_square_single_point_on_diagonal() {
        assert_eq!(find_square(&DIAGONAL, 1).unwrap(), Some((0, 0)));
    }
}
