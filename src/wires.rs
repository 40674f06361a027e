use std::collections::HashMap;

/// One leg of a wire path: a unit direction and a length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub direction: (i64, i64),
    pub length: i64,
}

/// Parse one wire line like "R75,D30,L12".
pub fn parse_wire(line: &str) -> Result<Vec<Segment>, String> {
    line.trim()
        .split(',')
        .map(|leg| {
            let direction = match leg.chars().next() {
                Some('U') => (0, 1),
                Some('R') => (1, 0),
                Some('D') => (0, -1),
                Some('L') => (-1, 0),
                other => return Err(format!("bad wire direction: {other:?}")),
            };
            let length = leg[1..]
                .parse()
                .map_err(|e| format!("bad wire length in {leg:?}: {e}"))?;
            Ok(Segment { direction, length })
        })
        .collect()
}

/// Every point a wire passes through, mapped to the step count of its first
/// visit. The origin is not part of the trace.
pub fn trace(segments: &[Segment]) -> HashMap<(i64, i64), i64> {
    let mut points = HashMap::new();
    let mut pos = (0i64, 0i64);
    let mut steps = 0i64;

    for segment in segments {
        for _ in 0..segment.length {
            pos = (pos.0 + segment.direction.0, pos.1 + segment.direction.1);
            steps += 1;
            points.entry(pos).or_insert(steps);
        }
    }
    points
}

/// Manhattan distance from the origin to the closest crossing.
pub fn closest_crossing_distance(first: &[Segment], second: &[Segment]) -> Option<i64> {
    let a = trace(first);
    let b = trace(second);
    a.keys()
        .filter(|point| b.contains_key(*point))
        .map(|point| point.0.abs() + point.1.abs())
        .min()
}

/// Lowest combined signal delay (steps along both wires) to a crossing.
pub fn fewest_combined_steps(first: &[Segment], second: &[Segment]) -> Option<i64> {
    let a = trace(first);
    let b = trace(second);
    a.iter()
        .filter_map(|(point, steps)| b.get(point).map(|other| steps + other))
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crossings(first: &str, second: &str) -> (i64, i64) {
        let a = parse_wire(first).unwrap();
        let b = parse_wire(second).unwrap();
        (
            closest_crossing_distance(&a, &b).unwrap(),
            fewest_combined_steps(&a, &b).unwrap(),
        )
    }

    #[test]
    fn test_small_cross() {
        let (distance, steps) = crossings("R8,U5,L5,D3", "U7,R6,D4,L4");
        assert_eq!(distance, 6);
        assert_eq!(steps, 30);
    }

    #[test]
    fn test_documented_pairs() {
        let (distance, steps) = crossings(
            "R75,D30,R83,U83,L12,D49,R71,U7,L72",
            "U62,R66,U55,R34,D71,R55,D58,R83",
        );
        assert_eq!(distance, 159);
        assert_eq!(steps, 610);

        let (distance, steps) = crossings(
            "R98,U47,R26,D63,R33,U87,L62,D20,R33,U53,R51",
            "U98,R91,D20,R16,D67,R40,U7,R15,U6,R7",
        );
        assert_eq!(distance, 135);
        assert_eq!(steps, 410);
    }

    #[test]
    fn test_parallel_wires_never_cross() {
        let a = parse_wire("R5").unwrap();
        let b = parse_wire("U5").unwrap();
        assert_eq!(closest_crossing_distance(&a, &b), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_wire("X5").is_err());
        assert!(parse_wire("R").is_err());
    }
}
