use std::collections::HashMap;

/// Orbit relationships as a child-to-parent map: `orbits["B"] == "A"` means
/// B directly orbits A.
pub type OrbitMap = HashMap<String, String>;

/// Parse "A)B" lines.
pub fn parse_orbits(text: &str) -> Result<OrbitMap, String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (target, orbiter) = line
                .trim()
                .split_once(')')
                .ok_or_else(|| format!("malformed orbit: {line:?}"))?;
            Ok((orbiter.to_string(), target.to_string()))
        })
        .collect()
}

/// The chain of bodies from `body` up to the universal center of mass,
/// starting with its direct parent.
fn ancestors<'a>(orbits: &'a OrbitMap, body: &str) -> Vec<&'a str> {
    let mut chain = Vec::new();
    let mut current = body;
    while let Some(parent) = orbits.get(current) {
        chain.push(parent.as_str());
        current = parent;
    }
    chain
}

/// Total number of direct and indirect orbits: the summed depth of every
/// body in the tree.
pub fn orbit_checksum(orbits: &OrbitMap) -> usize {
    orbits.keys().map(|body| ancestors(orbits, body).len()).sum()
}

/// Minimum orbital transfers to move YOU to the same body SAN orbits: walk
/// both ancestor chains to their first common body.
pub fn transfer_count(orbits: &OrbitMap, from: &str, to: &str) -> Option<usize> {
    let from_chain = ancestors(orbits, from);
    let to_chain = ancestors(orbits, to);
    let positions: HashMap<&str, usize> = from_chain
        .iter()
        .enumerate()
        .map(|(index, &body)| (body, index))
        .collect();

    to_chain
        .iter()
        .enumerate()
        .find_map(|(to_steps, &body)| positions.get(body).map(|&from_steps| from_steps + to_steps))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "COM)B\nB)C\nC)D\nD)E\nE)F\nB)G\nG)H\nD)I\nE)J\nJ)K\nK)L";

    #[test]
    fn test_orbit_checksum() {
        let orbits = parse_orbits(MAP).unwrap();
        assert_eq!(orbit_checksum(&orbits), 42);
    }

    #[test]
    fn test_transfer_count() {
        let orbits = parse_orbits(&format!("{MAP}\nK)YOU\nI)SAN")).unwrap();
        assert_eq!(transfer_count(&orbits, "YOU", "SAN"), Some(4));
    }

    #[test]
    fn test_transfer_within_same_branch() {
        let orbits = parse_orbits("COM)A\nA)B\nB)YOU\nA)SAN").unwrap();
        // YOU's parent is B, SAN's parent is A: one hop down.
        assert_eq!(transfer_count(&orbits, "YOU", "SAN"), Some(1));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_orbits("COM-B").is_err());
    }

    #[test]
    fn test_disconnected_bodies_have_no_path() {
        let orbits = parse_orbits("COM)A\nX)B").unwrap();
        assert_eq!(transfer_count(&orbits, "A", "B"), None);
    }
}
