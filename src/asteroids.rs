use std::collections::HashMap;

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Reduce an offset to its primitive integer direction. Staying in integers
/// (divide by the gcd rather than normalizing to unit length) keeps equal
/// directions exactly equal.
fn direction(dx: i64, dy: i64) -> (i64, i64) {
    let g = gcd(dx, dy);
    (dx / g, dy / g)
}

/// Asteroid positions from a '#' grid, x right and y down.
pub fn parse_asteroids(text: &str) -> Vec<(i64, i64)> {
    text.lines()
        .enumerate()
        .flat_map(|(y, line)| {
            line.trim()
                .char_indices()
                .filter(|&(_, glyph)| glyph == '#')
                .map(move |(x, _)| (x as i64, y as i64))
        })
        .collect()
}

/// How many asteroids are in direct line of sight from `origin`: one per
/// distinct primitive direction.
pub fn count_visible(origin: (i64, i64), asteroids: &[(i64, i64)]) -> usize {
    let mut seen = std::collections::HashSet::new();
    for &asteroid in asteroids {
        if asteroid != origin {
            seen.insert(direction(asteroid.0 - origin.0, asteroid.1 - origin.1));
        }
    }
    seen.len()
}

/// The asteroid that sees the most others, with its count.
pub fn best_station(asteroids: &[(i64, i64)]) -> Option<((i64, i64), usize)> {
    asteroids
        .iter()
        .map(|&candidate| (candidate, count_visible(candidate, asteroids)))
        .max_by_key(|&(_, visible)| visible)
}

/// Clockwise angle of a primitive direction, measured from straight up.
/// y grows downward, so up is (0, -1).
fn clockwise_angle(direction: (i64, i64)) -> f64 {
    let angle = (direction.0 as f64).atan2(-(direction.1 as f64));
    if angle < 0.0 {
        angle + 2.0 * std::f64::consts::PI
    } else {
        angle
    }
}

/// The order the rotating laser vaporizes every other asteroid: sweep the
/// directions clockwise from up, taking the nearest asteroid per direction
/// per revolution.
pub fn vaporization_order(station: (i64, i64), asteroids: &[(i64, i64)]) -> Vec<(i64, i64)> {
    let mut groups: HashMap<(i64, i64), Vec<(i64, i64)>> = HashMap::new();
    for &asteroid in asteroids {
        if asteroid != station {
            let offset = (asteroid.0 - station.0, asteroid.1 - station.1);
            groups.entry(direction(offset.0, offset.1)).or_default().push(asteroid);
        }
    }

    // Farthest first within a direction, so pops take the nearest.
    for line in groups.values_mut() {
        line.sort_by_key(|&(x, y)| {
            let (dx, dy) = (x - station.0, y - station.1);
            std::cmp::Reverse(dx * dx + dy * dy)
        });
    }

    let mut directions: Vec<(i64, i64)> = groups.keys().copied().collect();
    directions.sort_by(|&a, &b| clockwise_angle(a).total_cmp(&clockwise_angle(b)));

    let mut order = Vec::new();
    while order.len() < asteroids.len().saturating_sub(1) {
        let mut any = false;
        for &dir in &directions {
            if let Some(asteroid) = groups.get_mut(&dir).and_then(|line| line.pop()) {
                order.push(asteroid);
                any = true;
            }
        }
        if !any {
            break;
        }
    }
    order
}
