use std::collections::{HashMap, HashSet, VecDeque};

use crate::machine::{Machine, MachineConfig, MachineError};

/// What the droid found at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Open,
    Oxygen,
}

/// Movement commands understood by the droid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    fn command(self) -> i64 {
        match self {
            Direction::North => 1,
            Direction::South => 2,
            Direction::West => 3,
            Direction::East => 4,
        }
    }

    fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    fn step(self, (x, y): (i64, i64)) -> (i64, i64) {
        match self {
            Direction::North => (x, y - 1),
            Direction::South => (x, y + 1),
            Direction::West => (x - 1, y),
            Direction::East => (x + 1, y),
        }
    }
}

/// Send one movement command and read back the status report.
fn step(machine: &mut Machine, direction: Direction) -> Result<i64, MachineError> {
    machine.push_input(direction.command());
    machine.execute()?;
    Ok(machine.take_output().pop().unwrap_or(0))
}

/// Map every cell the droid can reach.
///
/// Depth-first exploration with an explicit path stack: probe an unmapped
/// neighbor, advance when it is passable, and when every neighbor is mapped
/// pop the stack and physically walk the droid back one step. The machine
/// runs with `wait_for_input`, so it idles at each movement prompt.
pub fn explore(program: &[i64]) -> Result<HashMap<(i64, i64), Cell>, MachineError> {
    let config = MachineConfig {
        wait_for_input: true,
        ..Default::default()
    };
    let mut machine = Machine::with_config(program, &[], config)?;
    machine.execute()?; // run up to the first movement prompt

    let mut grid = HashMap::new();
    grid.insert((0, 0), Cell::Open);

    let mut path: Vec<Direction> = Vec::new();
    let mut pos = (0i64, 0i64);

    loop {
        let unmapped = Direction::ALL
            .iter()
            .copied()
            .find(|d| !grid.contains_key(&d.step(pos)));

        match unmapped {
            Some(direction) => {
                let target = direction.step(pos);
                match step(&mut machine, direction)? {
                    0 => {
                        grid.insert(target, Cell::Wall);
                    }
                    2 => {
                        grid.insert(target, Cell::Oxygen);
                        pos = target;
                        path.push(direction);
                    }
                    _ => {
                        grid.insert(target, Cell::Open);
                        pos = target;
                        path.push(direction);
                    }
                }
            }
            None => {
                // Everything around here is mapped; backtrack one step.
                let Some(direction) = path.pop() else {
                    break;
                };
                step(&mut machine, direction.opposite())?;
                pos = direction.opposite().step(pos);
            }
        }
    }

    Ok(grid)
}

/// Fewest movement commands from the origin to the oxygen system.
pub fn distance_to_oxygen(grid: &HashMap<(i64, i64), Cell>) -> Option<usize> {
    let mut queue = VecDeque::from([((0i64, 0i64), 0usize)]);
    let mut visited = HashSet::from([(0i64, 0i64)]);

    while let Some((pos, distance)) = queue.pop_front() {
        match grid.get(&pos) {
            Some(Cell::Oxygen) => return Some(distance),
            Some(Cell::Open) => {}
            _ => continue,
        }
        for direction in Direction::ALL {
            let next = direction.step(pos);
            if visited.insert(next) {
                queue.push_back((next, distance + 1));
            }
        }
    }
    None
}

/// Minutes for oxygen to flood the whole section: the BFS depth of the
/// farthest open cell from the oxygen system.
pub fn minutes_to_fill(grid: &HashMap<(i64, i64), Cell>) -> usize {
    let Some((&start, _)) = grid.iter().find(|&(_, &cell)| cell == Cell::Oxygen) else {
        return 0;
    };

    let mut queue = VecDeque::from([(start, 0usize)]);
    let mut visited = HashSet::from([start]);
    let mut minutes = 0;

    while let Some((pos, distance)) = queue.pop_front() {
        minutes = minutes.max(distance);
        for direction in Direction::ALL {
            let next = direction.step(pos);
            let passable = matches!(grid.get(&next), Some(Cell::Open) | Some(Cell::Oxygen));
            if passable && visited.insert(next) {
                queue.push_back((next, distance + 1));
            }
        }
    }
    minutes
}

/// Draw the mapped section. 'S' marks the origin, 'O' the oxygen system.
pub fn render(grid: &HashMap<(i64, i64), Cell>) -> String {
    let xs = grid.keys().map(|p| p.0);
    let ys = grid.keys().map(|p| p.1);
    let (min_x, max_x) = (xs.clone().min().unwrap_or(0), xs.max().unwrap_or(0));
    let (min_y, max_y) = (ys.clone().min().unwrap_or(0), ys.max().unwrap_or(0));

    let mut out = String::new();
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let glyph = if (x, y) == (0, 0) {
                'S'
            } else {
                match grid.get(&(x, y)) {
                    Some(Cell::Wall) => '#',
                    Some(Cell::Open) => '.',
                    Some(Cell::Oxygen) => 'O',
                    None => ' ',
                }
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
