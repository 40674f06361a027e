use std::collections::HashMap;

use crate::machine::{Machine, MachineConfig, MachineError};

/// What a screen position shows. Unknown ids draw as empty space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Wall,
    Block,
    Paddle,
    Ball,
}

impl Tile {
    fn from_id(id: i64) -> Tile {
        match id {
            1 => Tile::Wall,
            2 => Tile::Block,
            3 => Tile::Paddle,
            4 => Tile::Ball,
            _ => Tile::Empty,
        }
    }

    fn glyph(self) -> char {
        match self {
            Tile::Empty => ' ',
            Tile::Wall => '#',
            Tile::Block => '*',
            Tile::Paddle => '=',
            Tile::Ball => 'o',
        }
    }
}

/// Run the cabinet once with no quarters and collect the drawn screen from
/// the (x, y, tile) output triples.
pub fn draw_tiles(program: &[i64]) -> Result<HashMap<(i64, i64), Tile>, MachineError> {
    let mut machine = Machine::new(program, &[])?;
    machine.execute()?;
    let mut tiles = HashMap::new();
    for triple in machine.output().chunks_exact(3) {
        tiles.insert((triple[0], triple[1]), Tile::from_id(triple[2]));
    }
    Ok(tiles)
}

pub fn count_blocks(tiles: &HashMap<(i64, i64), Tile>) -> usize {
    tiles.values().filter(|&&tile| tile == Tile::Block).count()
}

/// Draw the screen the way the cabinet would.
pub fn render(tiles: &HashMap<(i64, i64), Tile>) -> String {
    let max_x = tiles.keys().map(|p| p.0).max().unwrap_or(0);
    let max_y = tiles.keys().map(|p| p.1).max().unwrap_or(0);

    let mut out = String::new();
    for y in 0..=max_y {
        for x in 0..=max_x {
            out.push(tiles.get(&(x, y)).copied().unwrap_or(Tile::Empty).glyph());
        }
        out.push('\n');
    }
    out
}

/// Play the game for free: poke 2 into cell 0 (the quarter counter), then
/// keep the paddle under the ball until the program halts. Returns the
/// final score, drawn as a pseudo-tile at x = -1, y = 0.
pub fn play_free_game(program: &[i64]) -> Result<i64, MachineError> {
    let config = MachineConfig {
        wait_for_input: true,
        ..Default::default()
    };
    let mut machine = Machine::with_config(program, &[], config)?;
    machine.poke(0, 2);

    let mut score = 0;
    let mut paddle_x = 0;
    let mut ball_x = 0;
    let mut pending: Vec<i64> = Vec::new();

    loop {
        machine.execute()?;

        // A batch can end between triples only, but buffer defensively so a
        // read pause never splits one.
        pending.extend(machine.take_output());
        let mut consumed = 0;
        for triple in pending.chunks_exact(3) {
            consumed += 3;
            let (x, y, id) = (triple[0], triple[1], triple[2]);
            if (x, y) == (-1, 0) {
                score = id;
            } else {
                match Tile::from_id(id) {
                    Tile::Paddle => paddle_x = x,
                    Tile::Ball => ball_x = x,
                    _ => {}
                }
            }
        }
        pending.drain(..consumed);

        if machine.halted() {
            break;
        }
        // Joystick: tilt toward the ball.
        machine.push_input((ball_x - paddle_x).signum());
    }

    Ok(score)
}
