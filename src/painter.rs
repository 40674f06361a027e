use std::collections::HashMap;

use crate::machine::{Machine, MachineConfig, MachineError};

/// Hull panel color. Everything starts black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Black = 0,
    White = 1,
}

/// The painting robot: a turtle that turns in place and then steps one
/// panel forward. Positive y is up.
struct Robot {
    pos: (i64, i64),
    dir: (i64, i64),
}

impl Robot {
    fn new() -> Self {
        Robot {
            pos: (0, 0),
            dir: (0, 1),
        }
    }

    fn turn_left(&mut self) {
        self.dir = (-self.dir.1, self.dir.0);
        self.step();
    }

    fn turn_right(&mut self) {
        self.dir = (self.dir.1, -self.dir.0);
        self.step();
    }

    fn step(&mut self) {
        self.pos = (self.pos.0 + self.dir.0, self.pos.1 + self.dir.1);
    }
}

/// Run the painting program to completion and return every panel the robot
/// touched. The machine pauses after each output; one round of the loop
/// consumes a (paint, turn) pair and feeds back the color of the panel the
/// robot lands on.
pub fn paint_panels(
    program: &[i64],
    starting_panel: Panel,
) -> Result<HashMap<(i64, i64), Panel>, MachineError> {
    let config = MachineConfig {
        pause_on_output: true,
        ..Default::default()
    };
    let mut machine = Machine::with_config(program, &[], config)?;
    let mut robot = Robot::new();
    let mut panels = HashMap::new();

    panels.insert(robot.pos, starting_panel);
    machine.push_input(starting_panel as i64);

    loop {
        machine.execute()?;
        machine.execute()?;
        let outputs = machine.take_output();
        if outputs.len() < 2 {
            // Halted mid-stride; nothing more to paint.
            break;
        }

        let panel = if outputs[0] == 0 {
            Panel::Black
        } else {
            Panel::White
        };
        panels.insert(robot.pos, panel);

        if outputs[1] == 0 {
            robot.turn_left();
        } else {
            robot.turn_right();
        }

        if machine.halted() {
            break;
        }
        let current = *panels.get(&robot.pos).unwrap_or(&Panel::Black);
        machine.push_input(current as i64);
    }

    Ok(panels)
}

/// Draw the painted hull, highest y first. White panels print as '#'.
pub fn render(panels: &HashMap<(i64, i64), Panel>) -> String {
    let xs = panels.keys().map(|p| p.0);
    let ys = panels.keys().map(|p| p.1);
    let (min_x, max_x) = (xs.clone().min().unwrap_or(0), xs.max().unwrap_or(0));
    let (min_y, max_y) = (ys.clone().min().unwrap_or(0), ys.max().unwrap_or(0));

    let mut out = String::new();
    for y in (min_y..=max_y).rev() {
        for x in min_x..=max_x {
            match panels.get(&(x, y)) {
                Some(Panel::White) => out.push('#'),
                _ => out.push(' '),
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_walk_paints_a_square() {
        // Fixed output script: paint white and turn left, four times over.
        // The robot walks a counterclockwise 2x2 loop: (0,0) -> (-1,0) ->
        // (-1,-1) -> (0,-1) -> back to (0,0), painting each panel white.
        let program = [
            104, 1, 104, 0, 104, 1, 104, 0, 104, 1, 104, 0, 104, 1, 104, 0, 99,
        ];
        let panels = paint_panels(&program, Panel::Black).unwrap();
        assert_eq!(panels.len(), 4);
        assert_eq!(panels[&(0, 0)], Panel::White);
        assert_eq!(panels[&(-1, 0)], Panel::White);
        assert_eq!(panels[&(-1, -1)], Panel::White);
        assert_eq!(panels[&(0, -1)], Panel::White);
    }

    #[test]
    fn test_starting_panel_is_fed_to_the_program() {
        // Echo the camera reading back as the paint color, turn right, then
        // halt: a white start leaves (0,0) white.
        let program = [3, 9, 4, 9, 104, 1, 99, 0, 0, 0];
        let panels = paint_panels(&program, Panel::White).unwrap();
        assert_eq!(panels[&(0, 0)], Panel::White);

        let panels = paint_panels(&program, Panel::Black).unwrap();
        assert_eq!(panels[&(0, 0)], Panel::Black);
    }

    #[test]
    fn test_render_square() {
        let program = [
            104, 1, 104, 0, 104, 1, 104, 0, 104, 1, 104, 0, 104, 1, 104, 0, 99,
        ];
        let panels = paint_panels(&program, Panel::Black).unwrap();
        assert_eq!(render(&panels), "##\n##\n");
    }
}
