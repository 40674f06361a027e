use rayon::prelude::*;

use crate::machine::{Machine, MachineError};

/// Run the gravity-assist program with the given noun and verb patched into
/// cells 1 and 2, returning the value left in cell 0.
pub fn run_with_inputs(program: &[i64], noun: i64, verb: i64) -> Result<i64, MachineError> {
    let mut machine = Machine::new(program, &[])?;
    machine.poke(1, noun);
    machine.poke(2, verb);
    machine.execute()?;
    Ok(machine.peek(0))
}

/// Brute-force the 100x100 noun/verb space for the pair that leaves `target`
/// in cell 0. Each probe runs on its own fresh machine, so the search
/// parallelizes trivially. A probe that faults simply isn't a match.
pub fn find_noun_verb(program: &[i64], target: i64) -> Option<(i64, i64)> {
    (0i64..10_000).into_par_iter().find_map_any(|candidate| {
        let (noun, verb) = (candidate / 100, candidate % 100);
        match run_with_inputs(program, noun, verb) {
            Ok(value) if value == target => Some((noun, verb)),
            _ => None,
        }
    })
}
