use itertools::Itertools;

use crate::machine::{Machine, MachineConfig, MachineError};

/// Highest thruster signal over all orderings of phase settings 0-4, with
/// the five amplifiers chained serially: each runs to halt, and its single
/// output seeds the next amplifier's input.
pub fn max_thruster_signal(program: &[i64]) -> Result<i64, MachineError> {
    let mut best = i64::MIN;
    for settings in (0..5i64).permutations(5) {
        let mut signal = 0;
        for &setting in &settings {
            let mut amplifier = Machine::new(program, &[setting, signal])?;
            amplifier.execute()?;
            signal = amplifier.last_output().unwrap_or(0);
        }
        best = best.max(signal);
    }
    Ok(best)
}

/// Highest thruster signal over all orderings of phase settings 5-9 with
/// the amplifiers wired in a feedback loop: E's output feeds back into A.
///
/// Every amplifier runs with `pause_on_output`, so one round-robin turn
/// moves exactly one value down the chain. The loop is done when the last
/// amplifier halts; the thruster signal is its final output.
pub fn max_feedback_signal(program: &[i64]) -> Result<i64, MachineError> {
    let config = MachineConfig {
        pause_on_output: true,
        ..Default::default()
    };

    let mut best = i64::MIN;
    for settings in (5..10i64).permutations(5) {
        let mut amplifiers = settings
            .iter()
            .map(|&setting| Machine::with_config(program, &[setting], config))
            .collect::<Result<Vec<_>, _>>()?;

        // Kickstart the first amplifier with a zero signal.
        amplifiers[0].push_input(0);

        let mut thruster = 0;
        while !amplifiers[4].halted() {
            for index in 0..amplifiers.len() {
                amplifiers[index].execute()?;
                let outputs = amplifiers[index].take_output();
                if index == amplifiers.len() - 1 {
                    if let Some(&signal) = outputs.last() {
                        thruster = signal;
                    }
                }
                let next = (index + 1) % amplifiers.len();
                for signal in outputs {
                    amplifiers[next].push_input(signal);
                }
            }
        }
        best = best.max(thruster);
    }
    Ok(best)
}
