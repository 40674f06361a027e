use crate::machine::{Machine, MachineError};

/// Run the BOOST program in the given mode (1 for the sensor self-test,
/// 2 for boost proper) and return everything it prints. In test mode any
/// output before the final keycode reports a malfunctioning opcode.
pub fn run_boost(program: &[i64], mode: i64) -> Result<Vec<i64>, MachineError> {
    let mut machine = Machine::new(program, &[mode])?;
    machine.execute()?;
    Ok(machine.take_output())
}
