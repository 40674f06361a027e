use crate::machine::{Machine, MachineError};

/// Run the ship's diagnostic program against one subsystem, returning every
/// value it prints. The self-checks print zeroes; the final value is the
/// diagnostic code.
pub fn run_diagnostic(program: &[i64], system_id: i64) -> Result<Vec<i64>, MachineError> {
    let mut machine = Machine::new(program, &[system_id])?;
    machine.execute()?;
    Ok(machine.take_output())
}

/// The diagnostic code alone: the last value printed.
pub fn diagnostic_code(program: &[i64], system_id: i64) -> Result<i64, MachineError> {
    let mut machine = Machine::new(program, &[system_id])?;
    machine.execute()?;
    Ok(machine.last_output().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echoes_the_system_id() {
        // The minimal diagnostic: read the id, print it back, halt.
        let program = [3, 0, 4, 0, 99];
        assert_eq!(run_diagnostic(&program, 1).unwrap(), vec![1]);
        assert_eq!(run_diagnostic(&program, 5).unwrap(), vec![5]);
    }

    #[test]
    fn test_diagnostic_code_is_last_output() {
        // Prints two zero self-checks before the code.
        let program = [104, 0, 104, 0, 3, 11, 4, 11, 99, 0, 0, 0];
        assert_eq!(
            run_diagnostic(&program, 777).unwrap(),
            vec![0, 0, 777]
        );
        assert_eq!(diagnostic_code(&program, 777).unwrap(), 777);
    }

    #[test]
    fn test_branching_diagnostic() {
        // Prints 999/1000/1001 for an id below/equal to/above 8.
        let program = [
            3, 21, 1008, 21, 8, 20, 1005, 20, 22, 107, 8, 21, 20, 1006, 20, 31, 1106, 0, 36, 98,
            0, 0, 1002, 21, 125, 20, 4, 20, 1105, 1, 46, 104, 999, 1105, 1, 46, 1101, 1000, 1,
            20, 4, 20, 1105, 1, 46, 98, 99,
        ];
        assert_eq!(diagnostic_code(&program, 1).unwrap(), 999);
        assert_eq!(diagnostic_code(&program, 8).unwrap(), 1000);
        assert_eq!(diagnostic_code(&program, 50).unwrap(), 1001);
    }
}
