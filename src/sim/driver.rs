//! The clock-driver loop shared by the fixed-cycle-budget front end and
//! the interactive single-step front end.

use crate::common::SimError;
use crate::core::cpu::Cpu;

/// Consulted once per completed cycle to decide whether the run
/// continues. Returning `false` stops the loop; `run` always stops on
/// its own once the CPU halts, regardless of what the policy returns.
pub trait StopPolicy {
    fn should_continue(&mut self, cpu: &Cpu) -> bool;
}

/// Runs until `cpu` halts or `policy` says to stop, ticking the CPU
/// once per iteration.
pub fn run(cpu: &mut Cpu, policy: &mut dyn StopPolicy) -> Result<(), SimError> {
    while !cpu.is_halted() {
        cpu.tick()?;
        if !policy.should_continue(cpu) {
            break;
        }
    }
    Ok(())
}

/// Stops once `cpu.clock` reaches a fixed budget; a budget of `0` means
/// run until HALT with no cycle limit.
pub struct CycleBudget {
    pub budget: u64,
}

impl StopPolicy for CycleBudget {
    fn should_continue(&mut self, cpu: &Cpu) -> bool {
        self.budget == 0 || cpu.clock < self.budget
    }
}

/// Dumps CPU state and prompts "press any key to advance, or q to quit"
/// after every cycle.
pub struct SingleStep;

impl StopPolicy for SingleStep {
    fn should_continue(&mut self, cpu: &Cpu) -> bool {
        cpu.dump_state();
        print!("press any key to advance, or q to quit: ");
        let _ = std::io::Write::flush(&mut std::io::stdout());

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        !line.trim().eq_ignore_ascii_case("q")
    }
}
