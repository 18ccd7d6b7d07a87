//! Simulation statistics collection and reporting.
//!
//! Tracks the per-run metrics a scalar in-order pipeline actually
//! produces: cycle and instruction counts, stall cycles, and branch
//! outcomes.

use std::time::Instant;

/// Simulation statistics, updated once per cycle by [`crate::core::cpu::Cpu::tick`].
pub struct SimStats {
    start_time: Instant,
    pub cycles: u64,
    pub instructions_retired: u64,
    pub stall_cycles: u64,
    pub branches_taken: u64,
    pub branches_not_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            stall_cycles: 0,
            branches_taken: 0,
            branches_not_taken: 0,
        }
    }
}

impl SimStats {
    /// Prints a formatted summary of the run's statistics.
    pub fn print(&self) {
        let duration = self.start_time.elapsed();
        let seconds = duration.as_secs_f64();

        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        let ipc = self.instructions_retired as f64 / cyc as f64;
        let cpi = cyc as f64 / self.instructions_retired.max(1) as f64;

        println!("\n==========================================================");
        println!("APEX PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_ipc                  {:.4}", ipc);
        println!("sim_cpi                  {:.4}", cpi);
        println!(
            "stall_cycles             {} ({:.2}%)",
            self.stall_cycles,
            (self.stall_cycles as f64 / cyc as f64) * 100.0
        );
        println!("----------------------------------------------------------");
        println!("BRANCHES");
        let total_branches = self.branches_taken + self.branches_not_taken;
        println!("  taken                  {}", self.branches_taken);
        println!("  not_taken              {}", self.branches_not_taken);
        if total_branches > 0 {
            println!(
                "  taken_rate             {:.2}%",
                100.0 * self.branches_taken as f64 / total_branches as f64
            );
        }
        println!("==========================================================");
    }
}
