//! Demonstration of the factory button solver library
//!
//! Run with: cargo run --example batch_demo

use anyhow::Result;
use factory_buttons::{
    batch::BatchRunner,
    config::{Part, Settings},
    machine::parse_machine_line,
    solver::{JoltageOptimizer, ToggleSearch},
};

fn main() -> Result<()> {
    println!("Factory Button Solver Demo");
    println!("==========================\n");

    // Solve the two problems for one machine directly
    let machine = parse_machine_line("[#.#] (0,1) (1,2) (0,2) {2,1,3}")?;
    println!("Machine: {}", machine);

    let presses = ToggleSearch::new().solve(&machine.lights, &machine.buttons)?;
    println!("Minimum presses for the light target: {}", presses);

    let presses = JoltageOptimizer::new().solve(&machine.joltage, &machine.buttons)?;
    println!("Minimum presses for the joltage target: {}\n", presses);

    // Solve a whole batch and sum the totals
    let machines = vec![
        parse_machine_line("[#.#] (0,1) (1,2) (0,2) {2,1,3}")?,
        parse_machine_line("[##] (0) (0,1) (1) {2,1}")?,
        parse_machine_line("[..##] (0,3) (1,2) (2,3) (0,1) {7,5,5,7}")?,
    ];

    let mut settings = Settings::default();
    settings.solver.part = Part::Both;

    let report = BatchRunner::new(settings).run_machines(&machines)?;
    println!("{}", report);

    Ok(())
}
