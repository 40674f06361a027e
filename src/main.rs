use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use aoc2019::{
    amplifiers, arcade, asteroids, beam, boost, diagnostics, droid, fft, fuel, gravity_assist,
    moons, orbits, painter, password, program, reactions, scaffold, space_image, wires,
};

#[derive(Parser)]
#[command(name = "aoc2019", about = "Advent of Code 2019 solutions")]
struct Cli {
    /// Which day's puzzle to solve (1-17 or 19).
    #[arg(long)]
    day: u32,

    /// Path to that day's puzzle input file.
    #[arg(long)]
    input: PathBuf,

    /// Also draw grid output (arcade screen, section map, scaffold view)
    /// for the days that have one.
    #[arg(long)]
    render: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(&cli) {
        eprintln!("day {} failed: {error}", cli.day);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let text = std::fs::read_to_string(&cli.input)?;

    match cli.day {
        1 => {
            let masses = fuel::parse_masses(&text)?;
            let simple: i64 = masses.iter().map(|&m| fuel::fuel_required(m)).sum();
            let total: i64 = masses.iter().map(|&m| fuel::total_fuel_required(m)).sum();
            println!("part1 {simple}");
            println!("part2 {total}");
        }
        2 => {
            let program = program::parse(&text)?;
            println!("part1 {}", gravity_assist::run_with_inputs(&program, 12, 2)?);
            match gravity_assist::find_noun_verb(&program, 19690720) {
                Some((noun, verb)) => println!("part2 {}", 100 * noun + verb),
                None => println!("part2 not found"),
            }
        }
        3 => {
            let mut lines = text.lines();
            let first = wires::parse_wire(lines.next().unwrap_or(""))?;
            let second = wires::parse_wire(lines.next().unwrap_or(""))?;
            let distance = wires::closest_crossing_distance(&first, &second)
                .ok_or("the wires never cross")?;
            let steps = wires::fewest_combined_steps(&first, &second)
                .ok_or("the wires never cross")?;
            println!("part1 {distance}");
            println!("part2 {steps}");
        }
        4 => {
            let (low, high) = password::parse_range(&text)?;
            let (plain, strict) = password::count_valid(low, high);
            println!("part1 {plain}");
            println!("part2 {strict}");
        }
        5 => {
            let program = program::parse(&text)?;
            println!("part1 {}", diagnostics::diagnostic_code(&program, 1)?);
            println!("part2 {}", diagnostics::diagnostic_code(&program, 5)?);
        }
        6 => {
            let orbits = orbits::parse_orbits(&text)?;
            println!("part1 {}", orbits::orbit_checksum(&orbits));
            let transfers =
                orbits::transfer_count(&orbits, "YOU", "SAN").ok_or("no route to Santa")?;
            println!("part2 {transfers}");
        }
        7 => {
            let program = program::parse(&text)?;
            println!("part1 {}", amplifiers::max_thruster_signal(&program)?);
            println!("part2 {}", amplifiers::max_feedback_signal(&program)?);
        }
        8 => {
            let layers = space_image::parse_layers(&text, 25, 6);
            println!("part1 {}", space_image::checksum(&layers));
            println!("part2");
            print!("{}", space_image::composite(&layers, 25, 6));
        }
        9 => {
            let program = program::parse(&text)?;
            println!("part1 {}", last(&boost::run_boost(&program, 1)?)?);
            println!("part2 {}", last(&boost::run_boost(&program, 2)?)?);
        }
        10 => {
            let asteroids = asteroids::parse_asteroids(&text);
            let (station, visible) =
                asteroids::best_station(&asteroids).ok_or("no asteroids to stand on")?;
            println!("part1 {visible}");
            let order = asteroids::vaporization_order(station, &asteroids);
            match order.get(199) {
                Some(&(x, y)) => println!("part2 {}", x * 100 + y),
                None => println!("part2 fewer than 200 asteroids vaporized"),
            }
        }
        11 => {
            let program = program::parse(&text)?;
            let panels = painter::paint_panels(&program, painter::Panel::Black)?;
            println!("part1 {}", panels.len());
            let panels = painter::paint_panels(&program, painter::Panel::White)?;
            println!("part2");
            print!("{}", painter::render(&panels));
        }
        12 => {
            let scan = moons::parse_moons(&text)?;
            let mut system = scan.clone();
            for _ in 0..1000 {
                moons::step(&mut system);
            }
            println!("part1 {}", moons::total_energy(&system));
            println!("part2 {}", moons::cycle_length(&scan));
        }
        13 => {
            let program = program::parse(&text)?;
            let tiles = arcade::draw_tiles(&program)?;
            if cli.render {
                print!("{}", arcade::render(&tiles));
            }
            println!("part1 {}", arcade::count_blocks(&tiles));
            println!("part2 {}", arcade::play_free_game(&program)?);
        }
        14 => {
            let reactions = reactions::parse_reactions(&text)?;
            println!("part1 {}", reactions::ore_for_fuel(&reactions, 1));
            println!("part2 {}", reactions::max_fuel(&reactions, 1_000_000_000_000));
        }
        15 => {
            let program = program::parse(&text)?;
            let grid = droid::explore(&program)?;
            if cli.render {
                print!("{}", droid::render(&grid));
            }
            let distance = droid::distance_to_oxygen(&grid).ok_or("no oxygen system found")?;
            println!("part1 {distance}");
            println!("part2 {}", droid::minutes_to_fill(&grid));
        }
        16 => {
            let signal = fft::parse_signal(&text);
            println!("part1 {}", fft::first_eight(&fft::fft(&signal, 100)));
            println!("part2 {}", fft::decode_at_offset(&signal, 100));
        }
        17 => {
            let program = program::parse(&text)?;
            let view = scaffold::capture_view(&program)?;
            if cli.render {
                print!("{view}");
            }
            println!("part1 {}", scaffold::alignment_sum(&view));
        }
        19 => {
            let program = program::parse(&text)?;
            println!("part1 {}", beam::count_beam_points(&program, 50)?);
            match beam::find_square(&program, 100)? {
                Some((x, y)) => println!("part2 {}", x * 10_000 + y),
                None => println!("part2 no square fits"),
            }
        }
        other => return Err(format!("no solver for day {other}").into()),
    }

    Ok(())
}

/// The final value a program printed, for days whose answer is the last
/// output.
fn last(output: &[i64]) -> Result<i64, Box<dyn Error>> {
    output
        .last()
        .copied()
        .ok_or_else(|| "program produced no output".into())
}
