use std::{io::BufReader, path::PathBuf, str::FromStr};

use finch_sat::{
    config::Config,
    context::Context,
};

use misc::examine_parser_report;
use parse_args::parse_args;

mod misc;
mod parse_args;

#[derive(Default)]
struct CliOptions {
    model: bool,
    quiet: bool,
    seed: Option<u64>,
}

fn main() {
    let mut cli_options = CliOptions::default();
    let mut config = Config::default();

    let mut args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        println!("c Path to CNF required");
        std::process::exit(1);
    }

    parse_args(&mut args, &mut config, &mut cli_options);

    let mut ctx: Context = match cli_options.seed {
        Some(seed) => Context::from_config_seeded(config, seed),
        None => Context::from_config(config),
    };

    let path = match PathBuf::from_str(args.last().unwrap()) {
        Ok(path) => path,
        Err(_) => {
            println!("c Path to CNF required");
            std::process::exit(1);
        }
    };

    println!("c Reading DIMACS file from {path:?}");

    let file = match std::fs::File::open(&path) {
        Ok(file) => file,
        Err(_) => {
            println!("Failed to open CNF file");
            std::process::exit(1);
        }
    };

    let parse_report = ctx.read_dimacs(BufReader::new(&file));

    examine_parser_report(parse_report);

    if !cli_options.quiet {
        // The callback cannot inspect the context, so the cost of a valuation is recovered from the clause count.
        let total_clauses = ctx.clause_db.count();
        let mut best_cost = usize::MAX;

        ctx.set_callback_on_generation(Box::new(move |_generation, _best, fitness| {
            let satisfied = (fitness * total_clauses as f64).round() as usize;
            let cost = total_clauses - satisfied;

            if cost < best_cost {
                println!("o {cost}");
                best_cost = cost;
            }
        }));
    }

    let report = match ctx.evolve() {
        Ok(report) => report,

        Err(e) => {
            println!("c Evolution error: {e:?}");
            std::process::exit(2);
        }
    };

    if !cli_options.quiet {
        println!(
            "c Evolved {} generations in {:.2?}",
            ctx.counters.total_generations, ctx.counters.time
        );
    }

    println!("s {report}");

    if cli_options.model {
        match ctx.best_valuation() {
            Some((valuation, _)) => println!("v {}", ctx.atom_db.valuation_string(valuation)),

            None => println!("c No valuation to report"),
        }
    }
}
