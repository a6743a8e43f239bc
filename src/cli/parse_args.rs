use finch_sat::config::{Config, Fitness, MutationChance, PolarityLean};

use crate::CliOptions;

/// Parse CLI arguments to a [Config] struct or a [CliOptions] struct.
///
/// If an unrecognised argument or invalid option is found an message is sent and the process is terminated.
pub fn parse_args(args: &mut [String], config: &mut Config, cli_options: &mut CliOptions) {
    'arg_examination: for arg in args.iter().skip(1).rev().skip(1) {
        let mut split = arg.split("=");
        match split.next() {
            Some("--model") | Some("--valuation") => {
                println!("c The best valuation found will be written.");
                cli_options.model = true;
            }

            Some("--quiet") => {
                cli_options.quiet = true;
            }

            // The remaining cases follow a common template.
            // If a value is present, may be parsed appropriately, and is valid, the config is updated.
            // Otherwise, a message is sent.
            //
            // Further, the cases should be in lexicographic order.
            //
            Some("--iterations") | Some("--iteration_limit") => {
                let (min, max) = config.iteration_limit.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        if min <= value && value <= max {
                            println!("c iteration_limit set to: {value}");
                            config.iteration_limit.value = value;
                            continue 'arg_examination;
                        }
                    }
                }

                println!("iteration_limit requires a value between {min} and {max}");
                std::process::exit(1);
            }

            Some("--mutation") | Some("--mutation_chance") => {
                let (min, max) = config.mutation_chance.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<MutationChance>() {
                        if min <= value && value <= max {
                            println!("c mutation_chance set to: {value}");
                            config.mutation_chance.value = value;
                            continue 'arg_examination;
                        }
                    }
                }

                println!("mutation_chance requires a value between {min} and {max}");
                std::process::exit(1);
            }

            Some("--polarity_lean") => {
                let (min, max) = config.polarity_lean.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<PolarityLean>() {
                        if min <= value && value <= max {
                            println!("c polarity_lean set to: {value}");
                            config.polarity_lean.value = value;
                            continue 'arg_examination;
                        }
                    }
                }

                println!("polarity_lean requires a value between {min} and {max}");
                std::process::exit(1);
            }

            Some("--population") | Some("--population_size") => {
                let (min, max) = config.population_size.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        if min <= value && value <= max {
                            println!("c population_size set to: {value}");
                            config.population_size.value = value;
                            continue 'arg_examination;
                        }
                    }
                }

                println!("population_size requires a value between {min} and {max}");
                std::process::exit(1);
            }

            Some("--seed") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<u64>() {
                        println!("c seed set to: {value}");
                        cli_options.seed = Some(value);
                        continue 'arg_examination;
                    }
                }

                println!("seed requires an unsigned 64-bit value");
                std::process::exit(1);
            }

            Some("--threshold") | Some("--fitness_threshold") => {
                let (min, max) = config.fitness_threshold.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<Fitness>() {
                        if min <= value && value <= max {
                            println!("c fitness_threshold set to: {value}");
                            config.fitness_threshold.value = value;
                            continue 'arg_examination;
                        }
                    }
                }

                println!("fitness_threshold requires a value between {min} and {max}");
                std::process::exit(1);
            }

            Some("--time-limit") | Some("--time_limit") => {
                let (min, max) = config.time_limit.min_max();
                let min = min.as_secs();
                let max = max.as_secs();

                if let Some(request) = split.next() {
                    if let Ok(seconds) = request.parse::<u64>() {
                        if min <= seconds && seconds <= max {
                            println!("c time_limit set to: {seconds} seconds");
                            config.time_limit.value = std::time::Duration::from_secs(seconds);
                            continue 'arg_examination;
                        }
                    }
                }

                println!("time_limit requires a value between {min} and {max}");
                std::process::exit(1);
            }

            Some(_) | None => {
                println!("Unable to parse argument: {arg:?}");
                std::process::exit(1);
            }
        }
    }
}
