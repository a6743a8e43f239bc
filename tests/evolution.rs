use finch_sat::{config::Config, context::Context, reports::Report};

mod evolution {

    use super::*;

    #[test]
    fn threshold_met_in_the_first_generation() {
        let mut config = Config::default();
        config.population_size.value = 64;
        let mut ctx = Context::from_config(config);

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(-p).is_ok());

        assert_eq!(ctx.evolve(), Ok(Report::ThresholdMet));
        assert_eq!(ctx.generation_count(), 1);

        let (valuation, fitness) = ctx.best_valuation().expect("No champion");
        assert_eq!(fitness, 1.0);
        assert_eq!(valuation, &vec![false, true]);
    }

    #[test]
    fn unreachable_threshold_exhausts_iterations() {
        let mut config = Config::default();
        config.fitness_threshold.value = 0.8;
        let mut ctx = Context::from_config(config);

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(vec![-p, q]).is_ok());

        // At most three of the four clauses may be satisfied, short of the raised threshold.
        assert_eq!(ctx.evolve(), Ok(Report::IterationsExhausted));
        assert_eq!(ctx.generation_count(), 25);

        let (_, fitness) = ctx.best_valuation().expect("No champion");
        assert_eq!(fitness, 0.75);
    }

    #[test]
    fn complementary_units_pin_fitness_at_half() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.fresh_or_max_literal();

        assert!(ctx.add_clause(p).is_ok());
        assert!(ctx.add_clause(-p).is_ok());

        // Any valuation satisfies exactly one of the two clauses, short of the default threshold.
        assert_eq!(ctx.fitness_of(&vec![true]), Ok(0.5));
        assert_eq!(ctx.fitness_of(&vec![false]), Ok(0.5));

        assert_eq!(ctx.evolve(), Ok(Report::IterationsExhausted));
        assert_eq!(ctx.generation_count(), 25);

        let (_, fitness) = ctx.best_valuation().expect("No champion");
        assert_eq!(fitness, 0.5);
    }

    #[test]
    fn iteration_limit_is_exact() {
        let mut config = Config::default();
        config.fitness_threshold.value = 0.8;
        config.iteration_limit.value = 7;
        let mut ctx = Context::from_config(config);

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(vec![-p, q]).is_ok());

        assert_eq!(ctx.evolve(), Ok(Report::IterationsExhausted));
        assert_eq!(ctx.generation_count(), 7);
    }

    #[test]
    fn time_limit_cuts_evolution_short() {
        let mut config = Config::default();
        config.time_limit.value = std::time::Duration::from_nanos(1);
        let mut ctx = Context::from_config(config);

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());

        assert_eq!(ctx.evolve(), Ok(Report::TimeUp));
        assert!(ctx.generation_count() < 25);
        assert!(!ctx.counters.time.is_zero());
    }

    #[test]
    fn empty_formula_concludes_immediately() {
        let mut ctx = Context::from_config(Config::default());

        let _ = ctx.fresh_or_max_atom();
        let _ = ctx.fresh_or_max_atom();

        assert_eq!(ctx.evolve(), Ok(Report::ThresholdMet));
        assert_eq!(ctx.generation_count(), 1);

        let (_, fitness) = ctx.best_valuation().expect("No champion");
        assert_eq!(fitness, 1.0);
    }

    #[test]
    fn empty_language_concludes_immediately() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(ctx.evolve(), Ok(Report::ThresholdMet));
        assert_eq!(ctx.generation_count(), 1);

        let (valuation, fitness) = ctx.best_valuation().expect("No champion");
        assert_eq!(fitness, 1.0);
        assert!(valuation.is_empty());
    }

    #[test]
    fn counters_track_breeding() {
        let mut config = Config::default();
        config.fitness_threshold.value = 0.8;
        config.iteration_limit.value = 4;
        config.population_size.value = 8;
        let mut ctx = Context::from_config(config);

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(vec![-p, q]).is_ok());

        assert_eq!(ctx.evolve(), Ok(Report::IterationsExhausted));

        // Four generations of eight members are evaluated, and three successor generations bred.
        assert_eq!(ctx.counters.total_evaluations, 32);
        assert_eq!(ctx.counters.total_recombinations, 12);
    }
}

mod callbacks {

    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn termination_before_a_ranking() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.fresh_or_max_literal();
        assert!(ctx.add_clause(p).is_ok());

        ctx.set_callback_terminate(Box::new(|| true));

        assert_eq!(ctx.evolve(), Ok(Report::Unknown));
        assert_eq!(ctx.generation_count(), 1);

        // Termination came before any ranking, so no champion was noted.
        assert!(ctx.best_valuation().is_none());
    }

    #[test]
    fn termination_after_three_generations() {
        let mut config = Config::default();
        config.fitness_threshold.value = 0.8;
        let mut ctx = Context::from_config(config);

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(vec![-p, q]).is_ok());

        let mut checks = 0;
        ctx.set_callback_terminate(Box::new(move || {
            checks += 1;
            checks == 3
        }));

        assert_eq!(ctx.evolve(), Ok(Report::Unknown));
        assert_eq!(ctx.generation_count(), 3);

        // Two generations were ranked before termination, so a champion was noted.
        let (_, fitness) = ctx.best_valuation().expect("No champion");
        assert_eq!(fitness, 0.75);
    }

    #[test]
    fn a_callback_for_every_generation() {
        let mut config = Config::default();
        config.fitness_threshold.value = 0.8;
        config.iteration_limit.value = 6;
        let mut ctx = Context::from_config(config);

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(vec![-p, q]).is_ok());

        let history = Rc::new(RefCell::new(Vec::default()));
        let history_handle = history.clone();

        ctx.set_callback_on_generation(Box::new(move |generation, best, fitness| {
            history_handle
                .borrow_mut()
                .push((generation, best.len(), fitness));
        }));

        assert_eq!(ctx.evolve(), Ok(Report::IterationsExhausted));

        let history = history.borrow();
        assert_eq!(history.len(), 6);

        for (index, (generation, length, fitness)) in history.iter().enumerate() {
            assert_eq!(*generation, index + 1);
            assert_eq!(*length, 2);
            assert_eq!(*fitness, 0.75);
        }
    }

    #[test]
    fn a_single_callback_when_the_threshold_is_met() {
        let mut ctx = Context::from_config(Config::default());

        let history = Rc::new(RefCell::new(Vec::default()));
        let history_handle = history.clone();

        ctx.set_callback_on_generation(Box::new(move |generation, _best, fitness| {
            history_handle.borrow_mut().push((generation, fitness));
        }));

        assert_eq!(ctx.evolve(), Ok(Report::ThresholdMet));

        assert_eq!(*history.borrow(), vec![(1, 1.0)]);
    }
}

mod determinism {

    use super::*;

    fn conflict_context(seed: Option<u64>) -> Context {
        let mut config = Config::default();
        config.fitness_threshold.value = 0.8;

        let mut ctx = match seed {
            Some(seed) => Context::from_config_seeded(config, seed),
            None => Context::from_config(config),
        };

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(vec![-p, q]).is_ok());

        ctx
    }

    #[test]
    fn equal_seeds_evolve_identically() {
        let mut first = conflict_context(Some(1312));
        let mut second = conflict_context(Some(1312));

        assert_eq!(first.evolve(), second.evolve());

        assert_eq!(first.best_valuation(), second.best_valuation());
        assert_eq!(first.counters.total_flips, second.counters.total_flips);
        assert_eq!(
            first.counters.total_rejections,
            second.counters.total_rejections
        );
    }

    #[test]
    fn the_default_seed_is_zero() {
        let mut first = conflict_context(None);
        let mut second = conflict_context(Some(0));

        assert_eq!(first.evolve(), second.evolve());
        assert_eq!(first.best_valuation(), second.best_valuation());
    }
}
