use finch_sat::{config::Config, context::Context};

mod fitness {

    use finch_sat::types::err::{ErrorKind, PopulationError};

    use super::*;

    #[test]
    fn fractions_of_clauses() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(p).is_ok());
        assert!(ctx.add_clause(q).is_ok());
        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());

        assert_eq!(ctx.fitness_of(&vec![true, true]), Ok(0.75));
        assert_eq!(ctx.fitness_of(&vec![false, false]), Ok(0.25));
        assert_eq!(ctx.fitness_of(&vec![true, false]), Ok(0.75));
    }

    #[test]
    fn short_valuations_rejected() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, q]).is_ok());

        assert_eq!(
            ctx.fitness_of(&vec![true]),
            Err(ErrorKind::Population(PopulationError::IncompleteValuation))
        );
    }

    #[test]
    fn long_valuations_read() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, q]).is_ok());

        // Additional values cannot be read by a literal of the formula.
        assert_eq!(ctx.fitness_of(&vec![false, true, false, false]), Ok(1.0));
    }

    #[test]
    fn empty_formula_fit() {
        let ctx = Context::from_config(Config::default());

        let empty: Vec<bool> = Vec::default();
        assert_eq!(ctx.fitness_of(&empty), Ok(1.0));
        assert_eq!(ctx.fitness_of(&vec![true, false]), Ok(1.0));
    }
}

mod ranking {

    use finch_sat::types::err::{ErrorKind, PopulationError};

    use super::*;

    #[test]
    fn descending_with_stable_ties() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(p).is_ok());
        assert!(ctx.add_clause(q).is_ok());

        ctx.population_db.renew(vec![
            vec![true, false],
            vec![false, false],
            vec![true, true],
            vec![false, true],
        ]);

        let ranking = ctx.rank().expect("Ranking failed");

        let members = ranking.iter().map(|rank| rank.member).collect::<Vec<_>>();
        let fitnesses = ranking.iter().map(|rank| rank.fitness).collect::<Vec<_>>();

        // Ties keep the order in which members were read, so member 0 is ranked before member 3.
        assert_eq!(members, vec![2, 0, 3, 1]);
        assert_eq!(fitnesses, vec![1.0, 0.5, 0.5, 0.0]);
    }

    #[test]
    fn ranking_is_stable_across_calls() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, q]).is_ok());

        ctx.population_db.renew(vec![
            vec![true, false],
            vec![false, true],
            vec![true, true],
            vec![false, false],
        ]);

        let first = ctx.rank().expect("Ranking failed");
        let second = ctx.rank().expect("Ranking failed");

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.member, b.member);
            assert_eq!(a.fitness, b.fitness);
        }
    }

    #[test]
    fn empty_population_rejected() {
        let mut ctx = Context::from_config(Config::default());

        assert!(matches!(
            ctx.rank(),
            Err(ErrorKind::Population(PopulationError::Empty))
        ));
    }

    #[test]
    fn evaluations_counted() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.fresh_or_max_literal();
        assert!(ctx.add_clause(p).is_ok());

        ctx.population_db.renew(vec![vec![true], vec![false], vec![true]]);

        let _ = ctx.rank().expect("Ranking failed");

        assert_eq!(ctx.counters.total_evaluations, 3);
    }
}

mod selection {

    use super::*;

    #[test]
    fn zero_fitness_is_never_accepted() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.fresh_or_max_literal();
        assert!(ctx.add_clause(p).is_ok());

        ctx.population_db.renew(vec![
            vec![false],
            vec![true],
            vec![false],
            vec![false],
        ]);

        let ranking = ctx.rank().expect("Ranking failed");
        assert_eq!(ranking[0].member, 1);

        // Unfit members are accepted with probability zero, so selection lands on the
        // sole satisfier --- short of the (cosmically unlikely) uniform fallback.
        for _ in 0..20 {
            assert_eq!(ctx.select(&ranking), Ok(1));
        }
    }

    #[test]
    fn zero_best_falls_to_uniform() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.fresh_or_max_literal();
        assert!(ctx.add_clause(p).is_ok());

        ctx.population_db.renew(vec![vec![false], vec![false], vec![false]]);

        let ranking = ctx.rank().expect("Ranking failed");
        assert_eq!(ranking[0].fitness, 0.0);

        for _ in 0..20 {
            let selection = ctx.select(&ranking).expect("Selection failed");
            assert!(selection < 3);
        }

        // A best fitness of zero skips acceptance sampling, so no candidate is rejected.
        assert_eq!(ctx.counters.total_rejections, 0);
    }

    #[test]
    fn empty_ranking_rejected() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.select(&Vec::default()).is_err());
    }
}

mod crossover {

    use finch_sat::procedures::crossover::crossover;
    use finch_sat::types::err::{ErrorKind, PopulationError};

    use super::*;

    #[test]
    fn children_partition_parents() {
        let sire = vec![true, true, true, true];
        let dam = vec![false, false, false, false];

        let (first, second) = crossover(&sire, &dam, 1).expect("Crossover failed");

        assert_eq!(first, vec![true, true, false, false]);
        assert_eq!(second, vec![false, false, true, true]);
    }

    #[test]
    fn point_zero_takes_a_single_value() {
        let sire = vec![true, true, true];
        let dam = vec![false, false, false];

        let (first, second) = crossover(&sire, &dam, 0).expect("Crossover failed");

        assert_eq!(first, vec![true, false, false]);
        assert_eq!(second, vec![false, true, true]);
    }

    #[test]
    fn final_point_copies_parents() {
        let sire = vec![true, false, true];
        let dam = vec![false, true, false];

        let (first, second) = crossover(&sire, &dam, 2).expect("Crossover failed");

        assert_eq!(first, sire);
        assert_eq!(second, dam);
    }

    #[test]
    fn out_of_bounds_points_rejected() {
        let sire = vec![true, true];
        let dam = vec![false, false];

        assert_eq!(
            crossover(&sire, &dam, 2),
            Err(PopulationError::CrossoverBound)
        );
    }

    #[test]
    fn mismatched_parents_rejected() {
        let sire = vec![true, true, true];
        let dam = vec![false, false];

        assert_eq!(
            crossover(&sire, &dam, 1),
            Err(PopulationError::MismatchedMembers)
        );
    }

    #[test]
    fn members_crossed_by_key() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, q]).is_ok());

        ctx.population_db.renew(vec![vec![true, true], vec![false, false]]);

        let (first, second) = ctx
            .crossover_members(0, 1, Some(0))
            .expect("Crossover failed");

        assert_eq!(first, vec![true, false]);
        assert_eq!(second, vec![false, true]);
        assert_eq!(ctx.counters.total_recombinations, 1);
    }

    #[test]
    fn unknown_members_rejected() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.fresh_or_max_literal();
        assert!(ctx.add_clause(p).is_ok());

        ctx.population_db.renew(vec![vec![true], vec![false]]);

        assert_eq!(
            ctx.crossover_members(7, 1, Some(0)),
            Err(ErrorKind::Population(PopulationError::InvalidKeyIndex))
        );
    }

    #[test]
    fn no_atoms_no_point() {
        let mut ctx = Context::from_config(Config::default());

        ctx.population_db.renew(vec![Vec::default(), Vec::default()]);

        assert_eq!(
            ctx.crossover_members(0, 1, None),
            Err(ErrorKind::Population(PopulationError::CrossoverBound))
        );
    }
}

mod mutation {

    use super::*;

    #[test]
    fn zero_chance_never_flips() {
        let mut config = Config::default();
        config.mutation_chance.value = 0.0;
        let mut ctx = Context::from_config(config);

        let mut valuation = vec![true, false, true, false];
        let flips = ctx.mutate(&mut valuation);

        assert_eq!(flips, 0);
        assert_eq!(valuation, vec![true, false, true, false]);
    }

    #[test]
    fn certain_chance_always_flips() {
        let mut config = Config::default();
        config.mutation_chance.value = 1.0;
        let mut ctx = Context::from_config(config);

        let mut valuation = vec![true, false, true];
        let flips = ctx.mutate(&mut valuation);

        assert_eq!(flips, 3);
        assert_eq!(valuation, vec![false, true, false]);
    }

    #[test]
    fn default_chance_is_slight() {
        let mut ctx = Context::from_config(Config::default());

        let mut valuation = vec![false; 10_000];
        let flips = ctx.mutate(&mut valuation);

        // With a chance of 0.01 the expected count of flips is 100.
        assert!(flips < 500);
        assert_eq!(valuation.iter().filter(|value| **value).count(), flips);
        assert_eq!(ctx.counters.total_flips, flips);
    }
}
