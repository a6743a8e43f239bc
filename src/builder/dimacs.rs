//! A reader for the DIMACS representation of a formula.
//!
//! The reader is permissive:
//! - The problem specification (a `p cnf <atoms> <clauses>` line) is optional, and is not enforced when present.
//!   Instead, the specification read is returned as part of [ParserInfo], for the caller to check against the counts of things added.
//! - Comment lines (beginning `c`) and blank lines are skipped, wherever these appear.
//! - A line beginning `%` ends the formula, as in the SATLIB benchmark files.
//!
//! Atoms are named by their DIMACS numerals, so a formula keeps the numbering given when read and written.

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

use std::io::BufRead;

/// Details of things added to a context while reading a DIMACS formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The atom count of a problem specification, if a specification was read.
    pub expected_atoms: Option<usize>,

    /// The clause count of a problem specification, if a specification was read.
    pub expected_clauses: Option<usize>,

    /// The count of atoms added to the context.
    pub added_atoms: usize,

    /// The count of clauses added to the context.
    pub added_clauses: usize,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Reads a DIMACS formula into the context.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use finch_sat::context::Context;
    /// # use finch_sat::config::Config;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// p cnf 4 6
    ///  1  2       0
    ///  1 -2       0
    /// -1  2       0
    ///  1  2  3    0
    /// -1  2 -3    0
    ///        3 -4 0
    /// ");
    ///
    /// let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
    ///
    /// assert_eq!(info.expected_atoms, Some(4));
    /// assert_eq!(info.expected_clauses, Some(6));
    /// assert_eq!(info.added_atoms, 4);
    /// assert_eq!(info.added_clauses, 6);
    ///
    /// assert!(the_context.evolve().is_ok());
    /// ```
    ///
    /// A clause is added on reading its terminating `0`, so any literals read after the last `0` are dropped (with a warning logged).
    ///
    /// Errors if some item of a clause could not be read as an integer, on an empty clause (a bare `0`), or if an added atom or clause conflicts with the state of the context.
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        //

        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();

        let mut line_counter = 0;
        let mut clause_counter = 0;

        let mut expected_atoms = None;
        let mut expected_clauses = None;
        let initial_atoms = self.atom_db.count();

        // First phase, read until the formula begins.
        'preamble_loop: loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'preamble_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter).into()),
            }

            if buffer.trim().is_empty() {
                buffer.clear();
                continue 'preamble_loop;
            }

            match buffer.chars().next() {
                Some('c') => {
                    buffer.clear();
                    continue 'preamble_loop;
                }

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace();
                    let atom_count: usize = match problem_details.nth(2) {
                        None => return Err(err::ParseError::ProblemSpecification.into()),
                        Some(string) => match string.parse() {
                            Err(_) => return Err(err::ParseError::ProblemSpecification.into()),
                            Ok(count) => count,
                        },
                    };

                    let clause_count: usize = match problem_details.next() {
                        None => return Err(err::ParseError::ProblemSpecification.into()),
                        Some(string) => match string.parse() {
                            Err(_) => return Err(err::ParseError::ProblemSpecification.into()),
                            Ok(count) => count,
                        },
                    };

                    buffer.clear();

                    log::info!(target: targets::PARSE, "Expectation is to get {atom_count} atoms and {clause_count} clauses");
                    expected_atoms = Some(atom_count);
                    expected_clauses = Some(clause_count);
                    break 'preamble_loop;
                }

                _ => break 'preamble_loop,
            }
        }

        // Second phase, read until the formula ends.
        // The buffer is processed and then refilled, as the search for the end of the preamble may have read the first line of the formula.
        'formula_loop: loop {
            match buffer.chars().next() {
                Some('%') => break 'formula_loop,

                Some('c') => {}

                _ => {
                    for item in buffer.split_whitespace() {
                        match item {
                            "0" => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                self.add_clause(the_clause)?;
                                clause_counter += 1;
                            }

                            _ => {
                                let parsed_int = match item.parse::<isize>() {
                                    Ok(int) => int,
                                    Err(_) => {
                                        return Err(err::ParseError::Line(line_counter).into());
                                    }
                                };

                                let the_name = parsed_int.unsigned_abs().to_string();
                                let the_atom = self.atom_from_string(&the_name)?;
                                let the_literal = CLiteral::new(the_atom, parsed_int.is_positive());

                                if !clause_buffer.iter().any(|l| *l == the_literal) {
                                    clause_buffer.push(the_literal);
                                }
                            }
                        }
                    }
                }
            }

            buffer.clear();

            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter).into()),
            }
        }

        if !clause_buffer.is_empty() {
            log::warn!(target: targets::PARSE, "Unterminated clause dropped: {}", clause_buffer.as_string());
        }

        let info = ParserInfo {
            expected_atoms,
            expected_clauses,
            added_atoms: self.atom_db.count() - initial_atoms,
            added_clauses: clause_counter,
        };

        log::info!(target: targets::PARSE, "Parsing complete with {} atoms and {} clauses added", info.added_atoms, info.added_clauses);

        Ok(info)
    }
}
