use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, ValueEnum};

use simplex_tableaux::algorithm::error::TableauError;
use simplex_tableaux::algorithm::solve::Solution;
use simplex_tableaux::algorithm::strategy::pivot_rule::{Dantzig, FirstProfitable};
use simplex_tableaux::algorithm::tableau::Tableau;
use simplex_tableaux::algorithm::PivotSelection;
use simplex_tableaux::io::{from_strings, import};

/// Solve `max c^T x s.t. Ax <= b, x >= 0` by pivoting on an exact simplex tableau.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the problem, see the `io` module for the format
    #[arg(conflicts_with_all = ["matrix", "rhs", "cost"])]
    problem_file: Option<PathBuf>,
    /// Constraint matrix, rows separated by `;`, e.g. "8 3; 1 1; 1 4"
    #[arg(short = 'A', long, requires_all = ["rhs", "cost"], allow_hyphen_values = true)]
    matrix: Option<String>,
    /// Right-hand side, e.g. "24 4 12"
    #[arg(short, long, allow_hyphen_values = true)]
    rhs: Option<String>,
    /// Cost vector, e.g. "2 1"
    #[arg(short, long, allow_hyphen_values = true)]
    cost: Option<String>,
    /// Only print the solution, not every pivot
    #[arg(short, long)]
    quiet: bool,
    /// Label the rows with `cons1, .., obj`
    #[arg(long)]
    row_labels: bool,
    /// Rule selecting the entering column
    #[arg(long, value_enum, default_value_t = Rule::Dantzig)]
    rule: Rule,
    /// Apply at most this many pivots, show the result and restore the original tableau
    #[arg(long)]
    steps: Option<usize>,
}

#[derive(Copy, Clone, ValueEnum)]
enum Rule {
    /// Most negative relative cost
    Dantzig,
    /// First negative relative cost
    FirstProfitable,
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();

    let read = match (&opts.problem_file, &opts.matrix, &opts.rhs, &opts.cost) {
        (Some(path), ..) => import(path),
        (None, Some(a), Some(b), Some(c)) => from_strings(a, b, c),
        _ => {
            eprintln!("Provide either a problem file, or --matrix, --rhs and --cost.");
            exit(2);
        },
    };
    let mut tableau = match read {
        Ok(tableau) => tableau,
        Err(error) => {
            eprintln!("Couldn't read the problem: {}", error);
            exit(1);
        },
    };

    if let Some(steps) = opts.steps {
        step(&mut tableau, steps, opts.rule, opts.row_labels);
        return;
    }

    let verbose = !opts.quiet;
    if verbose && opts.row_labels {
        println!("{}", tableau.render(true));
    }
    // Labelled output is printed here, the solver only prints plain tableaux
    let result = match opts.rule {
        Rule::Dantzig => tableau.pivot_solve_with::<Dantzig>(verbose && !opts.row_labels),
        Rule::FirstProfitable => tableau.pivot_solve_with::<FirstProfitable>(verbose && !opts.row_labels),
    };

    match result {
        Ok(solution) => if let Err(error) = report(&tableau, &solution, verbose && opts.row_labels) {
            eprintln!("Couldn't replay the solution: {}", error);
            exit(1);
        },
        Err(TableauError::UnboundedLp { column }) => {
            let name = &tableau.column_names()[column];
            println!("Problem is unbounded: {} can be increased without limit.", name);
        },
        Err(error) => {
            eprintln!("Couldn't solve the problem: {}", error);
            exit(1);
        },
    }
}

fn report(tableau: &Tableau, solution: &Solution, show_pivots: bool) -> Result<(), TableauError> {
    if show_pivots {
        let mut replay = tableau.clone();
        for &(row, column) in &solution.pivots {
            replay.pivot_in_place(row, column)?;
            println!("\nPivot at ({}, {})\n\n{}", row, column, replay.render(true));
        }
    }
    print!("{}", solution);

    Ok(())
}

fn select(tableau: &Tableau, rule: Rule) -> PivotSelection {
    match rule {
        Rule::Dantzig => tableau.find_pivot_with::<Dantzig>(),
        Rule::FirstProfitable => tableau.find_pivot_with::<FirstProfitable>(),
    }
}

fn step(tableau: &mut Tableau, steps: usize, rule: Rule, row_labels: bool) {
    println!("{}", tableau.render(row_labels));
    for _ in 0..steps {
        match select(tableau, rule) {
            PivotSelection::Pivot { row, column } => {
                if let Err(error) = tableau.pivot_in_place(row, column) {
                    eprintln!("{}", error);
                    exit(1);
                }
                println!("\nPivot at ({}, {})\n\n{}", row, column, tableau.render(row_labels));
            },
            PivotSelection::Optimal => {
                println!("\nThe tableau is optimal.");
                break;
            },
            PivotSelection::Unbounded { column } => {
                println!("\nUnbounded in the direction of column {}.", column);
                break;
            },
        }
    }

    match tableau.restore() {
        Ok(original) => println!("\nRestored after {} pivots:\n\n{}", tableau.history_len(), original.render(row_labels)),
        Err(error) => println!("\n{}", error),
    }
}
