use clap::{Parser, ValueEnum};
use math_audio_elimination::{
    AugmentedSystem, Method, PivotStrategy, SolverConfig, determinant_with, lu_decompose,
    solve_with_config,
};
use ndarray::{Array1, Array2};
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{fs, process};

#[derive(Parser, Debug)]
#[command(
    name = "solve_system",
    about = "Solve a dense linear system given as a JSON augmented matrix"
)]
struct Cli {
    /// JSON file with the augmented matrix, either `[[a, b, rhs], ...]` or
    /// `{"matrix": [...], "solver": {...}}` (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Solution method (overrides the method in the input file)
    #[arg(long, value_enum)]
    method: Option<MethodChoice>,

    /// Run every method and report each outcome
    #[arg(long)]
    all: bool,

    /// Pivots with magnitude at or below this value count as zero
    #[arg(long)]
    pivot_tolerance: Option<f64>,

    /// Print the L, U and P factors for LU methods
    #[arg(long)]
    show_factors: bool,

    /// Print the determinant of the coefficient matrix
    #[arg(long)]
    determinant: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum MethodChoice {
    Gauss,
    GaussPartialPivot,
    GaussJordan,
    GaussJordanPartialPivot,
    Lu,
    LuPartialPivot,
    Cramer,
}

impl From<MethodChoice> for Method {
    fn from(choice: MethodChoice) -> Self {
        match choice {
            MethodChoice::Gauss => Method::Gauss,
            MethodChoice::GaussPartialPivot => Method::GaussPartialPivot,
            MethodChoice::GaussJordan => Method::GaussJordan,
            MethodChoice::GaussJordanPartialPivot => Method::GaussJordanPartialPivot,
            MethodChoice::Lu => Method::Lu,
            MethodChoice::LuPartialPivot => Method::LuPartialPivot,
            MethodChoice::Cramer => Method::Cramer,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InputDocument {
    Rows(Vec<Vec<f64>>),
    Document {
        matrix: Vec<Vec<f64>>,
        #[serde(default)]
        solver: Option<SolverConfig<f64>>,
    },
}

fn read_input(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {e}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("cannot read stdin: {e}"))?;
            Ok(buffer)
        }
    }
}

fn load_system(
    path: Option<&Path>,
) -> Result<(AugmentedSystem<f64>, Option<SolverConfig<f64>>), String> {
    let text = read_input(path)?;
    let document: InputDocument =
        serde_json::from_str(&text).map_err(|e| format!("invalid JSON input: {e}"))?;

    let (rows, solver) = match document {
        InputDocument::Rows(rows) => (rows, None),
        InputDocument::Document { matrix, solver } => (matrix, solver),
    };

    let system = AugmentedSystem::from_rows(rows).map_err(|e| e.to_string())?;
    Ok((system, solver))
}

fn print_matrix(matrix: &Array2<f64>) {
    for row in matrix.rows() {
        let line: Vec<String> = row.iter().map(|v| format!("{v:>10.4}")).collect();
        println!("{}", line.join(" "));
    }
}

fn print_solution(x: &Array1<f64>) {
    println!("Solution:");
    for (i, value) in x.iter().enumerate() {
        println!("x{} = {value}", i + 1);
    }
}

/// Returns `false` when the method failed
fn run_method(
    system: &AugmentedSystem<f64>,
    config: &SolverConfig<f64>,
    show_factors: bool,
) -> bool {
    println!("\n{}:", config.method.description());

    let lu_method = matches!(config.method, Method::Lu | Method::LuPartialPivot);
    let outcome = if show_factors && lu_method {
        lu_decompose(system, &config.elimination()).map(|solution| {
            println!("L:");
            print_matrix(&solution.factors.l);
            println!("U:");
            print_matrix(&solution.factors.u);
            println!("P: {:?}", solution.factors.permutation.indices());
            solution.x
        })
    } else {
        solve_with_config(system, config)
    };

    match outcome {
        Ok(x) => {
            print_solution(&x);
            true
        }
        Err(e) => {
            eprintln!("Error ({}): {e}", config.method);
            false
        }
    }
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    let (system, file_config) = match load_system(args.input.as_deref()) {
        Ok(loaded) => loaded,
        Err(message) => {
            eprintln!("Error: {message}");
            process::exit(2);
        }
    };

    let mut config = file_config.unwrap_or_default();
    if let Some(choice) = args.method {
        config.method = choice.into();
    }
    if let Some(tolerance) = args.pivot_tolerance {
        config.pivot_tolerance = tolerance;
    }

    println!("Augmented matrix:");
    print_matrix(system.matrix());

    if args.determinant {
        let coefficients = system.coefficients().to_owned();
        match determinant_with(&coefficients, PivotStrategy::Partial, config.pivot_tolerance) {
            Ok(det) => println!("\ndet(A) = {det}"),
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    let methods = if args.all {
        Method::ALL.to_vec()
    } else {
        vec![config.method]
    };

    let mut all_succeeded = true;
    for method in methods {
        let run = SolverConfig { method, ..config };
        all_succeeded &= run_method(&system, &run, args.show_factors);
    }

    if !all_succeeded {
        process::exit(1);
    }
}
