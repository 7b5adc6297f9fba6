use std::fs;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use postfix_trainer::{
    convert, convert_with_steps, evaluate,
    grading::{DEFAULT_TOLERANCE, check_postfix_answer, check_value_answer},
    is_valid, solve,
};

/// postfix-trainer converts infix expressions to postfix notation, evaluates
/// postfix expressions, and checks answers to both kinds of drill.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the expression argument as a path to a file holding the
    /// expression.
    #[arg(short, long, global = true)]
    file: bool,

    /// Log each conversion and evaluation step to stderr. `RUST_LOG`
    /// overrides this.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an infix expression to postfix.
    Convert {
        /// The infix expression, e.g. "(2 + 3) * 4".
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Print the shunting-yard steps as well.
        #[arg(short, long)]
        steps: bool,
    },
    /// Evaluate a postfix expression.
    Evaluate {
        /// The postfix expression, e.g. "2 3 + 4 *".
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Convert an infix expression and evaluate the result.
    Solve {
        /// The infix expression.
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Report whether a postfix expression evaluates.
    Validate {
        /// The postfix expression.
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Check a numeric answer to a postfix expression.
    CheckValue {
        /// The postfix expression.
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// The proposed value.
        #[arg(allow_hyphen_values = true)]
        answer: String,

        /// Maximum accepted difference from the exact value.
        #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
        tolerance: f64,
    },
    /// Check a postfix answer to an infix expression.
    CheckPostfix {
        /// The infix expression.
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// The proposed postfix form.
        answer: String,
    },
}

impl Command {
    fn expression(&self) -> &str {
        match self {
            Self::Convert { expression, .. }
            | Self::Evaluate { expression }
            | Self::Solve { expression }
            | Self::Validate { expression }
            | Self::CheckValue { expression, .. }
            | Self::CheckPostfix { expression, .. } => expression,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();
}

fn run(command: &Command, expression: &str) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Convert { steps: true, .. } => {
            let conversion = convert_with_steps(expression)?;
            for step in conversion.steps.iter().flatten() {
                println!("{step}");
            }
            println!("{}", conversion.postfix);
        },
        Command::Convert { steps: false, .. } => println!("{}", convert(expression)?.postfix),
        Command::Evaluate { .. } => println!("{}", evaluate(expression)?),
        Command::Solve { .. } => {
            let solution = solve(expression)?;
            println!("{}", solution.postfix);
            println!("{}", solution.value);
        },
        Command::Validate { .. } => {
            let validity = is_valid(expression);
            match validity.error {
                None => println!("valid"),
                Some(message) => println!("invalid: {message}"),
            }
        },
        Command::CheckValue { answer, tolerance, .. } => {
            let grade = check_value_answer(expression, answer, *tolerance)?;
            if grade.correct {
                println!("correct");
            } else {
                println!("incorrect: expected {}", grade.expected);
            }
        },
        Command::CheckPostfix { answer, .. } => {
            if check_postfix_answer(expression, answer)? {
                println!("correct");
            } else {
                println!("incorrect: expected {}", convert(expression)?.postfix);
            }
        },
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = args.command.expression();
    let expression = if args.file {
        fs::read_to_string(source).unwrap_or_else(|_| {
                                      eprintln!("Failed to read the input file '{source}'. Perhaps this file does not exist?");
                                      std::process::exit(1);
                                  })
    } else {
        source.to_string()
    };

    if let Err(e) = run(&args.command, expression.trim()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
