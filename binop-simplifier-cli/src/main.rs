use anyhow::{bail, Context, Result};
use binop_simplifier::interpreter::rewrite;
use binop_simplifier::interpreter::simplifier::Pass;
use binop_simplifier::interpreter::syntax::notation::Notation;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::Verbosity;
use log::{debug, info};
use std::fs;
use std::path::PathBuf;

/// Simplifies binary arithmetic expressions written in prefix notation
///
/// Expressions are parsed recursively, so how deeply they can nest is bounded by the
/// stack: a few thousand nested operators are fine, hundreds of thousands are not.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Arguments {
    /// The prefix expression to rewrite, e.g. "* + x 0 1". Put `--` in front of
    /// expressions starting with `-`.
    expression: Option<String>,

    /// Read expressions from a file instead, one per line
    #[clap(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// The rewrite pass to apply
    #[clap(short, long, value_enum, default_value = "simplify")]
    pass: PassArgument,

    /// The notation to print results in
    #[clap(short, long, value_enum, default_value = "prefix")]
    notation: NotationArgument,

    /// Also print the rewritten expression tree
    #[clap(short, long)]
    tree: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[clap(rename_all = "snake_case")]
enum PassArgument {
    ArithId,
    MultId,
    MultByZero,
    ConstantFold,
    Simplify,
}

impl From<PassArgument> for Pass {
    fn from(argument: PassArgument) -> Pass {
        match argument {
            PassArgument::ArithId => Pass::AdditiveIdentity,
            PassArgument::MultId => Pass::MultiplicativeIdentity,
            PassArgument::MultByZero => Pass::MultByZero,
            PassArgument::ConstantFold => Pass::ConstantFold,
            PassArgument::Simplify => Pass::Simplify,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum NotationArgument {
    Prefix,
    Infix,
    Postfix,
}

impl From<NotationArgument> for Notation {
    fn from(argument: NotationArgument) -> Notation {
        match argument {
            NotationArgument::Prefix => Notation::Prefix,
            NotationArgument::Infix => Notation::Infix,
            NotationArgument::Postfix => Notation::Postfix,
        }
    }
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    for expression in read_expressions(&args)? {
        print!("{}", rewrite_expression(&args, &expression)?);
    }

    Ok(())
}

/// Rewrites one expression and returns everything to print for it.
fn rewrite_expression(args: &Arguments, expression: &str) -> Result<String> {
    let pass = Pass::from(args.pass);
    let tree = rewrite(expression, pass)?;
    debug!(
        "Rewrote '{}' into {} nodes, height {}",
        expression,
        tree.node_count(),
        tree.height()
    );
    info!("{}: '{}' -> '{}'", pass, expression, tree.prefix_str());

    let mut output = format!("{}\n", Notation::from(args.notation).render(&tree));
    if args.tree {
        output.push_str(&tree.to_string());
    }
    Ok(output)
}

fn read_expressions(args: &Arguments) -> Result<Vec<String>> {
    if let Some(path) = &args.file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read expressions from {}", path.display()))?;
        let expressions: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        debug!("Read {} expressions from {}", expressions.len(), path.display());
        return Ok(expressions);
    }

    match &args.expression {
        Some(expression) => Ok(vec![expression.clone()]),
        None => bail!("Expected an expression or --file <FILE>"),
    }
}
