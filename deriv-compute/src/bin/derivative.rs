use clap::{Parser, ValueEnum};
use deriv_compute::numerical::{ctxt::Ctxt, eval::Eval};
use deriv_compute::primitive::PRECISION;
use deriv_compute::symbolic::{derivative, Expr, ExprRef};
use log::info;
use std::process::ExitCode;

/// A built-in expression to differentiate.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Sample {
    /// (x*x + 3 + 8*x) / (5*x*x - 5^x)
    Rational,

    /// x^3
    Cube,

    /// 2^x
    Exponential,

    /// 3 / x, whose derivative keeps a positive sign
    Reciprocal,

    /// (x + 1)^x, which cannot be differentiated
    Unsupported,
}

impl Sample {
    fn build(self) -> ExprRef {
        let x = Expr::var();
        let c = Expr::constant;
        match self {
            Sample::Rational => {
                let numerator = Expr::add(
                    &Expr::add(&Expr::mul(&x, &x), &c(3.0)),
                    &Expr::mul(&c(8.0), &x),
                );
                let denominator = Expr::sub(
                    &Expr::mul(&Expr::mul(&c(5.0), &x), &x),
                    &Expr::pow(&c(5.0), &x),
                );
                Expr::div(&numerator, &denominator)
            },
            Sample::Cube => Expr::pow(&x, &c(3.0)),
            Sample::Exponential => Expr::pow(&c(2.0), &x),
            Sample::Reciprocal => Expr::div(&c(3.0), &x),
            Sample::Unsupported => Expr::pow(&Expr::add(&x, &c(1.0)), &x),
        }
    }
}

/// Differentiates a built-in expression and evaluates the derivative at a point.
#[derive(Parser)]
#[command(version)]
struct Arguments {
    /// The expression to differentiate.
    #[arg(long, value_enum, default_value_t = Sample::Rational)]
    sample: Sample,

    /// The value of `x` to evaluate the derivative at.
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    at: f64,

    /// The number of bits of precision to evaluate with.
    #[arg(long, default_value_t = PRECISION)]
    precision: u32,

    /// Also print the derivative itself, as produced (unsimplified).
    #[arg(long)]
    tree: bool,
}

fn main() -> ExitCode {
    let args = Arguments::parse();

    let f = args.sample.build();
    info!("differentiating `{}` ({} nodes)", f, f.node_count());
    println!("f(x)  = {f}");

    let deriv = match derivative(&f) {
        Ok(deriv) => deriv,
        Err(err) => {
            let (source, err) = err.locate(&f);
            err.report_to_stderr("input", &source).unwrap();
            return ExitCode::FAILURE;
        },
    };

    if args.tree {
        println!("f'(x) = {deriv}");
    }
    info!("derivative has {} nodes, depth {}", deriv.node_count(), deriv.depth());

    let mut ctxt = Ctxt::new().with_precision(args.precision);
    ctxt.set_var(args.at);
    match deriv.eval(&ctxt) {
        Ok(value) => {
            println!("f'({}) = {}", args.at, value);
            ExitCode::SUCCESS
        },
        Err(err) => {
            err.report_to_stderr("derivative", &deriv.to_string()).unwrap();
            ExitCode::FAILURE
        },
    }
}
