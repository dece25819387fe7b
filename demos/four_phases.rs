// ============================================================================
// Four Phases Demo
// BCD add, BCD subtract, Excess-3 add, Excess-3 subtract
// ============================================================================
//
// Usage: cargo run --example four_phases [--features logging] -- [A B]

use decimal_adder::prelude::*;
use std::sync::Arc;

/// Renders collected trace events to stdout
struct ConsolePresenter {
    collected: CollectingTraceHandler,
}

impl TraceHandler for ConsolePresenter {
    fn on_event(&self, event: TraceEvent) {
        self.collected.on_event(event);
    }
}

impl ConsolePresenter {
    fn flush(&self) {
        for event in self.collected.take() {
            match event {
                TraceEvent::Digit { .. } => println!("    {}", event),
                _ => println!("  {}", event),
            }
        }
    }
}

const USAGE: &str = "usage: four_phases [A B]  (A and B non-negative integers)";

/// Operands from the command line, or 5 and 7 when none are given.
fn operands<I>(args: I) -> Option<(i64, i64)>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();

    match args.as_slice() {
        [] => Some((5, 7)),
        [a, b] => match (a.parse(), b.parse()) {
            (Ok(a), Ok(b)) => Some((a, b)),
            _ => None,
        },
        _ => None,
    }
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    let Some((a, b)) = operands(std::env::args().skip(1)) else {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };
    let presenter = Arc::new(ConsolePresenter {
        collected: CollectingTraceHandler::new(),
    });

    let phases = [
        ("Phase 1: BCD adder", Encoding::Bcd, Operation::Add),
        ("Phase 2: BCD subtractor (ten's complement)", Encoding::Bcd, Operation::Subtract),
        ("Phase 3: Excess-3 adder", Encoding::Excess3, Operation::Add),
        ("Phase 4: Excess-3 subtractor", Encoding::Excess3, Operation::Subtract),
    ];

    for (title, encoding, operation) in phases {
        println!("\n=== {} ===", title);

        let calculator = match CalculatorBuilder::new()
            .encoding(encoding)
            .trace(true)
            .build(presenter.clone())
        {
            Ok(calculator) => calculator,
            Err(reason) => {
                eprintln!("configuration rejected: {}", reason);
                return;
            },
        };

        match calculator.compute(operation, a, b) {
            Ok(outcome) => {
                presenter.flush();
                println!("Result: {}", outcome);
                println!(
                    "(Verification: {})",
                    if outcome.matches_reference {
                        "CORRECT"
                    } else {
                        "INCORRECT"
                    }
                );
            },
            Err(err) => println!("Error: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_operands_default_and_explicit() {
        assert_eq!(operands(args(&[])), Some((5, 7)));
        assert_eq!(operands(args(&["12", "30"])), Some((12, 30)));
    }

    #[test]
    fn test_operands_reject_unparsable() {
        assert_eq!(operands(args(&["12", "abc"])), None);
        assert_eq!(operands(args(&["12"])), None);
        assert_eq!(operands(args(&["1", "2", "3"])), None);
    }
}
