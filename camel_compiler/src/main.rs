use camel_compiler::{logging, pipeline};
use std::env;
use std::io::Read;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize global logging system
    logging::init_global_logging()?;

    // Validate pipeline configuration
    pipeline::validate_pipeline()?;

    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "--help" {
        print_help(&args[0]);
        return Ok(());
    }

    let source = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    if source.trim().is_empty() {
        eprintln!("Error: no source given");
        eprintln!("Usage: {} \"x = y + 5 ;\"", args[0]);
        std::process::exit(1);
    }

    let report = pipeline::analyze(&source);
    println!("{}", report.render());

    // A validator rejection is a reported result, not a failure; only an
    // error in one of the phases makes the run unsuccessful
    if let Some(error) = report.first_error() {
        eprintln!("FAILED: {}", error);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help(program_name: &str) {
    println!("Camel Compiler v{}", env!("CARGO_PKG_VERSION"));
    println!("Front-end for the Camel assignment-statement language");
    println!();
    println!("USAGE:");
    println!("    {} \"<statement>\"        # Analyze a statement", program_name);
    println!("    echo \"x = y + 5 ;\" | {}  # Read from stdin", program_name);
    println!();
    println!("OUTPUT:");
    println!("    State Transitions    Every step the statement automaton took");
    println!("    Lexical Analysis     Token, type, and position table");
    println!("    Parser Output        Derivation tree, or the first syntax error");
    println!();
    println!("EXAMPLES:");
    println!("    {} \"x = y + 5 ;\"", program_name);
    println!("    {} \"x = 2 + 3 * 4 ;\"", program_name);
    println!("    {} \"total = ( a + b ) / 2 ;\"", program_name);
    println!();
    println!("CONFIGURATION:");
    println!("    {}", camel_compiler::config::build_info::source_info());
    println!("    CAMEL_LOG_LEVEL=debug|info|warning|error");
    println!("    CAMEL_STRUCTURED_LOGGING=true for JSON log lines");
}

#[cfg(test)]
mod tests {
    use camel_compiler::pipeline;

    #[test]
    fn test_analyze_produces_renderable_report() {
        let report = pipeline::analyze("x = y + 5 ;");
        let rendered = report.render();
        assert!(rendered.contains("State Transitions"));
        assert!(report.fully_successful());
    }

    #[test]
    fn test_rejected_statement_still_renders() {
        let report = pipeline::analyze("x = ;");
        let rendered = report.render();
        assert!(rendered.contains("not accepted"));
        assert!(rendered.contains("Parsing failed"));
    }
}
