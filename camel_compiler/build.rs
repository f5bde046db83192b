// build.rs - TOML-driven constant generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    lexical: LexicalLimits,
    syntax: SyntaxLimits,
    automaton: AutomatonLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct LexicalLimits {
    max_identifier_length: usize,
    max_number_length: usize,
    max_token_count: usize,
}

#[derive(serde::Deserialize)]
struct SyntaxLimits {
    max_parse_depth: usize,
    max_error_history: usize,
}

#[derive(serde::Deserialize)]
struct AutomatonLimits {
    max_trace_length: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CAMEL_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=CAMEL_CONFIG_DIR");

    let profile = env::var("CAMEL_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("CAMEL_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Find workspace root (parent of camel_compiler directory)
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_limits(&config, &profile);
    generate_constants(&config, &profile);

    println!(
        "cargo:warning=Generated constants from {}",
        config_path.display()
    );
}

fn validate_limits(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_TOKEN_COUNT: usize = 10_000_000;
    const ABSOLUTE_MAX_PARSE_DEPTH: usize = 10_000;

    if config.lexical.max_token_count == 0 {
        panic!("max_token_count cannot be zero");
    }

    if config.lexical.max_token_count > ABSOLUTE_MAX_TOKEN_COUNT {
        panic!("max_token_count exceeds absolute maximum");
    }

    if config.syntax.max_parse_depth == 0 || config.syntax.max_parse_depth > ABSOLUTE_MAX_PARSE_DEPTH
    {
        panic!("max_parse_depth out of range");
    }

    // A digit run longer than 19 characters cannot fit in i64 anyway
    if config.lexical.max_number_length > 19 {
        panic!("max_number_length exceeds i64 digit capacity");
    }

    if config.automaton.max_trace_length < config.lexical.max_token_count / 100 {
        panic!("max_trace_length too small relative to max_token_count");
    }

    if profile == "production" && config.logging.log_buffer_size > 100_000 {
        panic!("PRODUCTION: log_buffer_size too high for production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod lexical {{
        pub const MAX_IDENTIFIER_LENGTH: usize = {};
        pub const MAX_NUMBER_LENGTH: usize = {};
        pub const MAX_TOKEN_COUNT: usize = {};
    }}

    pub mod syntax {{
        pub const MAX_PARSE_DEPTH: usize = {};
        pub const MAX_ERROR_HISTORY: usize = {};
    }}

    pub mod automaton {{
        pub const MAX_TRACE_LENGTH: usize = {};
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
    }}
}}
"#,
        profile,
        config.lexical.max_identifier_length,
        config.lexical.max_number_length,
        config.lexical.max_token_count,
        config.syntax.max_parse_depth,
        config.syntax.max_error_history,
        config.automaton.max_trace_length,
        config.logging.log_buffer_size,
        config.logging.max_log_message_length,
    );

    fs::write(output_path, constants_code).unwrap();
}
