//! Reference copy of the compile-time limits
//!
//! The values here mirror config/development.toml, the defaults that build.rs
//! turns into the generated `crate::config::compile_time` module. Scanner and
//! parser code imports from this module so the limits stay browsable next to
//! their documentation.

pub mod compile_time {
    pub mod lexical {
        /// Maximum identifier length in characters
        /// Prevents parser complexity attacks via enormous names
        pub const MAX_IDENTIFIER_LENGTH: usize = 255;

        /// Maximum digit count for a numeric literal
        /// 19 digits is the widest run that can still fit in i64
        pub const MAX_NUMBER_LENGTH: usize = 19;

        /// Maximum number of tokens produced from a single source string
        /// Prevents token explosion on pathological input
        pub const MAX_TOKEN_COUNT: usize = 100_000;
    }

    pub mod syntax {
        /// Maximum parser recursion depth to prevent stack overflow
        /// Only parenthesized sub-expressions nest, so this bounds '(' depth
        pub const MAX_PARSE_DEPTH: usize = 100;

        /// Maximum error history buffer size
        pub const MAX_ERROR_HISTORY: usize = 50;
    }

    pub mod automaton {
        /// Maximum transition trace length for a single validation run
        /// One record is appended per consumed token
        pub const MAX_TRACE_LENGTH: usize = 100_000;
    }
}
