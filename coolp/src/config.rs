/// Settings of a single parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Name reported in diagnostics and recorded on every class
    pub source_name: String,
    /// Reporting one error more than this aborts the parse
    pub max_errors: usize,
    pub initial_stack_depth: usize,
    /// The parse fails once the stacks would have to grow beyond this depth
    pub max_stack_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            source_name: "<stdin>".to_string(),
            max_errors: 50,
            initial_stack_depth: 200,
            max_stack_depth: 10_000,
        }
    }
}

impl ParserConfig {
    pub fn with_source_name<S: Into<String>>(mut self, source_name: S) -> Self {
        self.source_name = source_name.into();
        self
    }

    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    pub fn with_initial_stack_depth(mut self, depth: usize) -> Self {
        self.initial_stack_depth = depth;
        self
    }

    pub fn with_max_stack_depth(mut self, depth: usize) -> Self {
        self.max_stack_depth = depth;
        self
    }
}
