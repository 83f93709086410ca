use crate::actions::{self, ActionEnv, Rhs, Value};
use crate::ast::{Program, Unparsable};
use crate::coolp_trace;
use crate::recovery::{self, Resync, RECOVERY_SHIFTS};
use crate::{
    Action, Diagnostic, DiagnosticSink, Nonterminal, ParseFailure, ParseStack, ParseTable,
    ParserConfig, Production, StateId, Terminal, Token, TokenSource,
};

/// Parses a COOL program
///
/// Syntax errors are reported to `sink` and recovered from where the grammar allows it;
/// the returned program then contains `Unparsable` nodes in place of the broken
/// constructs. The parse fails when recovery is impossible, when more than
/// `config.max_errors` errors are reported, or when the stacks outgrow
/// `config.max_stack_depth`.
pub fn parse<S, D>(
    source: S,
    sink: &mut D,
    config: &ParserConfig,
) -> Result<Program, ParseFailure>
where
    S: TokenSource,
    D: DiagnosticSink + ?Sized,
{
    Parser::new(source, sink, config).run()
}

/// State of one parse
///
/// Holds the parser stacks, the single buffered lookahead token, the error counter and
/// the recovery countdown. Nothing outlives the parse.
pub struct Parser<'a, S, D: ?Sized> {
    source: S,
    sink: &'a mut D,
    config: &'a ParserConfig,
    table: ParseTable,
    stack: ParseStack<Value>,
    env: ActionEnv,
    lookahead: Option<Token>,
    last_line: usize,
    errors: usize,
    /// Tokens still to be shifted before errors are reported again
    error_status: u8,
    /// Diagnostic of the error being recovered from
    recovering: Option<Diagnostic>,
}

impl<'a, S, D> Parser<'a, S, D>
where
    S: TokenSource,
    D: DiagnosticSink + ?Sized,
{
    pub fn new(source: S, sink: &'a mut D, config: &'a ParserConfig) -> Self {
        let table = ParseTable::new();
        let stack = ParseStack::new(
            table.initial_state(),
            Value::Empty,
            1,
            config.initial_stack_depth,
            config.max_stack_depth,
        );
        Parser {
            source,
            sink,
            config,
            table,
            stack,
            env: ActionEnv::new(&config.source_name),
            lookahead: None,
            last_line: 1,
            errors: 0,
            error_status: 0,
            recovering: None,
        }
    }

    pub fn run(mut self) -> Result<Program, ParseFailure> {
        loop {
            let state = self.stack.top_state();
            let action = if self.table.consults_lookahead(state) {
                let kind = self.lookahead().kind;
                self.table.action(state, kind)
            } else {
                self.table.default_action(state)
            };

            match action {
                Action::Shift(target) => self.shift(target)?,
                Action::Reduce(production) => self.reduce(production)?,
                Action::Accept => return Ok(self.accept()),
                Action::Error => self.recover()?,
            }
        }
    }

    /// The buffered lookahead, pulling a token from the source if none is held
    fn lookahead(&mut self) -> &Token {
        let source = &mut self.source;
        let last_line = &mut self.last_line;
        self.lookahead.get_or_insert_with(|| next_token(source, last_line))
    }

    fn shift(&mut self, target: StateId) -> Result<(), ParseFailure> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => next_token(&mut self.source, &mut self.last_line),
        };
        coolp_trace!("shift {} -> state {}", token, target);
        self.error_status = self.error_status.saturating_sub(1);
        self.push(target, Value::Token(token.value), token.line)
    }

    fn reduce(&mut self, production: Production) -> Result<(), ParseFailure> {
        coolp_trace!("reduce {}", production);
        let slots = self.stack.pop(production.len());
        let line = match slots.first() {
            Some((_, line)) => *line,
            None => self.stack.top_line(),
        };
        let value = actions::reduce(production, Rhs::new(slots), &self.env);

        let exposed = self.stack.top_state();
        let target = match self.table.goto(exposed, production.lhs()) {
            Some(target) => target,
            None => {
                eprintln!(
                    "Fatal error: No goto from state {} on {}.",
                    exposed,
                    production.lhs()
                );
                panic!("Fatal error: This is a bug in coolp. Please report this.");
            }
        };
        self.push(target, value, line)
    }

    /// Shifting the end of input completes the start rule `$accept -> program $end`,
    /// so the stack holds exactly the bottom slot and the program.
    fn accept(mut self) -> Program {
        coolp_trace!("accept");
        if self.stack.depth() == 2 {
            if let Some((Value::Program(program), _)) = self.stack.pop(1).pop() {
                return program;
            }
        }
        eprintln!("Fatal error: Encountered unexpected stack in accept action");
        panic!("Fatal error: This is a bug in coolp. Please report this.");
    }

    fn recover(&mut self) -> Result<(), ParseFailure> {
        let token = self.lookahead().clone();

        if self.error_status == 0 {
            let diagnostic = Diagnostic::syntax_error(&self.config.source_name, &token);
            coolp_trace!("{}", diagnostic);
            self.report(&diagnostic)?;
            self.recovering = Some(diagnostic);
        }

        if self.error_status == RECOVERY_SHIFTS {
            if token.kind == Terminal::End {
                coolp_trace!("abort: end of input while recovering");
                return Err(ParseFailure::Aborted {
                    errors: self.errors,
                });
            }
            coolp_trace!("discard {}", token);
            self.lookahead = None;
        }

        let resync = match recovery::unwind(&mut self.stack, &self.table) {
            Some(resync) => resync,
            None => {
                coolp_trace!("abort: no state accepts an error");
                return Err(ParseFailure::Aborted {
                    errors: self.errors,
                });
            }
        };

        let diagnostic = match &self.recovering {
            Some(diagnostic) => diagnostic.clone(),
            None => Diagnostic::syntax_error(&self.config.source_name, &token),
        };
        self.error_status = RECOVERY_SHIFTS;
        match resync {
            Resync::Error {
                target,
                popped_line,
            } => {
                let line = popped_line.unwrap_or(token.line);
                self.push(target, Value::Error(diagnostic), line)
            }
            Resync::NextClass { popped_line } => {
                let line = popped_line.unwrap_or(token.line);
                self.skip_to_next_class(Unparsable { line, diagnostic })
            }
        }
    }

    /// Drops tokens up to the next `class` or the end of input and reopens the class
    /// list on the stack so that the parse continues with the following class.
    fn skip_to_next_class(&mut self, unparsable: Unparsable) -> Result<(), ParseFailure> {
        loop {
            let token = self.lookahead();
            if token.kind == Terminal::Class || token.kind == Terminal::End {
                break;
            }
            coolp_trace!("discard {}", token);
            self.lookahead = None;
        }

        let initial = self.table.initial_state();
        let class_list = match self.table.goto(initial, Nonterminal::ClassList) {
            Some(state) => state,
            None => {
                eprintln!("Fatal error: No goto from state {} on class_list.", initial);
                panic!("Fatal error: This is a bug in coolp. Please report this.");
            }
        };
        let (value, line) = match self.stack.pop(1).pop() {
            Some(slot) => slot,
            None => {
                eprintln!("Fatal error: Encountered unexpected stack in class recovery");
                panic!("Fatal error: This is a bug in coolp. Please report this.");
            }
        };
        let classes = actions::reopen_class_list(value, unparsable);
        self.push(class_list, classes, line)
    }

    fn report(&mut self, diagnostic: &Diagnostic) -> Result<(), ParseFailure> {
        self.sink.report(diagnostic);
        self.errors += 1;
        if self.errors > self.config.max_errors {
            return Err(ParseFailure::TooManyErrors {
                errors: self.errors,
            });
        }
        Ok(())
    }

    fn push(&mut self, state: StateId, value: Value, line: usize) -> Result<(), ParseFailure> {
        if self.stack.push(state, value, line).is_ok() {
            return Ok(());
        }
        let near = match &self.lookahead {
            Some(token) => token.clone(),
            None => Token::end(self.last_line),
        };
        let diagnostic =
            Diagnostic::at_token(&self.config.source_name, "memory exhausted", &near);
        coolp_trace!("{}", diagnostic);
        self.report(&diagnostic)?;
        Err(ParseFailure::StackExhausted {
            errors: self.errors,
        })
    }
}

/// Pulls the next token; an exhausted source yields the end token on the last line seen
fn next_token<S: TokenSource>(source: &mut S, last_line: &mut usize) -> Token {
    let token = match source.next_token() {
        Some(token) => {
            *last_line = token.line;
            token
        }
        None => Token::end(*last_line),
    };
    coolp_trace!("read {} on line {}", token, token.line);
    token
}
