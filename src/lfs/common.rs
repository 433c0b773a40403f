use crate::env::Env;
use crate::eval;
use crate::printer;
use crate::reader;

/// What flows between the stages at step 0: plain text.
pub type LfsData = String;

/// The three swappable stages of the read-eval-print cycle.
///
/// The loop in `repl` only talks to this trait, so a later step plugs in a
/// real reader, evaluator and printer by providing another implementation.
pub trait Stages {
    type Ast;
    type Value;

    fn read(&self, input: &str) -> Self::Ast;

    fn eval(&self, ast: Self::Ast, env: &Env) -> Self::Value;

    fn print(&self, value: &Self::Value) -> String;

    fn rep(&self, env: &Env, input: &str) -> Self::Value {
        self.eval(self.read(input), env)
    }
}

/// Step 0 stages: every one hands its input back unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

impl Stages for Identity {
    type Ast = LfsData;
    type Value = LfsData;

    fn read(&self, input: &str) -> LfsData {
        reader::read_str(input)
    }

    fn eval(&self, ast: LfsData, env: &Env) -> LfsData {
        eval::eval(ast, env)
    }

    fn print(&self, value: &LfsData) -> String {
        printer::pr_str(value)
    }
}
