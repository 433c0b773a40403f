use crate::common::LfsData;
use crate::env::Env;

pub fn eval(ast: LfsData, env: &Env) -> LfsData {
    trace!("eval, ast: {:?}, env: {:?}", ast, env);

    ast
}
