extern crate lfs;

#[macro_use]
extern crate log;
extern crate env_logger;

use std::env;

use lfs::common::Identity;
use lfs::env::Env;
use lfs::repl::{Repl, ReplConfig};

fn main() {
    env_logger::init();

    // any argument at all suppresses the loop
    if env::args_os().len() > 1 {
        debug!("arguments given, not starting repl");
        return;
    }

    let repl = Repl::new(ReplConfig::default(), Identity);
    let repl_env = Env::new();

    match repl.run_stdio(&repl_env) {
        Ok(outcome) => debug!("repl finished: {:?}", outcome),

        Err(err) => error!("{}", err),
    }
}
