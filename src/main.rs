use std::io::{self, Write};

use env_logger::Env;

use list_quicksort::driver;

fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let mut out = io::stdout().lock();
    driver::run(&mut out, driver::EXPERIMENT_LEN)?;
    out.flush()
}
