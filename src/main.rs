use log::error;
use nsdump::{parse_args, run};

fn main() {
    pretty_env_logger::init_timed();

    let args = parse_args();

    if let Err(err) = run(&args) {
        error!("{}", err);
        std::process::exit(1);
    }
}
