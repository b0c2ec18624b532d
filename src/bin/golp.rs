use golp::{cmdline, environment};

fn main() -> Result<(), cmdline::Error> {
    pretty_env_logger::init();
    let env = environment::make_root_environment();
    let args = std::env::args().collect();
    cmdline::launch(args, &env)
}
