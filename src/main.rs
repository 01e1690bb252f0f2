use daytask::commands::Cli;
use daytask::libs::logging;

fn main() -> anyhow::Result<()> {
    logging::init();
    Cli::menu()
}
