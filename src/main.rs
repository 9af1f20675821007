use brrtpath::{cli::run_cli, logging};

fn main() -> anyhow::Result<()> {
    let _guard = logging::init_logging()?;
    run_cli()
}
