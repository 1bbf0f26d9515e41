use anyhow::Result;
use fatmix::cli::parse_args;
use fatmix::commands::{self, Outcome};
use fatmix::storage;

fn main() -> Result<()> {
    let cli = parse_args();

    let mut state = storage::load_state(&cli.store)?;
    match commands::dispatch(cli.command, &mut state, cli.lang_dir.as_deref())? {
        Outcome::Done => storage::save_state(&cli.store, &state),
        // The notice is already out; a rejected input leaves the store as it was.
        Outcome::Rejected => std::process::exit(1),
    }
}
