mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::parse_cli;
use workflow::Workflow;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in drive::theme::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    let workflow = Workflow::from_config(resolved);
    if cli.list {
        return workflow.list(cli.output);
    }
    workflow.run()
}
