use std::io;

use eoms_cli::Console;
use eoms_orders::OrderStore;

fn main() -> anyhow::Result<()> {
    eoms_observability::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let mut store = OrderStore::new();

    eoms_cli::run(&mut console, &mut store)?;
    Ok(())
}
