//! Top-level menu dispatcher.

use std::io::{BufRead, Write};

use eoms_orders::OrderStore;

use crate::console::{Console, ConsoleResult};
use crate::workflows;

/// Run the operator dialog until exit (option 5) or a fatal console error.
///
/// Unrecognised options are reported and the menu is shown again; malformed
/// numeric input and end of input propagate out as fatal.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut OrderStore,
) -> ConsoleResult<()> {
    loop {
        console.write_line("")?;
        console.write_line("EOMS Menu:")?;
        console.write_line("1. Create Order")?;
        console.write_line("2. View Orders")?;
        console.write_line("3. Update Order Status")?;
        console.write_line("4. Generate Reports")?;
        console.write_line("5. Exit")?;
        let choice: i64 = console.prompt_parse("Select option: ")?;

        match choice {
            1 => workflows::create_order(console, store)?,
            2 => workflows::view_orders(console, store)?,
            3 => workflows::update_order_status(console, store)?,
            4 => workflows::generate_reports(console, store)?,
            5 => {
                console.write_line("Exiting EOMS. Goodbye!")?;
                return Ok(());
            }
            other => {
                tracing::debug!(choice = other, "unrecognised menu option");
                console.write_line("Invalid option.")?;
            }
        }
    }
}
