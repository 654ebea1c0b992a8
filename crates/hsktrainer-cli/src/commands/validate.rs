//! The `hsktrainer validate` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use hsktrainer_core::model::Level;

use super::{CommonOptions, Trainer};

pub fn execute(options: CommonOptions) -> Result<()> {
    let trainer = Trainer::from_options(&options)?;
    let store = trainer.engine.store();

    println!("Vocabulary: {}", store.source_name());

    let mut table = Table::new();
    table.set_header(vec!["Level", "Words", "Dropped rows", "Status"]);

    let mut loaded = 0;
    for level in Level::ALL {
        match store.load(level) {
            Ok(vocabulary) => {
                loaded += 1;
                table.add_row(vec![
                    Cell::new(level),
                    Cell::new(vocabulary.len()),
                    Cell::new(vocabulary.dropped_rows),
                    Cell::new("OK"),
                ]);
            }
            Err(e) => {
                table.add_row(vec![
                    Cell::new(level),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new(format!("WARNING: {e}")),
                ]);
            }
        }
    }

    println!("{table}");

    if loaded == Level::ALL.len() {
        println!("All levels valid.");
    } else {
        println!(
            "\n{loaded} of {} levels loaded; the others cannot be quizzed.",
            Level::ALL.len()
        );
    }

    Ok(())
}
