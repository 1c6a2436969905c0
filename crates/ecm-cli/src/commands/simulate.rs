//! Simulated bench session: seed, mutate, report, export.

use super::util::{export_outputs, print_report};
use anyhow::Result;
use ecm_core::{Roster, SimCell};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use tracing::info;

pub fn handle(
    cells: usize,
    add: Option<usize>,
    remove: &[String],
    seed: Option<u64>,
    csv: Option<&Path>,
    json: Option<&Path>,
) -> Result<()> {
    let mut rng = match seed {
        Some(value) => StdRng::seed_from_u64(value),
        None => StdRng::from_entropy(),
    };

    let mut roster: Roster<SimCell> = Roster::seeded(cells, &mut rng);
    info!("Seeded bench with {} cells", roster.len());

    if let Some(count) = add {
        let added = roster.add_random(count, &mut rng)?;
        info!("{} cell(s) added", added);
    }

    for ident in remove {
        let removed = roster.remove(ident);
        if removed > 0 {
            info!("{} removed", ident);
        } else {
            info!("{} not present, nothing removed", ident);
        }
    }

    print_report(&roster)?;
    export_outputs(&roster, csv, json)?;
    Ok(())
}
