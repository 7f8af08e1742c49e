//! Adjust command: correct a scenario NetCDF file against observations.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use debias_adjust::AdjustmentSettings;
use debias_grid::{adjust_cell, adjust_grid, Role, TimeSeriesSink, TimeSeriesSource};
use debias_io::{NcSink, NcSource};

use crate::cli::Cli;

/// Run the adjustment pipeline.
pub fn run(args: Cli) -> Result<()> {
    let _cmd = info_span!("adjust").entered();

    // 1. Build and validate the method settings before touching any file
    let settings = AdjustmentSettings::new(args.method.into(), args.kind.into())
        .with_n_quantiles(args.quantiles)
        .with_max_scaling_factor(args.max_scaling_factor)
        .with_interval31_scaling(!args.no_group);
    settings.validate().context("invalid method settings")?;

    // 2. Open the three inputs
    let source = NcSource::open(
        &args.reference,
        &args.control,
        &args.scenario,
        &args.variable,
        args.one_dim,
    )
    .context("failed to open input datasets")?;

    let extents = source.extents(Role::Scenario);
    info!(
        method = %settings.method(),
        kind = %settings.kind(),
        variable = %args.variable,
        n_time = extents.n_time,
        n_lat = extents.n_lat,
        n_lon = extents.n_lon,
        "starting adjustment"
    );

    let mut sink = NcSink::from_scenario(&args.output, &args.variable, source.scenario())
        .context("failed to prepare output file")?;

    // 3. Run and write
    if args.one_dim {
        if args.jobs != 1 {
            warn!("--jobs has no effect on a 1-dimensional run");
        }
        let reference = source.cell_series(Role::Reference)?;
        let control = source.cell_series(Role::Control)?;
        let scenario = source.cell_series(Role::Scenario)?;
        if reference.len() != scenario.len() || control.len() != scenario.len() {
            warn!(
                reference = reference.len(),
                control = control.len(),
                scenario = scenario.len(),
                "input series differ in length"
            );
        }
        let out = adjust_cell(&reference, &control, &scenario, &settings)?;
        sink.write_series(&out)?;
    } else {
        let cube = adjust_grid(&source, &settings, args.jobs, |done, total| {
            info!(done, total, "longitude columns adjusted");
        })?;
        sink.write_cube(&cube)?;
    }

    info!(path = %args.output.display(), "corrected output written");
    Ok(())
}
