use std::io::Write;

use anyhow::Context as _;

use crate::{
    average::TrimmedAverage, config::CYCLE_SIZE, decision::IrrigationDecision, sample::Sample,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleReport {
    pub average: TrimmedAverage,
    pub decision: IrrigationDecision,
}

pub fn write_sample_line<W: Write>(
    out: &mut W,
    count: usize,
    sample: &Sample,
) -> Result<(), anyhow::Error> {
    writeln!(
        out,
        "[{}] sample {count}/{CYCLE_SIZE}: temperature={:.2} C humidity={:.2} % salinity={:.2} dS/m",
        sample.taken_at().format("%H:%M:%S"),
        sample.temperature(),
        sample.humidity(),
        sample.salinity(),
    )
    .context("Failed to write sample line")?;
    Ok(())
}

pub fn write_report<W: Write>(out: &mut W, report: &CycleReport) -> Result<(), anyhow::Error> {
    let CycleReport { average, decision } = report;

    write!(
        out,
        "\
==== cycle report ====
samples averaged: {}
avg temperature:  {:.2} C
avg humidity:     {:.2} %
avg salinity:     {:.2} dS/m
decision:         {}
======================
",
        average.remaining, average.temperature, average.humidity, average.salinity, decision,
    )
    .context("Failed to write cycle report")?;
    out.flush().context("Failed to flush cycle report")?;
    Ok(())
}
