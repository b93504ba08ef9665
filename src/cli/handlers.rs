use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read, Write},
    time::Instant,
};

use tracing::debug;

use crate::core::{chart::ChartProcessor, config::Config, error::ChartError};

use super::parse::Cli;

const BUF_CAP: usize = 1 << 16; // 64 KiB

pub fn chart(a: &Cli) -> Result<(), ChartError> {
    let cfg = Config::builder()
        .decimal_marker(a.decimal_char)
        .bar_char(a.bar_char)
        .width(a.width)
        .fraction(a.fraction)
        .build()?;
    debug!(?cfg, file = %a.file, "configured");

    let t_ingest = Instant::now();
    let mut processor = ChartProcessor::new(cfg)?;
    if a.file == "-" {
        feed_lines(&mut processor, io::stdin().lock())?;
    } else {
        feed_lines(&mut processor, File::open(&a.file)?)?;
    }
    let rows = processor.len();
    let dur_ingest = t_ingest.elapsed().as_micros();

    let t_render = Instant::now();
    let mut out = processor.finalize()?;
    if !out.ends_with('\n') {
        out.push('\n');
    }
    let dur_render = t_render.elapsed().as_micros();
    debug!("ingest: {dur_ingest} µs   render: {dur_render} µs   ({rows} rows)");

    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Feed every line of `src`, terminators kept, into `processor`.
fn feed_lines<R: Read>(processor: &mut ChartProcessor, src: R) -> Result<(), ChartError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    loop {
        buf.clear();
        if rdr.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        processor.feed(String::from_utf8_lossy(&buf).into_owned())?;
    }
    Ok(())
}
