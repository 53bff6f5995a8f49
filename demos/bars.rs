use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use category_colors::{css, BarChart, ColorMapper, ColorRange, Dataset,
                      SortOrder, Summary};

type Err = Box<dyn Error>;

fn bars(fh: &mut impl Write, chart: &BarChart) -> Result<(), Err> {
    writeln!(fh, "<h3>{}</h3>", chart.title)?;
    writeln!(fh, "<table style=\"border-spacing: 2px\">")?;
    for b in &chart.bars {
        let width = (b.ratio * 2000.).round() as u32;
        writeln!(fh, "  <tr><td>{}</td><td><div style=\"width: {width}px; \
                      height: 16px; background-color: {}; \
                      border: 0.5px solid {}\"></div></td><td>{}</td></tr>",
                 b.label, b.color, chart.outline, b.text)?;
    }
    writeln!(fh, "</table>")?;
    Ok(())
}

fn legend(fh: &mut impl Write, mapper: &ColorMapper) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border-spacing: 0px\"><tr>")?;
    for (_, c) in mapper.gradient().range(0., 1., 64) {
        writeln!(fh, "  <td style=\"width: 4px; height: 20px; \
                      background-color: {}\"></td>", css::to_hex(c))?;
    }
    writeln!(fh, "</tr></table>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut ds = Dataset::mbti();
    ds.push_row("Korea", vec![
        Some(0.036), Some(0.092), Some(0.047), Some(0.088), Some(0.028),
        Some(0.139), Some(0.011), Some(0.058), Some(0.029), Some(0.070),
        Some(0.052), Some(0.118), Some(0.027), Some(0.094), Some(0.028),
        Some(0.083)])?;
    ds.push_row("Nowhere", vec![
        Some(0.0625), Some(0.0625), None, Some(0.0625), Some(0.0625),
        Some(0.0625), Some(0.0625), Some(0.0625), Some(0.0625), Some(0.0625),
        Some(0.0625), Some(0.0625), Some(0.0625), Some(0.0625), Some(0.0625),
        Some(0.0625)])?;
    let mapper = ColorMapper::default();

    let mut fh = BufWriter::new(File::create("bars.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>category-colors: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;
    writeln!(fh, "<h3>Gradient</h3>")?;
    legend(&mut fh, &mapper)?;
    for subject in ds.subjects() {
        let dist = ds.get(subject)?;
        for order in [SortOrder::Descending, SortOrder::Original] {
            bars(&mut fh, &BarChart::new(dist, &mapper, order))?;
        }
        let s = Summary::new(dist, SortOrder::Descending);
        if let Some((label, p)) = &s.peak {
            writeln!(fh, "<p>Largest: <b>{label}</b> ({p})</p>")?;
        }
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
