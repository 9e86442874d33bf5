//! Inline SVG rendering of a [`Figure`].
//!
//! The x axis is indexed by trading day, so weekends and holidays leave no
//! gaps. Each panel gets its own linear value scale.

use std::borrow::Cow;
use std::io::{self, Write};

use chrono::NaiveDate;
use stockdash_chart::{Figure, Panel, PanelKind, Trace};

const MARGIN_LEFT: f64 = 72.0;
const MARGIN_RIGHT: f64 = 24.0;
const TITLE_HEIGHT: f64 = 36.0;
const PANEL_HEADER: f64 = 22.0;
const PANEL_GAP: f64 = 8.0;
const AXIS_HEIGHT: f64 = 28.0;
const Y_TICKS: usize = 5;
const X_LABELS: usize = 6;
const LEGEND_CHAR_WIDTH: f64 = 6.5;

/// Maps a trading-day index to a horizontal pixel position.
#[derive(Debug, Clone, Copy)]
struct XAxis {
    left: f64,
    step: f64,
}

impl XAxis {
    fn center(self, index: usize) -> f64 {
        self.left + (index as f64 + 0.5) * self.step
    }

    fn body_width(self) -> f64 {
        (self.step * 0.7).max(0.5)
    }
}

/// Maps a value to a vertical pixel position within one panel.
#[derive(Debug, Clone, Copy)]
struct YScale {
    lo: f64,
    hi: f64,
    top: f64,
    height: f64,
}

impl YScale {
    fn y(self, value: f64) -> f64 {
        let span = self.hi - self.lo;
        if span > 0.0 {
            self.top + (self.hi - value) / span * self.height
        } else {
            self.top + self.height / 2.0
        }
    }
}

/// Writes `figure` as one `<svg>` element.
pub(crate) fn render_figure<W: Write + ?Sized>(figure: &Figure, w: &mut W) -> io::Result<()> {
    let width = f64::from(figure.width);
    let height = TITLE_HEIGHT + f64::from(figure.height()) + AXIS_HEIGHT;
    let plot_width = (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
    let x = XAxis {
        left: MARGIN_LEFT,
        step: plot_width / figure.dates.len().max(1) as f64,
    };

    writeln!(
        w,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" role="img">"#
    )?;
    writeln!(
        w,
        r#"<rect width="{width}" height="{height}" fill="{}"/>"#,
        escape(&figure.paper_background)
    )?;
    writeln!(
        w,
        r#"<text class="figure-title" x="{:.1}" y="24" text-anchor="middle">{}</text>"#,
        width / 2.0,
        escape(&figure.title)
    )?;

    let mut top = TITLE_HEIGHT;
    for panel in &figure.panels {
        render_panel(w, figure, panel, x, top, plot_width)?;
        top += f64::from(panel.height);
    }
    render_date_axis(w, &figure.dates, x, top)?;
    writeln!(w, "</svg>")
}

fn render_panel<W: Write + ?Sized>(
    w: &mut W,
    figure: &Figure,
    panel: &Panel,
    x: XAxis,
    top: f64,
    plot_width: f64,
) -> io::Result<()> {
    let (lo, hi) = panel.value_range();
    let y = YScale {
        lo,
        hi,
        top: top + PANEL_HEADER,
        height: (f64::from(panel.height) - PANEL_HEADER - PANEL_GAP).max(1.0),
    };

    writeln!(w, r#"<g class="panel panel-{}">"#, panel_class(panel.kind))?;
    writeln!(
        w,
        r##"<rect x="{MARGIN_LEFT}" y="{:.1}" width="{plot_width:.1}" height="{:.1}" fill="{}" stroke="#b0b8c4"/>"##,
        y.top,
        y.height,
        escape(&figure.plot_background)
    )?;
    render_header(w, panel, top)?;
    render_value_axis(w, panel, y, plot_width)?;

    for level in &panel.reference_levels {
        writeln!(
            w,
            r##"<line class="reference" x1="{MARGIN_LEFT}" x2="{:.1}" y1="{y1:.1}" y2="{y1:.1}" stroke="#607080" stroke-dasharray="4 3"/>"##,
            MARGIN_LEFT + plot_width,
            y1 = y.y(*level)
        )?;
    }

    for trace in &panel.traces {
        match trace {
            Trace::Candlestick {
                open,
                high,
                low,
                close,
                increasing,
                decreasing,
                ..
            } => render_candles(
                w,
                &figure.dates,
                [open, high, low, close],
                [increasing, decreasing],
                x,
                y,
            )?,
            Trace::Line {
                values,
                color,
                width,
                ..
            } => {
                let d = line_path(values, x, y);
                if !d.is_empty() {
                    writeln!(
                        w,
                        r#"<path d="{d}" fill="none" stroke="{}" stroke-width="{width}"/>"#,
                        escape(color)
                    )?;
                }
            }
            Trace::Fill {
                upper,
                lower,
                color,
                ..
            } => {
                for points in fill_polygons(upper, lower, x, y) {
                    writeln!(
                        w,
                        r#"<polygon points="{points}" fill="{}" stroke="none"/>"#,
                        escape(color)
                    )?;
                }
            }
            Trace::Bars {
                values,
                rising,
                up_color,
                down_color,
                ..
            } => render_bars(w, values, rising, [up_color, down_color], x, y)?,
        }
    }
    writeln!(w, "</g>")
}

fn render_header<W: Write + ?Sized>(w: &mut W, panel: &Panel, top: f64) -> io::Result<()> {
    let baseline = top + 15.0;
    writeln!(
        w,
        r#"<text class="panel-title" x="{MARGIN_LEFT}" y="{baseline:.1}">{}</text>"#,
        escape(&panel.title)
    )?;

    let mut cursor = MARGIN_LEFT + (panel.title.chars().count() as f64 + 3.0) * 7.5;
    for trace in &panel.traces {
        let color = legend_color(trace);
        writeln!(
            w,
            r#"<rect x="{cursor:.1}" y="{:.1}" width="10" height="10" fill="{}"/>"#,
            baseline - 9.0,
            escape(color)
        )?;
        writeln!(
            w,
            r#"<text class="legend" x="{:.1}" y="{baseline:.1}">{}</text>"#,
            cursor + 14.0,
            escape(trace.name())
        )?;
        cursor += 24.0 + trace.name().chars().count() as f64 * LEGEND_CHAR_WIDTH;
    }

    if let Some(label) = &panel.y_label {
        let mid = top + f64::from(panel.height) / 2.0;
        writeln!(
            w,
            r#"<text class="axis-label" x="14" y="{mid:.1}" transform="rotate(-90 14 {mid:.1})" text-anchor="middle">{}</text>"#,
            escape(label)
        )?;
    }
    Ok(())
}

fn legend_color(trace: &Trace) -> &str {
    match trace {
        Trace::Line { color, .. } | Trace::Fill { color, .. } => color,
        Trace::Candlestick { increasing, .. } => increasing,
        Trace::Bars { up_color, .. } => up_color,
    }
}

fn render_value_axis<W: Write + ?Sized>(
    w: &mut W,
    panel: &Panel,
    y: YScale,
    plot_width: f64,
) -> io::Result<()> {
    for tick in 0..Y_TICKS {
        let value = y.lo + (y.hi - y.lo) * tick as f64 / (Y_TICKS - 1) as f64;
        let py = y.y(value);
        writeln!(
            w,
            r##"<line class="grid" x1="{MARGIN_LEFT}" x2="{:.1}" y1="{py:.1}" y2="{py:.1}" stroke="#e3e7ed"/>"##,
            MARGIN_LEFT + plot_width
        )?;
        writeln!(
            w,
            r#"<text class="tick" x="{:.1}" y="{:.1}" text-anchor="end">{}</text>"#,
            MARGIN_LEFT - 6.0,
            py + 4.0,
            format_value(value, panel.kind)
        )?;
    }
    Ok(())
}

fn render_date_axis<W: Write + ?Sized>(
    w: &mut W,
    dates: &[NaiveDate],
    x: XAxis,
    top: f64,
) -> io::Result<()> {
    let Some(last) = dates.len().checked_sub(1) else {
        return Ok(());
    };
    let mut indices: Vec<usize> = (0..X_LABELS).map(|k| k * last / (X_LABELS - 1)).collect();
    indices.dedup();
    for i in indices {
        writeln!(
            w,
            r#"<text class="tick" x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
            x.center(i),
            top + 16.0,
            dates[i].format("%Y-%m-%d")
        )?;
    }
    Ok(())
}

fn render_candles<W: Write + ?Sized>(
    w: &mut W,
    dates: &[NaiveDate],
    [open, high, low, close]: [&Vec<f64>; 4],
    [increasing, decreasing]: [&String; 2],
    x: XAxis,
    y: YScale,
) -> io::Result<()> {
    let body = x.body_width();
    for (i, date) in dates.iter().enumerate().take(close.len()) {
        let (o, h, l, c) = (open[i], high[i], low[i], close[i]);
        let color = escape(if c >= o { increasing } else { decreasing });
        let cx = x.center(i);
        let top = y.y(o.max(c));
        let height = (y.y(o.min(c)) - top).max(1.0);
        writeln!(
            w,
            r#"<g class="candle" fill="{color}" stroke="{color}"><title>{date}  O {o:.2}  H {h:.2}  L {l:.2}  C {c:.2}</title><line x1="{cx:.1}" x2="{cx:.1}" y1="{:.1}" y2="{:.1}"/><rect x="{:.1}" y="{top:.1}" width="{body:.1}" height="{height:.1}"/></g>"#,
            y.y(h),
            y.y(l),
            cx - body / 2.0,
        )?;
    }
    Ok(())
}

fn render_bars<W: Write + ?Sized>(
    w: &mut W,
    values: &[Option<f64>],
    rising: &[bool],
    [up, down]: [&String; 2],
    x: XAxis,
    y: YScale,
) -> io::Result<()> {
    let width = x.body_width();
    let base = y.y(0.0);
    for (i, value) in values.iter().enumerate() {
        let Some(value) = value.filter(|v| v.is_finite()) else {
            continue;
        };
        let color = if rising.get(i).copied().unwrap_or(true) { up } else { down };
        let py = y.y(value);
        writeln!(
            w,
            r#"<rect x="{:.1}" y="{:.1}" width="{width:.1}" height="{:.1}" fill="{}" opacity="0.7"/>"#,
            x.center(i) - width / 2.0,
            py.min(base),
            (py - base).abs(),
            escape(color)
        )?;
    }
    Ok(())
}

/// Builds SVG path data, lifting the pen wherever a value is missing.
fn line_path(values: &[Option<f64>], x: XAxis, y: YScale) -> String {
    let mut d = String::new();
    let mut pen_down = false;
    for (i, value) in values.iter().enumerate() {
        match value.filter(|v| v.is_finite()) {
            Some(v) => {
                let command = if pen_down { 'L' } else { 'M' };
                d.push_str(&format!("{command}{:.1},{:.1}", x.center(i), y.y(v)));
                pen_down = true;
            }
            None => pen_down = false,
        }
    }
    d
}

/// Returns one polygon per run of dates where both edges are defined.
fn fill_polygons(
    upper: &[Option<f64>],
    lower: &[Option<f64>],
    x: XAxis,
    y: YScale,
) -> Vec<String> {
    let mut polygons = Vec::new();
    let mut run: Vec<(usize, f64, f64)> = Vec::new();
    let pairs = upper.iter().zip(lower).map(|(u, l)| u.zip(*l));
    for (i, pair) in pairs.chain(std::iter::once(None)).enumerate() {
        match pair {
            Some((u, l)) if u.is_finite() && l.is_finite() => run.push((i, u, l)),
            _ => {
                if run.len() > 1 {
                    let forward = run.iter().map(|&(i, u, _)| (x.center(i), y.y(u)));
                    let back = run.iter().rev().map(|&(i, _, l)| (x.center(i), y.y(l)));
                    let points: Vec<_> = forward
                        .chain(back)
                        .map(|(px, py)| format!("{px:.1},{py:.1}"))
                        .collect();
                    polygons.push(points.join(" "));
                }
                run.clear();
            }
        }
    }
    polygons
}

fn format_value(value: f64, kind: PanelKind) -> String {
    let magnitude = value.abs();
    match kind {
        PanelKind::Volume if magnitude >= 1e9 => format!("{:.1}B", value / 1e9),
        PanelKind::Volume if magnitude >= 1e6 => format!("{:.1}M", value / 1e6),
        PanelKind::Volume if magnitude >= 1e3 => format!("{:.0}k", value / 1e3),
        PanelKind::Volume => format!("{value:.0}"),
        PanelKind::Price | PanelKind::Oscillator => format!("{value:.2}"),
    }
}

const fn panel_class(kind: PanelKind) -> &'static str {
    match kind {
        PanelKind::Price => "price",
        PanelKind::Volume => "volume",
        PanelKind::Oscillator => "oscillator",
    }
}

/// Escapes text for use in XML content and attribute values.
pub(crate) fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: XAxis = XAxis {
        left: 0.0,
        step: 10.0,
    };
    const Y: YScale = YScale {
        lo: 0.0,
        hi: 100.0,
        top: 0.0,
        height: 100.0,
    };

    #[test]
    fn test_scales() {
        assert_eq!(X.center(0), 5.0);
        assert_eq!(X.center(3), 35.0);
        assert_eq!(Y.y(100.0), 0.0);
        assert_eq!(Y.y(25.0), 75.0);
    }

    #[test]
    fn test_line_path_breaks_on_missing_values() {
        let values = [Some(50.0), Some(60.0), None, Some(70.0)];
        assert_eq!(line_path(&values, X, Y), "M5.0,50.0L15.0,40.0M35.0,30.0");
        assert_eq!(line_path(&[None, None], X, Y), "");
    }

    #[test]
    fn test_fill_polygons_per_run() {
        let upper = [Some(60.0), Some(60.0), None, Some(80.0), Some(80.0), Some(80.0)];
        let lower = [Some(40.0), Some(40.0), Some(1.0), None, Some(20.0), Some(20.0)];
        let polygons = fill_polygons(&upper, &lower, X, Y);
        assert_eq!(
            polygons,
            vec![
                "5.0,40.0 15.0,40.0 15.0,60.0 5.0,60.0".to_string(),
                "45.0,20.0 55.0,20.0 55.0,80.0 45.0,80.0".to_string(),
            ]
        );
    }

    #[test]
    fn test_escape() {
        assert!(matches!(escape("AAPL"), Cow::Borrowed("AAPL")));
        assert_eq!(escape("<a & 'b'>"), "&lt;a &amp; &#39;b&#39;&gt;");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(2_500_000.0, PanelKind::Volume), "2.5M");
        assert_eq!(format_value(12_000.0, PanelKind::Volume), "12k");
        assert_eq!(format_value(101.256, PanelKind::Price), "101.26");
    }
}
