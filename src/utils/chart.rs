//! SVG geometry shared by the chart components. Everything is in viewBox
//! units; y grows downward.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Round a raw tick step up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let exp = 10f64.powf(raw.log10().floor());
    let f = raw / exp;
    let nf = if f <= 1.0 {
        1.0
    } else if f <= 2.0 {
        2.0
    } else if f <= 2.5 {
        2.5
    } else if f <= 5.0 {
        5.0
    } else {
        10.0
    };
    nf * exp
}

/// Y axis: (step, ceiling) so that `ceiling >= max` and there are at most `ticks` steps.
pub fn y_axis(max: f64, ticks: usize) -> (f64, f64) {
    let step = nice_step(max / ticks.max(1) as f64);
    let ceiling = ((max / step).ceil() * step).max(step);
    (step, ceiling)
}

pub fn tick_values(step: f64, ceiling: f64) -> Vec<f64> {
    let n = (ceiling / step).round() as usize;
    (0..=n).map(|i| i as f64 * step).collect()
}

/// X of the i-th of n evenly spread points, first and last on the edges.
pub fn point_x(area: &PlotArea, i: usize, n: usize) -> f64 {
    if n <= 1 {
        return area.left + area.width / 2.0;
    }
    area.left + area.width * (i as f64) / ((n - 1) as f64)
}

pub fn value_y(area: &PlotArea, v: f64, ceiling: f64) -> f64 {
    if ceiling <= 0.0 {
        return area.bottom();
    }
    let t = (v / ceiling).clamp(0.0, 1.0);
    area.bottom() - t * area.height
}

pub fn line_path(area: &PlotArea, values: &[f64], ceiling: f64) -> String {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{cmd} {:.2} {:.2}", point_x(area, i, n), value_y(area, v, ceiling))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Line path closed down to the baseline, for the filled area.
pub fn area_path(area: &PlotArea, values: &[f64], ceiling: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let n = values.len();
    format!(
        "{} L {:.2} {:.2} L {:.2} {:.2} Z",
        line_path(area, values, ceiling),
        point_x(area, n - 1, n),
        area.bottom(),
        point_x(area, 0, n),
        area.bottom()
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarRect {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// One bar per band; `fill` is the share of the band the bar covers.
pub fn bar_rects(area: &PlotArea, values: &[f64], ceiling: f64, fill: f64) -> Vec<BarRect> {
    let n = values.len().max(1) as f64;
    let band = area.width / n;
    let width = band * fill.clamp(0.05, 1.0);
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let y = value_y(area, v, ceiling);
            BarRect {
                x: area.left + band * i as f64 + (band - width) / 2.0,
                y,
                width,
                height: area.bottom() - y,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: PlotArea = PlotArea {
        left: 40.0,
        top: 10.0,
        width: 140.0,
        height: 100.0,
    };

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(1.45), 2.0);
        assert_eq!(nice_step(155.0), 200.0);
        assert_eq!(nice_step(0.3), 0.5);
        assert_eq!(nice_step(7.0), 10.0);
        assert_eq!(nice_step(0.0), 1.0);
        assert_eq!(nice_step(f64::NAN), 1.0);
    }

    #[test]
    fn axis_covers_max() {
        assert_eq!(y_axis(5.8, 4), (2.0, 6.0));
        assert_eq!(y_axis(620.0, 4), (200.0, 800.0));
        assert_eq!(y_axis(0.0, 4), (1.0, 1.0));
        assert_eq!(tick_values(2.0, 6.0), vec![0.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn points_span_the_area() {
        assert_eq!(point_x(&AREA, 0, 8), AREA.left);
        assert_eq!(point_x(&AREA, 7, 8), AREA.right());
        assert_eq!(point_x(&AREA, 0, 1), 110.0);
        assert_eq!(value_y(&AREA, 0.0, 6.0), AREA.bottom());
        assert_eq!(value_y(&AREA, 6.0, 6.0), AREA.top);
        assert_eq!(value_y(&AREA, 9.0, 6.0), AREA.top);
    }

    #[test]
    fn paths() {
        let line = line_path(&AREA, &[0.0, 6.0], 6.0);
        assert_eq!(line, "M 40.00 110.00 L 180.00 10.00");
        let area = area_path(&AREA, &[0.0, 6.0], 6.0);
        assert!(area.starts_with(&line));
        assert!(area.ends_with("L 180.00 110.00 L 40.00 110.00 Z"));
        assert_eq!(area_path(&AREA, &[], 6.0), "");
    }

    #[test]
    fn bars_fill_their_bands() {
        let bars = bar_rects(&AREA, &[50.0, 100.0], 100.0, 0.5);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].width, 35.0);
        assert_eq!(bars[0].x, 57.5);
        assert_eq!(bars[0].height, 50.0);
        assert_eq!(bars[1].y, AREA.top);
        assert_eq!(bars[1].center_x(), 145.0);
    }
}
