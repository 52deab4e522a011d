use crate::shared::types::ViewportMode;

/// Every size that changes between layout tiers. Components get this as a
/// prop and turn it into inline styles; colors and fixed spacing live in
/// the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub mode: ViewportMode,
    pub header_font_px: u32,
    pub grid_columns: u32,
    pub gap_px: u32,
    /// Grid span of the left and right columns.
    pub side_span: u32,
    /// Grid span of the middle (charts) column.
    pub chart_span: u32,
    pub chart_height: &'static str,
    pub battery_height_px: u32,
    pub card_padding_px: u32,
    pub page_padding_px: u32,
    pub weather_icon_px: i32,
    /// Left-column metrics laid out as a 3-column sub-grid (tablet only).
    pub metrics_subgrid: bool,
    pub impact_columns: u32,
}

impl LayoutParams {
    pub fn for_mode(mode: ViewportMode) -> Self {
        let mobile = mode.is_mobile();
        let (header_font_px, grid_columns, chart_height) = match mode {
            ViewportMode::Mobile => (24, 1, "300px"),
            ViewportMode::Tablet => (32, 2, "40vh"),
            ViewportMode::Desktop => (36, 12, "auto"),
        };
        let (side_span, chart_span) = match mode {
            ViewportMode::Desktop => (3, 6),
            _ => (1, 1),
        };
        Self {
            mode,
            header_font_px,
            grid_columns,
            gap_px: if mobile { 12 } else { 16 },
            side_span,
            chart_span,
            chart_height,
            battery_height_px: if mobile { 160 } else { 208 },
            card_padding_px: if mobile { 16 } else { 20 },
            page_padding_px: if mobile { 12 } else { 24 },
            weather_icon_px: if mobile { 24 } else { 32 },
            metrics_subgrid: mode.is_tablet(),
            impact_columns: if mobile { 2 } else { 1 },
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.mode.is_mobile()
    }

    pub fn page_style(&self) -> String {
        format!("padding:{}px", self.page_padding_px)
    }

    pub fn grid_style(&self) -> String {
        format!(
            "grid-template-columns:repeat({}, minmax(0, 1fr));gap:{}px",
            self.grid_columns, self.gap_px
        )
    }

    pub fn column_style(&self, span: u32) -> String {
        format!("grid-column:span {span};gap:{}px", self.gap_px)
    }

    /// Left column: a plain stack, or a 3-wide sub-grid on tablets.
    pub fn metrics_column_style(&self) -> String {
        let base = self.column_style(self.side_span);
        if self.metrics_subgrid {
            format!("{base};display:grid;grid-template-columns:repeat(3, minmax(0, 1fr))")
        } else {
            base
        }
    }

    pub fn card_style(&self) -> String {
        format!("padding:{}px", self.card_padding_px)
    }

    pub fn chart_card_style(&self) -> String {
        format!("padding:{}px;height:{}", self.card_padding_px, self.chart_height)
    }

    /// Font size for card text: (label, value) in px.
    pub fn text_px(&self) -> (u32, u32) {
        if self.is_mobile() {
            (12, 24)
        } else {
            (14, 30)
        }
    }
}
