use ascii_plot::{
    Figure, FigureConfig, Glyph, HistStyle, Series, Style, bar_series, histogram, plot,
};

const TICK: char = '┼';
const DIAGONALS: [char; 2] = ['⟋', '⟍'];

fn config(w: usize, h: usize) -> FigureConfig {
    FigureConfig::builder().shape(w, h).build().unwrap()
}

fn filled(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

fn range(lo: i32, hi: i32) -> Vec<f64> {
    (lo..=hi).map(f64::from).collect()
}

// ============================================================================
// End-to-end rendering
// ============================================================================

#[test]
fn diagonal_shows_axis_cross_and_a_diagonal_glyph() {
    let s = Series::new(range(0, 5), range(0, 5))
        .unwrap()
        .glyph(Glyph::Auto);
    let out = plot(config(40, 20), s).unwrap();
    assert!(out.contains(TICK), "{out}");
    assert!(out.chars().any(|c| DIAGONALS.contains(&c)), "{out}");
}

#[test]
fn output_is_height_lines_of_width_cells() {
    let s = Series::new(range(-5, 5), range(-5, 5)).unwrap();
    let out = plot(config(40, 20), s).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 20);
    assert!(lines.iter().all(|l| l.chars().count() == 40));
}

#[test]
fn single_point_without_decorations_fills_one_cell() {
    let cfg = FigureConfig::builder()
        .shape(30, 12)
        .draw_axes(false)
        .draw_labels(false)
        .build()
        .unwrap();
    let s = Series::new(vec![2.0], vec![3.0]).unwrap();
    let out = plot(cfg, s).unwrap();
    assert_eq!(filled(&out), 1, "{out}");
}

#[test]
fn legend_lists_labels_in_append_order() {
    let mut fig = Figure::new(config(40, 20)).unwrap();
    fig.append(
        Series::new(range(0, 5), range(0, 5))
            .unwrap()
            .label("rising"),
    )
    .unwrap();
    fig.append(
        Series::new(range(0, 5), range(0, 5).into_iter().rev().collect())
            .unwrap()
            .glyph(Glyph::Literal('x'))
            .label("falling"),
    )
    .unwrap();
    let out = fig.render();
    let first = out.find("rising").expect("first label");
    let second = out.find("falling").expect("second label");
    assert!(first < second, "{out}");
}

#[test]
fn legend_entry_reads_glyph_gap_label() {
    let mut fig = Figure::new(config(20, 10)).unwrap();
    fig.append(
        Series::new(vec![1.0, 2.0], vec![3.0, 4.0])
            .unwrap()
            .glyph(Glyph::Literal('*'))
            .label("Test Data"),
    )
    .unwrap();
    let out = fig.render();
    assert!(out.contains("* Test Data"), "{out}");
}

#[test]
fn collapsed_extent_renders_without_labels() {
    let cfg = FigureConfig::builder()
        .shape(3, 3)
        .margins(0.5, 0.5)
        .build()
        .unwrap();
    let s = Series::new(range(0, 5), range(0, 5)).unwrap();
    let out = plot(cfg, s).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.chars().count() == 3));
    assert!(!out.chars().any(|c| c.is_ascii_digit()), "{out}");
}

#[test]
fn rendering_twice_is_byte_identical() {
    let mut fig = Figure::new(config(40, 20)).unwrap();
    fig.append(Series::new(range(0, 10), range(0, 10)).unwrap().label("a"))
        .unwrap();
    fig.append(
        Series::new(range(0, 10), range(0, 10).iter().map(|v| v * v).collect())
            .unwrap()
            .style(Style::Points)
            .label("b"),
    )
    .unwrap();
    let first = fig.render();
    assert_eq!(first, fig.render());
}

#[test]
fn pinned_limits_hide_data_outside_them() {
    let cfg = FigureConfig::builder()
        .shape(30, 10)
        .x_range(100.0, 200.0)
        .y_range(100.0, 200.0)
        .draw_axes(false)
        .draw_labels(false)
        .build()
        .unwrap();
    let s = Series::new(range(0, 5), range(0, 5))
        .unwrap()
        .style(Style::Points);
    assert_eq!(filled(&plot(cfg, s).unwrap()), 0);
}

// ============================================================================
// Reshaping helpers through a figure
// ============================================================================

#[test]
fn bars_render_their_glyph() {
    let bars = bar_series(&[1.0, 2.0, 3.0], &[4.0, 5.0, 3.0], 0.8).unwrap();
    let out = plot(config(30, 10), bars).unwrap();
    assert!(out.contains('█'), "{out}");
}

#[test]
fn stem_histogram_renders() {
    let h = histogram(&[-1.0, 0.0, 1.0], &[2.0, 7.0, 3.0], HistStyle::Stem).unwrap();
    let out = plot(config(30, 10), h).unwrap();
    assert!(out.contains('|'), "{out}");
}
