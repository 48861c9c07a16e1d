//! Chart rendering
//!
//! Charts are drawn with ratatui widgets into an off-screen [`Buffer`] and
//! saved as plain text, one file per chart.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use lifespan_analysis::chart::{AgeFrequencyData, ChartData, StatisticsChartData, StatusCounts};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{Axis, Bar, BarChart, Block, Chart, Dataset, GraphType, LegendPosition, Widget},
};

const CHART_WIDTH: u16 = 100;
const CHART_HEIGHT: u16 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Statistics,
    AgeFrequency,
    Status,
}

impl ChartKind {
    pub const ALL: [Self; 3] = [Self::Statistics, Self::AgeFrequency, Self::Status];

    /// Name of the saved chart file without extension.
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Statistics => "Statistics",
            Self::AgeFrequency => "Age_Freq",
            Self::Status => "Status",
        }
    }
}

/// A rendered chart.
#[derive(Debug, Clone)]
pub struct ChartArtifact {
    pub kind: ChartKind,
    pub lines: Vec<String>,
}

impl ChartArtifact {
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.kind.file_stem())
    }

    pub fn text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    /// Writes the chart into `dir`, replacing any previous file.
    pub fn save(&self, dir: &Path) -> anyhow::Result<PathBuf> {
        let path = dir.join(self.file_name());
        fs::write(&path, self.text())
            .with_context(|| format!("Failed to write chart: {}", path.display()))?;
        Ok(path)
    }
}

pub fn render_all(charts: &ChartData) -> Vec<ChartArtifact> {
    ChartKind::ALL
        .into_iter()
        .map(|kind| render(kind, charts))
        .collect()
}

pub fn render(kind: ChartKind, charts: &ChartData) -> ChartArtifact {
    let area = Rect::new(0, 0, CHART_WIDTH, CHART_HEIGHT);
    let mut buf = Buffer::empty(area);
    match kind {
        ChartKind::Statistics => StatisticsChart(&charts.statistics).render(area, &mut buf),
        ChartKind::AgeFrequency => AgeFrequencyChart(&charts.age_frequency).render(area, &mut buf),
        ChartKind::Status => StatusChart(charts.status).render(area, &mut buf),
    }
    ChartArtifact {
        kind,
        lines: buffer_lines(&buf),
    }
}

fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let line = (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>();
            line.trim_end().to_owned()
        })
        .collect()
}

struct StatisticsChart<'a>(&'a StatisticsChartData);

impl Widget for StatisticsChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let data = self.0;
        #[expect(clippy::cast_precision_loss)]
        let bars = data
            .bars
            .iter()
            .enumerate()
            .map(|(i, bar)| ((i + 1) as f64, bar.value))
            .collect::<Vec<_>>();
        #[expect(clippy::cast_precision_loss)]
        let x_max = (data.bars.len() + 1) as f64;
        let mean_line = [(0.0, data.reference_line), (x_max, data.reference_line)];
        let y_max = (data.max_value() * 1.1).max(1.0);

        let datasets = vec![
            Dataset::default()
                .marker(Marker::Block)
                .graph_type(GraphType::Bar)
                .style(Style::default().fg(Color::Cyan))
                .data(&bars),
            Dataset::default()
                .name("Mean")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Red))
                .data(&mean_line),
        ];

        let x_labels = std::iter::once("")
            .chain(data.bars.iter().map(|bar| bar.label))
            .chain(std::iter::once(""))
            .collect::<Vec<_>>();
        let x_axis = Axis::default().bounds([0.0, x_max]).labels(x_labels);
        let y_axis = Axis::default()
            .title("days")
            .bounds([0.0, y_max])
            .labels([
                "0".to_owned(),
                format!("{:.0}", y_max / 2.0),
                format!("{y_max:.0}"),
            ]);

        Chart::new(datasets)
            .block(Block::bordered().title("Statistics"))
            .x_axis(x_axis)
            .y_axis(y_axis)
            .legend_position(Some(LegendPosition::TopRight))
            .render(area, buf);
    }
}

struct AgeFrequencyChart<'a>(&'a AgeFrequencyData);

impl Widget for AgeFrequencyChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let frequencies = &self.0.frequencies;
        #[expect(clippy::cast_precision_loss)]
        let points = frequencies
            .bins
            .iter()
            .map(|bin| (bin.value as f64, bin.count as f64))
            .collect::<Vec<_>>();
        let (min_age, max_age) = frequencies.value_range().unwrap_or((0, 0));
        #[expect(clippy::cast_precision_loss)]
        let x_bounds = [(min_age - 1) as f64, (max_age + 1) as f64];
        let ticks = self.0.count_ticks();
        #[expect(clippy::cast_precision_loss)]
        let y_max = (*ticks.end()).max(1) as f64;

        let dataset = Dataset::default()
            .marker(Marker::Block)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(Color::Cyan))
            .data(&points);
        let x_axis = Axis::default()
            .title("lived years")
            .bounds(x_bounds)
            .labels([
                (min_age - 1).to_string(),
                ((min_age + max_age) / 2).to_string(),
                (max_age + 1).to_string(),
            ]);
        let y_axis = Axis::default()
            .title("count")
            .bounds([0.0, y_max])
            .labels(ticks.map(|count| count.to_string()));

        Chart::new(vec![dataset])
            .block(Block::bordered().title(format!(
                "Age Frequency (n = {})",
                frequencies.total()
            )))
            .x_axis(x_axis)
            .y_axis(y_axis)
            .render(area, buf);
    }
}

struct StatusChart(StatusCounts);

impl Widget for StatusChart {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let StatusCounts { living, deceased } = self.0;
        let bars = [("Living", living), ("Dead", deceased)]
            .into_iter()
            .map(|(label, count)| {
                Bar::with_label(label, count as u64).text_value(count.to_string())
            })
            .collect::<Vec<_>>();

        BarChart::new(bars)
            .block(Block::bordered().title("Living vs Dead"))
            .bar_width(10)
            .bar_gap(4)
            .bar_style(Style::default().fg(Color::Cyan))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use lifespan_analysis::{dataset::Dataset as RecordSet, record::Record};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn charts() -> ChartData {
        let dataset = RecordSet::new(
            vec![
                Record {
                    name: "John Adams".to_owned(),
                    birth_date: date(1735, 10, 30),
                    death_date: Some(date(1826, 7, 4)),
                },
                Record {
                    name: "Thomas Jefferson".to_owned(),
                    birth_date: date(1743, 4, 13),
                    death_date: Some(date(1826, 7, 4)),
                },
                Record {
                    name: "Jimmy Carter".to_owned(),
                    birth_date: date(1924, 10, 1),
                    death_date: None,
                },
            ],
            date(2000, 1, 1),
        );
        ChartData::new(&dataset, &dataset.summary().unwrap())
    }

    #[test]
    fn test_render_all_covers_every_kind() {
        let artifacts = render_all(&charts());
        let names = artifacts
            .iter()
            .map(ChartArtifact::file_name)
            .collect::<Vec<_>>();
        assert_eq!(names, ["Statistics.txt", "Age_Freq.txt", "Status.txt"]);
        for artifact in &artifacts {
            assert_eq!(artifact.lines.len(), usize::from(CHART_HEIGHT));
        }
    }

    #[test]
    fn test_statistics_chart_has_title_and_legend() {
        let text = render(ChartKind::Statistics, &charts()).text();
        assert!(text.contains("Statistics"));
        assert!(text.contains("Mean"));
    }

    #[test]
    fn test_age_frequency_chart_has_title() {
        let text = render(ChartKind::AgeFrequency, &charts()).text();
        assert!(text.contains("Age Frequency (n = 3)"));
        assert!(text.contains("count"));
    }

    #[test]
    fn test_status_chart_labels() {
        let text = render(ChartKind::Status, &charts()).text();
        assert!(text.contains("Living vs Dead"));
        assert!(text.contains("Living"));
        assert!(text.contains("Dead"));
    }

    #[test]
    fn test_save_writes_file_named_after_kind() {
        let dir = std::env::temp_dir().join(format!("lifespan-plot-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let artifact = render(ChartKind::Status, &charts());
        let path = artifact.save(&dir).unwrap();
        assert_eq!(path, dir.join("Status.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), artifact.text());

        fs::remove_dir_all(dir).unwrap();
    }
}
