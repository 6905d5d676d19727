//! Report sinks: aligned text tables and JSON

use crate::guidance::{
    setting_guidance, AUDIO_GUIDANCE, MODEL_GUIDANCE, SIZE_GUIDANCE, TEXTURE_GUIDANCE,
};
use anyhow::Result;
use serde_json::{Map, Value};
use slimkit_core::{
    AudioRecord, ModelRecord, PlatformGroup, PlatformSetting, ReportSink, SizeReport,
    TextureRecord, Verdict,
};
use std::io::{self, Write};

/// Marker appended to values that differ from the recommendation
const FLAG: &str = " (!)";

/// Formats a byte count with binary units and up to two decimals
pub fn format_bytes(bytes: u64) -> String {
    const SUFFIXES: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut suffix = 0;
    while size >= 1024.0 && suffix < SUFFIXES.len() - 1 {
        size /= 1024.0;
        suffix += 1;
    }

    let formatted = format!("{:.2}", size);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SUFFIXES[suffix])
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn flagged(value: impl ToString, ideal: bool) -> String {
    let mut cell = value.to_string();
    if !ideal {
        cell.push_str(FLAG);
    }
    cell
}

fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Good => "ok",
        Verdict::Bad => "change",
        Verdict::Neutral => "info",
    }
}

/// Column-aligned text table
struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let headers: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
        write_line(out, &headers, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_line(out, &rule, &widths)?;
        for row in &self.rows {
            write_line(out, row, &widths)?;
        }
        Ok(())
    }
}

fn write_line<W: Write>(out: &mut W, cells: &[String], widths: &[usize]) -> io::Result<()> {
    let last = cells.len().saturating_sub(1);
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i == last {
            line.push_str(cell);
        } else {
            line.push_str(&format!("{:<width$}  ", cell, width = width));
        }
    }
    writeln!(out, "{}", line.trim_end())
}

/// Options of the text renderer
#[derive(Debug, Clone, Copy)]
pub struct TableOptions {
    /// Size rows shown (0 = all)
    pub top: usize,
    pub guidance: bool,
}

/// Writes each report as an aligned text table
pub struct TableSink<W: Write> {
    out: W,
    options: TableOptions,
}

impl<W: Write> TableSink<W> {
    pub fn new(out: W, options: TableOptions) -> Self {
        Self { out, options }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn title(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "\n== {} ==", title)
    }

    fn empty(&mut self, what: &str) -> io::Result<()> {
        writeln!(self.out, "No {} found.", what)
    }

    fn guidance(&mut self, entries: &[(&str, &str)]) -> io::Result<()> {
        if !self.options.guidance {
            return Ok(());
        }
        writeln!(self.out)?;
        for (topic, text) in entries {
            writeln!(self.out, "{}: {}", topic, text)?;
        }
        Ok(())
    }
}

impl<W: Write> ReportSink for TableSink<W> {
    type Error = anyhow::Error;

    fn texture_report(&mut self, records: &[TextureRecord]) -> Result<()> {
        self.title("Textures")?;
        if records.is_empty() {
            self.empty("textures")?;
        } else {
            let mut table = Table::new(&[
                "Name",
                "Type",
                "Size",
                "Max Size",
                "Ideal",
                "Compression",
                "Crunch",
                "Crunch Quality",
            ]);
            for r in records {
                table.row(vec![
                    r.name.clone(),
                    r.texture_type.label().to_string(),
                    format!("{}x{}", r.width, r.height),
                    flagged(r.max_size, r.is_max_size_ideal()),
                    r.ideal_max_size().to_string(),
                    r.compression.label().to_string(),
                    yes_no(r.crunch_enabled).to_string(),
                    r.crunch_quality.to_string(),
                ]);
            }
            table.write(&mut self.out)?;
        }
        self.guidance(TEXTURE_GUIDANCE)?;
        Ok(())
    }

    fn audio_report(&mut self, records: &[AudioRecord]) -> Result<()> {
        self.title("Audio Clips")?;
        if records.is_empty() {
            self.empty("audio clips")?;
        } else {
            let mut table = Table::new(&["Name", "Load Type", "Force To Mono", "Quality"]);
            for r in records {
                table.row(vec![
                    r.name.clone(),
                    r.load_type.label().to_string(),
                    flagged(
                        if r.force_to_mono { "Enabled" } else { "Disabled" },
                        r.force_to_mono,
                    ),
                    r.quality.to_string(),
                ]);
            }
            table.write(&mut self.out)?;
        }
        self.guidance(AUDIO_GUIDANCE)?;
        Ok(())
    }

    fn model_report(&mut self, records: &[ModelRecord]) -> Result<()> {
        self.title("Models")?;
        if records.is_empty() {
            self.empty("models")?;
        } else {
            let mut table = Table::new(&[
                "Name",
                "R/W Enabled",
                "Polygons Optimized",
                "Vertices Optimized",
                "Mesh Compression",
                "Animation Compression",
            ]);
            for r in records {
                table.row(vec![
                    r.name.clone(),
                    flagged(yes_no(r.read_write_enabled), !r.read_write_enabled),
                    flagged(yes_no(r.polygons_optimized), r.polygons_optimized),
                    flagged(yes_no(r.vertices_optimized), r.vertices_optimized),
                    r.mesh_compression.label().to_string(),
                    r.animation_compression.label().to_string(),
                ]);
            }
            table.write(&mut self.out)?;
        }
        self.guidance(MODEL_GUIDANCE)?;
        Ok(())
    }

    fn size_report(&mut self, report: &SizeReport) -> Result<()> {
        self.title("Asset Sizes")?;
        if report.is_empty() {
            self.empty("tracked assets")?;
        } else {
            let shown = report.top(self.options.top);
            writeln!(
                self.out,
                "Tracked total: {} across {} assets (showing {})",
                format_bytes(report.total_tracked_bytes),
                report.len(),
                shown.len()
            )?;
            let mut table = Table::new(&["Name", "Size", "Size (%)", "Path"]);
            for r in shown {
                table.row(vec![
                    r.name.clone(),
                    format_bytes(r.size_bytes),
                    format!("{:.2}%", r.size_percentage),
                    r.path.clone(),
                ]);
            }
            table.write(&mut self.out)?;
        }
        self.guidance(SIZE_GUIDANCE)?;
        Ok(())
    }

    fn platform_report(
        &mut self,
        group: PlatformGroup,
        settings: &[PlatformSetting],
    ) -> Result<()> {
        self.title(&format!("{} Build Settings", group.label()))?;
        let mut table = Table::new(&["Setting", "Value", "Verdict"]);
        for s in settings {
            table.row(vec![
                s.name.to_string(),
                s.raw_value.clone(),
                verdict_label(s.verdict).to_string(),
            ]);
        }
        table.write(&mut self.out)?;

        if self.options.guidance {
            writeln!(self.out)?;
            for s in settings {
                writeln!(self.out, "{}: {}", s.name, setting_guidance(s.id, group))?;
            }
        }
        Ok(())
    }
}

/// Collects each report into one JSON object
#[derive(Debug, Default)]
pub struct JsonSink {
    sections: Map<String, Value>,
}

impl JsonSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write<W: Write>(&self, out: W) -> Result<()> {
        serde_json::to_writer_pretty(out, &self.sections)?;
        Ok(())
    }

    pub fn sections(&self) -> &Map<String, Value> {
        &self.sections
    }
}

impl ReportSink for JsonSink {
    type Error = anyhow::Error;

    fn texture_report(&mut self, records: &[TextureRecord]) -> Result<()> {
        self.sections
            .insert("textures".to_string(), serde_json::to_value(records)?);
        Ok(())
    }

    fn audio_report(&mut self, records: &[AudioRecord]) -> Result<()> {
        self.sections
            .insert("audio".to_string(), serde_json::to_value(records)?);
        Ok(())
    }

    fn model_report(&mut self, records: &[ModelRecord]) -> Result<()> {
        self.sections
            .insert("models".to_string(), serde_json::to_value(records)?);
        Ok(())
    }

    fn size_report(&mut self, report: &SizeReport) -> Result<()> {
        self.sections
            .insert("sizes".to_string(), serde_json::to_value(report)?);
        Ok(())
    }

    fn platform_report(
        &mut self,
        group: PlatformGroup,
        settings: &[PlatformSetting],
    ) -> Result<()> {
        let key = match group {
            PlatformGroup::Mobile => "mobile",
            PlatformGroup::WebGl => "webgl",
        };
        self.sections
            .insert(key.to_string(), serde_json::to_value(settings)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slimkit_core::{
        AudioLoadType, BuildTarget, SettingId, SizeRecord, TextureCompression, TextureType,
    };

    fn options() -> TableOptions {
        TableOptions {
            top: 0,
            guidance: false,
        }
    }

    fn rendered<F>(f: F) -> String
    where
        F: FnOnce(&mut TableSink<Vec<u8>>) -> Result<()>,
    {
        let mut sink = TableSink::new(Vec::new(), options());
        f(&mut sink).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(500), "500 B");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1_048_576), "1 MB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024 * 1024 * 1024), "5120 TB");
    }

    #[test]
    fn test_texture_table_flags_max_size() {
        let record = TextureRecord {
            name: "hero.png".to_string(),
            path: "Assets/hero.png".to_string(),
            texture_type: TextureType::Sprite,
            width: 300,
            height: 120,
            max_size: 2048,
            compression: TextureCompression::High,
            crunch_enabled: true,
            crunch_quality: 75,
        };

        let text = rendered(|sink| sink.texture_report(&[record]));

        assert!(text.contains("== Textures =="));
        assert!(text.contains("2048 (!)"));
        assert!(text.contains("300x120"));
        assert!(text.contains("Sprite"));
        assert!(text.contains("High"));
    }

    #[test]
    fn test_audio_table() {
        let record = AudioRecord {
            name: "theme.ogg".to_string(),
            path: "Assets/theme.ogg".to_string(),
            load_type: AudioLoadType::Streaming,
            force_to_mono: false,
            quality: 70,
        };

        let text = rendered(|sink| sink.audio_report(&[record]));
        assert!(text.contains("Disabled (!)"));
        assert!(text.contains("Streaming"));
    }

    #[test]
    fn test_size_table_limits_rows() {
        let report = SizeReport {
            total_tracked_bytes: 3072,
            records: vec![
                SizeRecord {
                    name: "big.fbx".to_string(),
                    path: "Assets/big.fbx".to_string(),
                    size_bytes: 2048,
                    size_percentage: 200.0 / 3.0,
                },
                SizeRecord {
                    name: "small.png".to_string(),
                    path: "Assets/small.png".to_string(),
                    size_bytes: 1024,
                    size_percentage: 100.0 / 3.0,
                },
            ],
        };

        let mut sink = TableSink::new(
            Vec::new(),
            TableOptions {
                top: 1,
                guidance: false,
            },
        );
        sink.size_report(&report).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();

        assert!(text.contains("Tracked total: 3 KB across 2 assets (showing 1)"));
        assert!(text.contains("66.67%"));
        assert!(!text.contains("small.png"));
    }

    #[test]
    fn test_empty_reports() {
        let text = rendered(|sink| sink.model_report(&[]));
        assert!(text.contains("No models found."));

        let text = rendered(|sink| sink.size_report(&SizeReport::default()));
        assert!(text.contains("No tracked assets found."));
    }

    #[test]
    fn test_platform_table_with_guidance() {
        let settings = vec![
            PlatformSetting::new(SettingId::VSync, "Every V Blank", Verdict::Bad),
            PlatformSetting::informational(
                SettingId::ScriptingBackend(BuildTarget::Android),
                "Mono",
            ),
        ];
        let mut sink = TableSink::new(
            Vec::new(),
            TableOptions {
                top: 0,
                guidance: true,
            },
        );
        sink.platform_report(PlatformGroup::Mobile, &settings).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();

        assert!(text.contains("== Mobile Build Settings =="));
        assert!(text.contains("change"));
        assert!(text.contains("info"));
        assert!(text.contains("Don't Sync"));
    }

    #[test]
    fn test_table_alignment() {
        let mut table = Table::new(&["A", "Long Header"]);
        table.row(vec!["wide cell".to_string(), "x".to_string()]);
        let mut out = Vec::new();
        table.write(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "A          Long Header");
        assert_eq!(lines[1], "---------  -----------");
        assert_eq!(lines[2], "wide cell  x");
    }

    #[test]
    fn test_json_sink_sections() {
        let mut sink = JsonSink::new();
        sink.size_report(&SizeReport::default()).unwrap();
        sink.platform_report(
            PlatformGroup::WebGl,
            &[PlatformSetting::new(SettingId::WebGlCompression, "Brotli", Verdict::Good)],
        )
        .unwrap();

        let sections = sink.sections();
        assert_eq!(sections["sizes"]["total_tracked_bytes"], 0);
        assert_eq!(sections["webgl"][0]["raw_value"], "Brotli");
        assert_eq!(sections["webgl"][0]["verdict"], "Good");

        let mut out = Vec::new();
        sink.write(&mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("\"webgl\""));
    }
}
