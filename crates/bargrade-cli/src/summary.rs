use bargrade_core::pipeline::{GradingResult, LatchPolicy};
use bargrade_core::quality::Grade;
use console::Style;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    good: Style,
    fair: Style,
    bad: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            good: Style::new().green().bold(),
            fair: Style::new().yellow().bold(),
            bad: Style::new().red().bold(),
        }
    }

    fn grade(&self, grade: Grade) -> &Style {
        match grade {
            Grade::A | Grade::B => &self.good,
            Grade::C | Grade::D => &self.fair,
            Grade::F => &self.bad,
        }
    }
}

/// Counters for one `scan` session.
#[derive(Default)]
pub struct ScanStats {
    pub total: usize,
    pub processed: usize,
    pub graded: usize,
    pub not_sharp: usize,
    pub not_found: usize,
    pub captured_at: Option<usize>,
    pub policy: LatchPolicy,
}

pub fn print_grading_result(result: &GradingResult, source: &str) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Barcode Grade"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(13)));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Source"), s.value.apply_to(source));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Format"),
        s.value.apply_to(result.format)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Value"),
        s.value.apply_to(result.value.as_deref().unwrap_or("-"))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Grade"),
        s.grade(result.grade).apply_to(result.grade)
    );
    println!();

    println!("  {}", s.header.apply_to("Region"));
    println!(
        "    {:<12}{}x{} at ({}, {})",
        s.label.apply_to("Crop"),
        result.crop.width,
        result.crop.height,
        result.crop.x,
        result.crop.y
    );
    match (result.bar_region, result.bar_region_in_source()) {
        (Some(r), Some(src)) => println!(
            "    {:<12}{}x{} at ({}, {}), frame ({}, {})",
            s.label.apply_to("Bars"),
            r.width,
            r.height,
            r.x,
            r.y,
            src.x,
            src.y
        ),
        _ => println!("    {:<12}{}", s.label.apply_to("Bars"), s.bad.apply_to("not isolated")),
    }
    if let Some(count) = result.bar_count {
        let expected = result
            .expected_bars()
            .map(|e| format!(" (expected {e})"))
            .unwrap_or_default();
        println!("    {:<12}{}{}", s.label.apply_to("Bar count"), count, expected);
    }

    if let Some(m) = result.metrics {
        println!();
        println!("  {}", s.header.apply_to("Metrics"));
        println!("    {:<12}{:.3}", s.label.apply_to("Contrast"), m.contrast());
        println!("    {:<12}{}", s.label.apply_to("Range"), m.contrast_range);
        println!("    {:<12}{}", s.label.apply_to("Edges"), m.edge_density);
        println!("    {:<12}{}", s.label.apply_to("Noise"), m.noise_count);
        println!("    {:<12}{:.1}", s.label.apply_to("Mean luma"), m.mean_luminance);
    }
    println!();
}

pub fn print_scan_summary(stats: &ScanStats) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Scan Summary"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(12)));
    println!();
    println!(
        "  {:<14}{} of {}",
        s.label.apply_to("Frames"),
        s.value.apply_to(stats.processed),
        stats.total
    );
    println!("  {:<14}{}", s.label.apply_to("Not sharp"), stats.not_sharp);
    println!("  {:<14}{}", s.label.apply_to("Not found"), stats.not_found);
    println!("  {:<14}{}", s.label.apply_to("Graded"), stats.graded);
    println!("  {:<14}{}", s.label.apply_to("Latch"), stats.policy);
    match stats.captured_at {
        Some(i) => println!(
            "  {:<14}{}",
            s.label.apply_to("Captured"),
            s.good.apply_to(format!("frame {i}"))
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Captured"),
            s.bad.apply_to("nothing")
        ),
    }
}
