use std::path::Path;

use canny_core::CannyConfig;
use console::Style;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

fn print_header(s: &Styles, title: &str, files: usize, output: &Path) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(title.chars().count())));
    println!();
    println!("  {:<14}{}", s.label.apply_to("Images"), s.value.apply_to(files));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
}

fn print_kernels(s: &Styles, config: &CannyConfig) {
    println!(
        "  {:<14}{}x{}, sigma {}",
        s.label.apply_to("Gaussian"),
        s.value.apply_to(config.kernels.gaussian_size),
        s.value.apply_to(config.kernels.gaussian_size),
        s.value.apply_to(config.kernels.gaussian_sigma)
    );
}

pub fn print_edges_summary(config: &CannyConfig, files: usize, output: &Path) {
    let s = Styles::new();
    let p = &config.edges;

    print_header(&s, "Canny Edges", files, output);
    print_kernels(&s, config);
    if p.raw_only {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Mode"),
            s.method.apply_to("raw edge strength")
        );
    } else {
        println!(
            "  {:<14}[{}, {}], {} rounds",
            s.label.apply_to("Hysteresis"),
            s.value.apply_to(p.min_rate),
            s.value.apply_to(p.max_rate),
            s.value.apply_to(p.rounds)
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Tie-break"),
        s.method.apply_to(p.tie_break)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.method.apply_to(if p.preserve_size { "preserved" } else { "shrinking" })
    );
    if p.remove_high_val {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Highlights"),
            s.method.apply_to("clipped to half range")
        );
    }
    println!();
}

pub fn print_boundaries_summary(config: &CannyConfig, files: usize, output: &Path) {
    let s = Styles::new();
    let b = &config.boundary;

    print_header(&s, "Mask Boundaries", files, output);
    print_kernels(&s, config);
    println!(
        "  {:<14}{} erode / {} dilate",
        s.label.apply_to("Morphology"),
        s.value.apply_to(b.erosion_iterations),
        s.value.apply_to(b.dilation_iterations)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Threshold"),
        s.value.apply_to(b.edge_threshold)
    );
    println!();
}
