use std::path::PathBuf;

use console::Style;
use deflicker_core::error::DeflickerError;
use deflicker_core::pipeline::config::{DeflickerConfig, FailurePolicy};
use deflicker_core::remap::RemapMode;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
    warn: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
            warn: Style::new().yellow(),
        }
    }
}

pub fn print_run_summary(config: &DeflickerConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Deflicker"));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Source"),
        s.path.apply_to(config.source.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Destination"),
        s.path.apply_to(config.destination.display())
    );

    let window = if config.rolling_average < 1 {
        "global average".to_string()
    } else {
        format!("rolling average, \u{00b1}{} frames", config.rolling_average)
    };
    println!(
        "  {:<14}{}",
        s.label.apply_to("Reference"),
        s.value.apply_to(window)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Threads"),
        s.value.apply_to(config.threads)
    );
    let remap = match config.remap {
        RemapMode::PerChannel => "per channel",
        RemapMode::Luminance => "luminance only",
    };
    println!(
        "  {:<14}{}",
        s.label.apply_to("Remap"),
        s.value.apply_to(remap)
    );
    if config.on_error == FailurePolicy::Skip {
        println!(
            "  {:<14}{}",
            s.label.apply_to("On error"),
            s.value.apply_to("skip and continue")
        );
    }
    println!();
}

pub fn print_skipped(skipped: &[(PathBuf, DeflickerError)]) {
    if skipped.is_empty() {
        return;
    }
    let s = Styles::new();
    println!("{}", s.warn.apply_to(format!("{} skipped:", skipped.len())));
    for (path, error) in skipped {
        println!("  {}: {}", path.display(), error);
    }
}
