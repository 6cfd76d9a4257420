use std::thread;
use std::time::Duration;

use ginmake_core::progress::{ProgressSink, Stage};
use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TEMPLATE: &str = "{spinner:.blue} [{bar:30.green/bright_black}] {pos:>2}/{len:2} {msg}";
const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Draws one progress bar per stage through the indicatif tracing layer.
///
/// The bar lives as long as its span; dropping the span in `finish`
/// removes it. `pace` is slept after every step.
pub struct BarProgress {
    pace: Duration,
    span: Option<Span>,
}

impl BarProgress {
    pub fn new(pace: Duration) -> Self {
        Self { pace, span: None }
    }
}

impl ProgressSink for BarProgress {
    fn start(&mut self, stage: Stage, total: usize) {
        let span: Span = info_span!("stage", indicatif.pb_show = true, %stage);
        span.pb_set_style(&bar_style());
        span.pb_set_length(total as u64);
        span.pb_set_message(&format!("creating {stage}"));
        span.pb_start();
        self.span = Some(span);
    }

    fn advance(&mut self, item: &str) {
        if let Some(span) = &self.span {
            span.pb_set_message(item);
            span.pb_inc(1);
        }
        if !self.pace.is_zero() {
            thread::sleep(self.pace);
        }
    }

    fn finish(&mut self) {
        self.span.take();
    }
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template(TEMPLATE)
        .map(|style| style.tick_strings(TICKS))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
