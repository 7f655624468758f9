use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

/// A span that shows a spinner with `msg` for as long as it is entered or
/// instrumenting a future.
pub fn loading_span(msg: &str) -> Span {
    let span = info_span!(target: "pkgview::status::spinner", "loading");

    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        span.pb_set_style(&style.tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]));
    }
    span.pb_set_message(msg);
    span.pb_start();
    span
}
