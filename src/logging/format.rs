// json-env-export: JSON to environment variable exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, FormatEvent, FormatFields};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

use crate::workflow;

/// Renders events as GitHub Actions workflow commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkflowFormat;

impl<S, N> FormatEvent<S, N> for WorkflowFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let mut message = String::new();
        ctx.format_fields(format::Writer::new(&mut message), event)?;

        let line = match *event.metadata().level() {
            Level::ERROR => workflow::command("error", &[], &message),
            Level::WARN => workflow::command("warning", &[], &message),
            Level::INFO => message,
            _ => workflow::command("debug", &[], &message),
        };
        writeln!(writer, "{line}")
    }
}
