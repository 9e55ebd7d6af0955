//! JSON Emitter
//!
//! Machine-readable scan output in JSON format.

use std::io::Write;

use super::{escape_json, trailing_comma, ReportEmitter, ScanReport};

/// JSON emitter for machine-readable output.
///
/// Emits one object per report with `source`, `tokens`, `symbols` and
/// `errors` fields.
pub struct JsonEmitter<W: Write> {
    writer: W,
}

impl<W: Write> JsonEmitter<W> {
    /// Create a new JSON emitter.
    pub fn new(writer: W) -> Self {
        JsonEmitter { writer }
    }
}

impl<W: Write> ReportEmitter for JsonEmitter<W> {
    fn emit(&mut self, report: &ScanReport<'_>) {
        // Build JSON manually (to avoid serde dependency)
        let _ = writeln!(self.writer, "{{");
        let _ = writeln!(
            self.writer,
            "  \"source\": \"{}\",",
            escape_json(report.source_name)
        );

        let _ = writeln!(self.writer, "  \"tokens\": [");
        let total = report.tokens.len();
        for (i, token) in report.tokens.iter().enumerate() {
            let comma = trailing_comma(i, total);
            let subtype = match token.subtype {
                Some(subtype) => format!("\"{subtype}\""),
                None => "null".to_string(),
            };
            let _ = writeln!(self.writer, "    {{");
            let _ = writeln!(self.writer, "      \"category\": \"{}\",", token.category);
            let _ = writeln!(self.writer, "      \"subtype\": {subtype},");
            let _ = writeln!(self.writer, "      \"start\": {},", token.span.start);
            let _ = writeln!(self.writer, "      \"end\": {},", token.span.end);
            let _ = writeln!(self.writer, "      \"symbol\": {}", token.symbol.index());
            let _ = writeln!(self.writer, "    }}{comma}");
        }
        let _ = writeln!(self.writer, "  ],");

        let _ = writeln!(self.writer, "  \"symbols\": [");
        let total = report.symbols.len();
        for (i, (id, text)) in report.symbols.iter().enumerate() {
            let comma = trailing_comma(i, total);
            let _ = writeln!(
                self.writer,
                "    {{ \"id\": {}, \"text\": \"{}\" }}{comma}",
                id.index(),
                escape_json(text)
            );
        }
        let _ = writeln!(self.writer, "  ],");

        let _ = writeln!(self.writer, "  \"errors\": [");
        let total = report.errors.len();
        for (i, error) in report.errors.iter().enumerate() {
            let comma = trailing_comma(i, total);
            let _ = writeln!(self.writer, "    {{");
            let _ = writeln!(
                self.writer,
                "      \"message\": \"{}\",",
                escape_json(&error.error.to_string())
            );
            let _ = writeln!(self.writer, "      \"offset\": {},", error.error.offset());
            let _ = writeln!(self.writer, "      \"row\": {},", error.position.row);
            let _ = writeln!(self.writer, "      \"column\": {}", error.position.column);
            let _ = writeln!(self.writer, "    }}{comma}");
        }
        let _ = writeln!(self.writer, "  ]");

        let _ = writeln!(self.writer, "}}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
