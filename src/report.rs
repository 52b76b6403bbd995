//! Wire format of the measurement line sent to the PC.

use core::fmt::Write;

use heapless::String;

use crate::config::REPORT_LABEL;
use crate::mode::Unit;

/// Maximum length of one formatted report line.
pub const REPORT_MAX_LEN: usize = 32;

/// Format a converted reading as `"Distancia: <value> <cm|in>\r\n"`.
pub fn format_report(value: u16, unit: Unit) -> String<REPORT_MAX_LEN> {
    let mut line = String::new();
    // Label + 5-digit value + suffix + CRLF always fit in REPORT_MAX_LEN.
    let _ = write!(line, "{}: {} {}\r\n", REPORT_LABEL, value, unit.suffix());
    line
}
