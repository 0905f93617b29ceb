use crate::knob::Knob;
use crate::types::{percent_to_float, KnobIndex, Percent, RawCount};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::io::{self, Write};

#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ConsoleFormat {
    /// `0: 2045 adc, 50.0%  1: ...`
    #[default]
    Text,
    /// `{"knobs":[{"index":0,"raw":2045,"percent":16384,"min":30,"max":4060},...]}`
    Json,
}

/// Writes the knob state to the console. Purely diagnostic.
pub struct Printer<W: Write> {
    out: W,
    format: ConsoleFormat,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, format: ConsoleFormat) -> Self {
        Self { out, format }
    }

    pub fn print(&mut self, knobs: &[Knob]) -> io::Result<()> {
        let line = match self.format {
            ConsoleFormat::Text => format_line(knobs),
            ConsoleFormat::Json => format_json(knobs)?,
        };
        self.out.write_all(line.as_bytes())?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn format_line(knobs: &[Knob]) -> String {
    let mut line = String::new();
    for knob in knobs {
        let _ = write!(
            line,
            "{}: {:4} adc, {:3.1}%  ",
            knob.index(),
            knob.raw(),
            percent_to_float(knob.percent())
        );
    }
    line.push('\n');
    line
}

#[derive(Serialize)]
struct KnobReport {
    index: KnobIndex,
    raw: RawCount,
    percent: Percent,
    min: Option<RawCount>,
    max: Option<RawCount>,
}

impl From<&Knob> for KnobReport {
    fn from(knob: &Knob) -> Self {
        let observed = knob.observed();
        KnobReport {
            index: knob.index(),
            raw: knob.raw(),
            percent: knob.percent(),
            min: observed.map(|range| range.min),
            max: observed.map(|range| range.max),
        }
    }
}

#[derive(Serialize)]
struct Report {
    knobs: Vec<KnobReport>,
}

fn format_json(knobs: &[Knob]) -> io::Result<String> {
    let report = Report {
        knobs: knobs.iter().map(KnobReport::from).collect(),
    };
    let mut line = serde_json::to_string(&report)?;
    line.push('\n');
    Ok(line)
}
