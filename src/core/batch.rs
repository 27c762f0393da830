use crate::core::engine::NumerologyEngine;
use crate::domain::model::{Domain, Reading};
use crate::utils::error::Result;
use crate::utils::validation::ValidationRules;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Debug, Deserialize)]
struct BatchInputRow {
    domain: String,
    input: String,
}

#[derive(Debug, Serialize)]
struct BatchOutputRow<'a> {
    domain: Domain,
    input: &'a str,
    destiny_number: u8,
    interpretation: &'a str,
}

impl<'a> From<&'a Reading> for BatchOutputRow<'a> {
    fn from(reading: &'a Reading) -> Self {
        Self {
            domain: reading.domain,
            input: &reading.input,
            destiny_number: reading.destiny_number.value(),
            interpretation: reading.interpretation,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub rejected: usize,
}

/// 讀取 `domain,input` CSV，逐列驗證並計算
pub struct BatchProcessor<'a> {
    engine: &'a NumerologyEngine,
    rules: &'a ValidationRules,
}

impl<'a> BatchProcessor<'a> {
    pub fn new(engine: &'a NumerologyEngine, rules: &'a ValidationRules) -> Self {
        Self { engine, rules }
    }

    pub fn run<R: Read, W: Write>(
        &self,
        input: R,
        output: W,
        format: OutputFormat,
    ) -> Result<BatchSummary> {
        let (readings, rejected) = self.compute_rows(input)?;

        match format {
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(output);
                for reading in &readings {
                    writer.serialize(BatchOutputRow::from(reading))?;
                }
                writer.flush()?;
            }
            OutputFormat::Json => {
                let mut output = output;
                serde_json::to_writer_pretty(&mut output, &readings)?;
                output.write_all(b"\n")?;
            }
        }

        let summary = BatchSummary {
            processed: readings.len(),
            rejected,
        };
        tracing::info!(
            "📊 Batch finished: {} processed, {} rejected",
            summary.processed,
            summary.rejected
        );
        Ok(summary)
    }

    /// 檔案版本；`output` 為 None 時寫到 stdout
    pub fn run_file(
        &self,
        input: &Path,
        output: Option<&Path>,
        format: OutputFormat,
    ) -> Result<BatchSummary> {
        tracing::info!("📁 Reading batch input from: {}", input.display());
        let reader = BufReader::new(File::open(input)?);

        match output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)?;
                    }
                }
                let writer = BufWriter::new(File::create(path)?);
                let summary = self.run(reader, writer, format)?;
                tracing::info!("📁 Output saved to: {}", path.display());
                Ok(summary)
            }
            None => self.run(reader, io::stdout().lock(), format),
        }
    }

    fn compute_rows<R: Read>(&self, input: R) -> Result<(Vec<Reading>, usize)> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(input);
        let mut readings = Vec::new();
        let mut rejected = 0;

        for (index, record) in reader.deserialize::<BatchInputRow>().enumerate() {
            // 資料列從第 2 行開始 (第 1 行是標題)
            let line = index + 2;
            let row = match record {
                Ok(row) => row,
                Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
                Err(e) => {
                    tracing::warn!("⚠️ Skipping malformed row {}: {}", line, e);
                    rejected += 1;
                    continue;
                }
            };

            let checked = row
                .domain
                .parse::<Domain>()
                .and_then(|domain| self.rules.check(domain, &row.input).map(|_| domain));

            match checked {
                Ok(domain) => readings.push(self.engine.compute(domain, &row.input)),
                Err(e) => {
                    tracing::warn!("⚠️ Skipping row {}: {}", line, e);
                    rejected += 1;
                }
            }
        }

        Ok((readings, rejected))
    }
}
