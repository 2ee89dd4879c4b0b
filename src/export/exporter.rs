use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use image::ImageError;
use log::{debug, info, warn};

use crate::error::{ConfigError, ExportError};
use crate::export::export_config::{DecodeErrorPolicy, ExportConfig};
use crate::export::progress::ExportProgress;
use crate::export::report::{DecodeFailure, ExportReport, WrittenTable};
use crate::output::{write_table, Row, ShardTemplate};
use crate::pixels::PixelGrid;
use crate::transform::{self, ChannelOrder};

/// Layout of the buffers `decode` returns.
const DECODED_ORDER: ChannelOrder = ChannelOrder::Rgb;

/// Turns the files matched by a `SourcePattern` into one or more CSV tables.
///
/// Processing is sequential: each file is decoded, transformed, flattened
/// and appended to the in-memory batch before the next one is opened. The
/// batch is flushed whenever it reaches `shard_size` rows, and once more at
/// the end unless `max_shards` stopped the run.
pub struct Exporter {
    config: ExportConfig,
    template: ShardTemplate,
    progress_tx: Option<mpsc::Sender<ExportProgress>>,
}

impl Exporter {
    /// Validates `config` and prepares the output template.
    pub fn new(config: ExportConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let template = config.output.parse()?;
        Ok(Exporter { config, template, progress_tx: None })
    }

    /// Also sends every progress notice to `tx`.
    pub fn with_progress_channel(mut self, tx: mpsc::Sender<ExportProgress>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Runs the export.
    ///
    /// # Errors
    /// Any error ends the run at once. Tables already written stay on disk;
    /// the batch being built is discarded.
    pub fn export(&self) -> Result<ExportReport, ExportError> {
        let started = Instant::now();
        let files = self.config.source.resolve()?;
        let total = files.len();
        info!(
            "exporting {} image(s) matching {}",
            total,
            self.config.source.full_pattern()
        );

        let mut report = ExportReport {
            matched: total,
            converted: 0,
            tables: Vec::new(),
            failures: Vec::new(),
            stopped_early: false,
            elapsed_ms: 0,
        };
        let mut batch: Vec<Row> = Vec::new();
        let mut row_len: Option<usize> = None;

        for (index, path) in files.iter().enumerate() {
            match self.convert(path) {
                Ok(row) => {
                    let expected = *row_len.get_or_insert(row.len());
                    if row.len() != expected {
                        return Err(ExportError::RowLengthMismatch {
                            path: path.clone(),
                            expected,
                            found: row.len(),
                        });
                    }
                    batch.push(row);
                    report.converted += 1;
                }
                Err(ExportError::Decode { path, source }) => match self.config.on_decode_error {
                    DecodeErrorPolicy::Abort => return Err(ExportError::Decode { path, source }),
                    DecodeErrorPolicy::SkipAndContinue => {
                        warn!("skipping {}: {}", path.display(), source);
                    }
                    DecodeErrorPolicy::CollectErrors => {
                        warn!("skipping {}: {}", path.display(), source);
                        report.failures.push(DecodeFailure { path, message: source.to_string() });
                    }
                },
                Err(e) => return Err(e),
            }

            if let Some(every) = self.config.progress_every {
                if index % every == 0 {
                    self.emit_progress(ExportProgress { current: index + 1, total });
                }
            }

            if let Some(sharding) = self.config.sharding {
                if batch.len() == sharding.shard_size {
                    self.flush(&mut batch, &mut report)?;
                    if sharding.max_shards == Some(report.tables.len()) {
                        report.stopped_early = index + 1 < total;
                        info!(
                            "reached {} shard(s); {} file(s) left unprocessed",
                            report.tables.len(),
                            total - index - 1
                        );
                        break;
                    }
                }
            }
        }

        if !batch.is_empty() {
            self.flush(&mut batch, &mut report)?;
        }

        report.elapsed_ms = started.elapsed().as_millis() as u64;
        info!(
            "wrote {} row(s) to {} table(s) in {} ms",
            report.total_rows(),
            report.tables.len(),
            report.elapsed_ms
        );
        Ok(report)
    }

    /// Decode → transform → flatten for a single file.
    fn convert(&self, path: &Path) -> Result<Row, ExportError> {
        let grid = decode(path)?;
        let grid = transform::apply(grid, DECODED_ORDER, &self.config.transform, path)?;

        let source = if self.config.transform.include_source_path {
            Some(source_field(path))
        } else {
            None
        };
        Ok(Row::new(source, grid.flatten()))
    }

    /// Persists `batch` as the next table and clears it.
    fn flush(&self, batch: &mut Vec<Row>, report: &mut ExportReport) -> Result<(), ExportError> {
        let path = self.template.render(report.tables.len() + 1);
        write_table(&path, batch)?;
        info!("wrote {} row(s) to {}", batch.len(), path.display());
        report.tables.push(WrittenTable { path, rows: batch.len() });
        batch.clear();
        Ok(())
    }

    fn emit_progress(&self, progress: ExportProgress) {
        println!("{}", progress);
        debug!("{}", progress);
        if let Some(tx) = &self.progress_tx {
            // A dropped receiver only means nobody is listening any more.
            let _ = tx.send(progress);
        }
    }
}

/// Reads `path` as a 3-channel image, picking the codec from the file
/// contents rather than the extension. Open and read failures surface as
/// `Decode` errors so the decode policy covers them too.
fn decode(path: &Path) -> Result<PixelGrid, ExportError> {
    let decode_error = |source| ExportError::Decode { path: path.to_path_buf(), source };
    let decoded = image::io::Reader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)?;
    Ok(PixelGrid::from(decoded.to_rgb8()))
}

/// Text for the source column. Paths that are not valid UTF-8 are written
/// with replacement characters and logged, since the field then no longer
/// names the file on disk.
fn source_field(path: &Path) -> String {
    match path.to_str() {
        Some(text) => text.to_owned(),
        None => {
            let lossy = path.to_string_lossy().into_owned();
            warn!("path {:?} is not valid UTF-8; writing it as {}", path, lossy);
            lossy
        }
    }
}

/// Validates `config` and runs a single export.
pub fn export(config: ExportConfig) -> Result<ExportReport, ExportError> {
    Exporter::new(config)?.export()
}
