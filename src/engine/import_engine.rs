use crate::categorizer::Categorizer;
use crate::config::ImportPolicy;
use crate::models::{ImportError, RawTransaction, Transaction};
use crate::types::LineNumber;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error, info, warn};

const REQUIRED_COLUMNS: [&str; 3] = ["Date", "Description", "Amount"];

type RowMessage = (LineNumber, Result<RawTransaction, csv::Error>);

/// Transactions accepted from one upload plus the rows that were skipped.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    /// Accepted rows, in file order.
    pub transactions: Vec<Transaction>,
    pub skipped: Vec<ImportError>
}

/// Streams an uploaded CSV through the categorizer.
///
/// A blocking reader task decodes rows and hands them over a bounded channel
/// to a single consumer, which labels them in file order.
pub struct ImportEngine {
    categorizer: Categorizer,
    policy: ImportPolicy,
    backpressure: usize
}

impl ImportEngine {
    pub fn new(categorizer: Categorizer, policy: ImportPolicy) -> Self {
        Self {
            categorizer,
            policy,
            backpressure: 256
        }
    }

    /// Imports the CSV file at `path`.
    pub async fn run(&self, path: &Path) -> Result<ImportOutcome, ImportError> {
        let file = File::open(path).inspect_err(|error| {
            error!("Error opening CSV at path: {} | {error}", path.display());
        })?;

        self.run_reader(BufReader::new(file)).await
    }

    /// Imports CSV data from any reader.
    ///
    /// # Errors
    /// - `MissingColumn` if the header lacks `Date`, `Description` or `Amount`.
    /// - `MalformedRow` for the first bad row when the policy is `Abort`.
    /// - `Csv`/`Reader` if the input cannot be read at all.
    pub async fn run_reader<R>(&self, reader: R) -> Result<ImportOutcome, ImportError>
    where
        R: Read + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel::<RowMessage>(self.backpressure);
        let csv_handle = Self::spawn_csv_reader(reader, sender);
        let outcome = self.process_rows(receiver).await?;

        csv_handle.await??;

        info!("Imported {} transactions, skipped {} rows", outcome.transactions.len(), outcome.skipped.len());

        Ok(outcome)
    }

    fn spawn_csv_reader<R>(reader: R, sender: mpsc::Sender<RowMessage>) -> JoinHandle<Result<(), ImportError>>
    where
        R: Read + Send + 'static,
    {
        spawn_blocking(move || {
            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(reader);

            let headers = reader.headers()?.clone();

            for column in REQUIRED_COLUMNS {
                if !headers.iter().any(|header| header == column) {
                    return Err(ImportError::MissingColumn(column));
                }
            }

            let mut record = StringRecord::new();

            loop {
                let row = match reader.read_record(&mut record) {
                    Ok(false) => break,
                    Ok(true) => record.deserialize::<RawTransaction>(Some(&headers)),
                    Err(error) => Err(error)
                };

                let line = record.position().map(|position| position.line()).unwrap_or_default();

                if sender.blocking_send((line, row)).is_err() {
                    debug!("Import consumer stopped, closing CSV reader");
                    break;
                }
            }

            Ok(())
        })
    }

    async fn process_rows(&self, mut receiver: mpsc::Receiver<RowMessage>) -> Result<ImportOutcome, ImportError> {
        let mut outcome = ImportOutcome::default();

        while let Some((line, row)) = receiver.recv().await {
            let labeled = row
                .map_err(|error| ImportError::undecodable(line, error))
                .and_then(|raw| self.categorizer.label(raw, line));

            match labeled {
                Ok(transaction) => outcome.transactions.push(transaction),
                Err(error) => match self.policy {
                    ImportPolicy::Skip => {
                        warn!("Skipping row: {error}");
                        outcome.skipped.push(error);
                    }
                    ImportPolicy::Abort => {
                        error!("Aborting import: {error}");
                        return Err(error);
                    }
                }
            }
        }

        Ok(outcome)
    }
}
