//! Batch export orchestration.
//!
//! Walks the discovered map documents in listing order, delegates each
//! one to the packaging engine and funnels every per-document failure
//! into the export log without aborting the batch.

use crate::cleanup::force_remove_tree;
use crate::config::{CoreConfig, PACKAGE_EXTENSION};
use crate::discovery::find_map_documents;
use crate::error::{CoreError, CoreResult};
use crate::export_log::ExportLog;
use crate::external::{DocumentPackager, PackageRequest};
use crate::utils::{document_name, format_bytes, format_duration};
use crate::{ExportFailure, ExportReport, RunOutcome};

use colored::*;
use log::{error, info, warn};

use std::fs;
use std::time::Instant;

/// Exports every map document in `config.input_dir` as a map package.
///
/// Failures of individual documents are recorded in the export log and
/// counted; the batch always continues with the next document. Only
/// errors in the log lifecycle itself (and an unreadable input
/// directory) are fatal.
///
/// # Returns
///
/// * `Ok(RunOutcome::NoInput)` - no map documents were found
/// * `Ok(RunOutcome::Completed { .. })` - the batch ran to the end
/// * `Err(CoreError)` - the run could not be carried out at all
pub fn run_export<P: DocumentPackager>(packager: &P, config: &CoreConfig) -> CoreResult<RunOutcome> {
    let mut log = ExportLog::create(&config.log_dir, &config.log_name)?;
    info!("Export log: {}", log.path().display());

    let documents = match find_map_documents(&config.input_dir) {
        Ok(documents) => documents,
        Err(CoreError::NoDocumentsFound) => {
            let outcome = RunOutcome::NoInput;
            log.finish(&outcome)?;
            return Ok(outcome);
        }
        Err(e) => return Err(e),
    };

    info!(
        "Found {} map document(s) in {}",
        documents.len(),
        config.input_dir.display()
    );

    let mut exported: Vec<ExportReport> = Vec::new();
    let mut failures: Vec<ExportFailure> = Vec::new();

    for document_path in &documents {
        let document_start = Instant::now();
        let document = document_name(document_path)?;
        let stem = document_path
            .file_stem()
            .ok_or_else(|| {
                CoreError::PathError(format!(
                    "Failed to get file stem for {}",
                    document_path.display()
                ))
            })?
            .to_string_lossy()
            .to_string();

        info!("{} {}", "Packaging:".cyan().bold(), document.yellow());

        let package_path = config
            .output_dir
            .join(format!("{stem}.{PACKAGE_EXTENSION}"));
        let request = PackageRequest::new(document_path.clone(), package_path.clone());

        match packager.package(&request) {
            Ok(()) => {
                let elapsed = document_start.elapsed();
                let package_size = match fs::metadata(&package_path) {
                    Ok(metadata) => metadata.len(),
                    Err(e) => {
                        warn!(
                            "Could not read size of package {}: {}",
                            package_path.display(),
                            e
                        );
                        0
                    }
                };

                info!(
                    "{} {} processed successfully ({}, {})",
                    "SUCCESS:".green().bold(),
                    document,
                    format_bytes(package_size),
                    format_duration(elapsed)
                );

                // Some documents make the engine stage into a directory
                // named after the package; remove it when it survives.
                let leftover = config.output_dir.join(&stem);
                if leftover.is_dir() {
                    if let Err(e) = force_remove_tree(&leftover) {
                        warn!(
                            "Removal of package directory {} failed. Consider running with elevated privileges.",
                            leftover.display()
                        );
                        log.record(&document, &e)?;
                        failures.push(ExportFailure {
                            document: document.clone(),
                            message: e.to_string(),
                        });
                    }
                }

                exported.push(ExportReport {
                    document,
                    package_path,
                    package_size,
                    duration: elapsed,
                });
            }
            Err(e) => {
                error!(
                    "{} while processing {}: {}",
                    "ERROR".red().bold(),
                    document,
                    e
                );
                log.record(&document, &e)?;
                failures.push(ExportFailure {
                    document,
                    message: e.to_string(),
                });
            }
        }

        info!("----------------------------------------");
    }

    let outcome = RunOutcome::Completed { exported, failures };
    log.finish(&outcome)?;
    Ok(outcome)
}
