mod cli;
mod render;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use services::{AppServices, Clock, CompletionError, CourseFilter, CourseSummary};
use storage::{Storage, load_catalog_file, seed_catalog};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{AppConfig, Cli, Command, LogLevel, OutputFormat};

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_env("ACADEMY_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level.to_filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn open_storage(config: &AppConfig) -> Result<Storage> {
    let catalog = match &config.catalog {
        Some(path) => load_catalog_file(path, config.lesson_count_policy)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => seed_catalog(config.lesson_count_policy)
            .context("bundled catalog failed validation")?,
    };
    debug!(courses = catalog.len(), "catalog ready");
    Ok(Storage::new(catalog))
}

/// Writes either JSON or the text rendering of one view to stdout.
fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce(&mut io::StdoutLock<'_>) -> io::Result<()>,
) -> Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, value)?;
            writeln!(out)?;
        }
        OutputFormat::Text => text(&mut out)?,
    }
    Ok(())
}

fn not_found(what: std::fmt::Arguments<'_>) -> ExitCode {
    eprintln!("not found: {what}");
    ExitCode::from(1)
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = cli.config();
    let storage = open_storage(&config)?;
    let services = AppServices::new(&storage, Clock::System);
    execute(cli.command, config.format, &services).await
}

/// Runs one command; `Ok` carries 0 on success and 1 for unknown ids.
async fn execute(
    command: Command,
    format: OutputFormat,
    services: &AppServices,
) -> Result<ExitCode> {
    let catalog = services.catalog();

    match command {
        Command::Courses {
            search,
            level,
            featured,
        } => {
            let courses: Vec<CourseSummary> = match featured {
                Some(limit) => catalog
                    .featured(limit)
                    .iter()
                    .map(CourseSummary::from_course)
                    .collect(),
                None => {
                    let filter = CourseFilter::new()
                        .with_query(search.unwrap_or_default())
                        .with_level(level);
                    catalog.summaries(&filter)
                }
            };
            emit(format, &courses, |out| render::course_list(out, &courses))?;
        }
        Command::Course { course_id } => {
            let Some(overview) = catalog.course_overview(&course_id) else {
                return Ok(not_found(format_args!("course {course_id}")));
            };
            emit(format, &overview, |out| render::course_overview(out, &overview))?;
        }
        Command::Lesson {
            course_id,
            lesson_id,
        } => {
            let Some(ctx) = catalog.lesson_context(&course_id, &lesson_id) else {
                return Ok(not_found(format_args!("lesson {lesson_id} in {course_id}")));
            };
            emit(format, &ctx, |out| render::lesson(out, &ctx))?;
        }
        Command::Resume { course_id } => {
            let Some(overview) = catalog.course_overview(&course_id) else {
                return Ok(not_found(format_args!("course {course_id}")));
            };
            let resume = overview.resume.as_ref();
            emit(format, &resume, |out| render::resume(out, &course_id, resume))?;
        }
        Command::Complete {
            course_id,
            lesson_id,
        } => {
            let completions = services.completions();
            match completions.notify_lesson_completed(&course_id, &lesson_id).await {
                Ok(outcome) => emit(format, &outcome, |out| render::completion(out, &outcome))?,
                Err(CompletionError::UnknownLesson { course, lesson }) => {
                    return Ok(not_found(format_args!("lesson {lesson} in {course}")));
                }
                Err(err) => return Err(err).context("completion was not recorded"),
            }
        }
        Command::Profile => {
            let stats = catalog.profile();
            emit(format, &stats, |out| render::profile(out, &stats))?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Maps failures that are not "not found" to exit code 2.
fn exit_code(result: Result<ExitCode>) -> ExitCode {
    result.unwrap_or_else(|err| {
        eprintln!("{err:#}");
        ExitCode::from(2)
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level);
    exit_code(run(cli).await)
}
