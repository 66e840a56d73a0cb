use std::path::PathBuf;

use academy_core::model::CourseLevel;
use clap::{Parser, Subcommand, ValueEnum};
use storage::LessonCountPolicy;

#[derive(Parser, Debug)]
#[command(
    name = "academy",
    about = "Browse trading courses, lessons and learner progress",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Catalog JSON file; the bundled dataset is used when omitted
    #[arg(long, env = "ACADEMY_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// How to treat courses whose declared lesson count disagrees with their modules
    #[arg(
        long,
        env = "ACADEMY_LESSON_COUNT_POLICY",
        default_value = "warn",
        global = true
    )]
    pub lesson_count_policy: LessonCountPolicy,

    /// Log level (overridden by ACADEMY_LOG filter directives)
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Output format
    #[arg(
        long,
        value_enum,
        env = "ACADEMY_FORMAT",
        default_value = "text",
        global = true
    )]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List courses, optionally filtered
    Courses {
        /// Case-insensitive text matched against title and description
        #[arg(long)]
        search: Option<String>,

        /// Only courses of this level (beginner, intermediate, advanced)
        #[arg(long)]
        level: Option<CourseLevel>,

        /// Show only the first N courses of the catalog
        #[arg(long, conflicts_with_all = ["search", "level"])]
        featured: Option<usize>,
    },

    /// Show a course with its modules and progress
    Course { course_id: String },

    /// Show a lesson with its neighbours
    Lesson { course_id: String, lesson_id: String },

    /// Show where "continue learning" leads for a course
    Resume { course_id: String },

    /// Mark a lesson as completed and print the next step
    Complete { course_id: String, lesson_id: String },

    /// Show learner profile totals
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Settings resolved from flags and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub catalog: Option<PathBuf>,
    pub lesson_count_policy: LessonCountPolicy,
    pub format: OutputFormat,
}

impl Cli {
    pub fn config(&self) -> AppConfig {
        AppConfig {
            catalog: self.catalog.clone(),
            lesson_count_policy: self.lesson_count_policy,
            format: self.format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("academy").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_use_bundled_catalog() {
        let cli = parse(&["profile"]).unwrap();
        assert_eq!(cli.command, Command::Profile);
        assert_eq!(cli.log_level, LogLevel::Warn);
        let config = cli.config();
        assert_eq!(config.lesson_count_policy, LessonCountPolicy::Warn);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn courses_accepts_level_and_search() {
        let cli = parse(&["courses", "--level", "Intermedio", "--search", "cripto"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Courses {
                search: Some("cripto".into()),
                level: Some(CourseLevel::Intermediate),
                featured: None,
            }
        );
    }

    #[test]
    fn featured_conflicts_with_filters() {
        assert!(parse(&["courses", "--featured", "3", "--level", "advanced"]).is_err());
        assert!(parse(&["courses", "--featured", "3"]).is_ok());
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = parse(&[
            "lesson",
            "intro-trading",
            "lesson-1-4",
            "--format",
            "json",
            "--lesson-count-policy",
            "strict",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.lesson_count_policy, LessonCountPolicy::Strict);
    }

    #[test]
    fn rejects_unknown_level() {
        assert!(parse(&["courses", "--level", "expert"]).is_err());
    }
}
