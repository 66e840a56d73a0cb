//! Plain-text rendering of service views.

use std::io::{self, Write};

use academy_core::navigation::CompletionStats;
use services::{
    CompletionOutcome, CourseOverview, CourseSummary, LessonContext, LessonLink, NextStep,
    ProfileStats, ResumeKind, ResumeView,
};

fn check(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

fn progress(stats: &CompletionStats) -> String {
    format!("{} / {} lessons ({})", stats.completed, stats.total, stats.percentage)
}

fn lesson_row(out: &mut impl Write, lesson: &LessonLink, current: bool) -> io::Result<()> {
    let marker = if current { ">" } else { " " };
    writeln!(
        out,
        "  {marker} {} {:<12} {} ({}, {})",
        check(lesson.completed),
        lesson.id,
        lesson.title,
        lesson.kind,
        lesson.duration
    )
}

pub fn course_list(out: &mut impl Write, courses: &[CourseSummary]) -> io::Result<()> {
    if courses.is_empty() {
        return writeln!(out, "No courses match.");
    }
    for course in courses {
        writeln!(
            out,
            "{:<30} {:<13} {:>3} lessons  {:<10} {:>4} completed  {}",
            course.id,
            course.level,
            course.declared_lessons,
            course.duration,
            course.progress,
            course.title
        )?;
    }
    Ok(())
}

fn resume_line(resume: &ResumeView) -> String {
    let action = match resume.kind {
        ResumeKind::Start => "Start course",
        ResumeKind::Continue => "Continue learning",
        ResumeKind::Restart => "Review from the beginning",
    };
    format!("{action}: {} {}", resume.lesson.id, resume.lesson.title)
}

pub fn course_overview(out: &mut impl Write, course: &CourseOverview) -> io::Result<()> {
    let summary = &course.summary;
    writeln!(out, "{}", summary.title)?;
    writeln!(
        out,
        "{} | {} | {} lessons | {} with {}",
        summary.level,
        summary.duration,
        summary.declared_lessons,
        course.instructor.title,
        course.instructor.name
    )?;
    writeln!(out)?;
    writeln!(out, "{}", course.description)?;
    writeln!(out)?;
    writeln!(out, "Progress: {}", progress(&course.stats))?;
    if let Some(resume) = &course.resume {
        writeln!(out, "{}", resume_line(resume))?;
    }
    for module in &course.modules {
        writeln!(out)?;
        writeln!(out, "{} ({}) {}", module.title, module.id, module.stats.percentage)?;
        for lesson in &module.lessons {
            lesson_row(out, lesson, false)?;
        }
    }
    Ok(())
}

pub fn lesson(out: &mut impl Write, ctx: &LessonContext) -> io::Result<()> {
    writeln!(out, "{} | {}", ctx.course_title, progress(&ctx.course_stats))?;
    writeln!(out, "{} - Lesson {}: {}", ctx.module_title, ctx.lesson_number, ctx.lesson.title)?;
    writeln!(out, "{} | {}", ctx.lesson.kind, ctx.lesson.duration)?;
    if let Some(video) = &ctx.video {
        writeln!(out, "Video: {video}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", ctx.content.as_deref().unwrap_or("(no content)"))?;
    writeln!(out)?;
    for sibling in &ctx.module_lessons {
        lesson_row(out, sibling, sibling.id == ctx.lesson.id)?;
    }
    writeln!(out)?;
    if let Some(prev) = &ctx.previous {
        writeln!(out, "Previous: {} {}", prev.id, prev.title)?;
    }
    match &ctx.next {
        Some(next) => writeln!(out, "Next: {} {}", next.id, next.title),
        None => writeln!(out, "Last lesson of the course"),
    }
}

pub fn resume(
    out: &mut impl Write,
    course_id: &str,
    resume: Option<&ResumeView>,
) -> io::Result<()> {
    match resume {
        Some(resume) => writeln!(out, "{}", resume_line(resume)),
        None => writeln!(out, "Course {course_id} has no lessons yet."),
    }
}

pub fn completion(out: &mut impl Write, outcome: &CompletionOutcome) -> io::Result<()> {
    writeln!(
        out,
        "Completed {} in {}.",
        outcome.completion.lesson_id, outcome.completion.course_id
    )?;
    match &outcome.next {
        NextStep::Continue(next) => writeln!(out, "Next lesson: {next}"),
        NextStep::CourseFinished => writeln!(out, "Course finished."),
    }
}

pub fn profile(out: &mut impl Write, stats: &ProfileStats) -> io::Result<()> {
    writeln!(out, "Courses:           {}", stats.courses)?;
    writeln!(out, "Lessons offered:   {}", stats.declared_lessons)?;
    writeln!(out, "Lessons completed: {}", stats.completed_lessons)?;
    writeln!(out, "Average progress:  {}", stats.average_progress)?;
    if stats.my_courses.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "My courses")?;
    for course in &stats.my_courses {
        writeln!(
            out,
            "  {:<30} {:>3} lessons  {:<10} {:>4}",
            course.title, course.declared_lessons, course.duration, course.progress
        )?;
    }
    Ok(())
}
