use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use gradebook_core::{GradeReport, NormalizedAnswer};

/// Color scheme for terminal output.
struct Colors;

impl Colors {
    const HEADER: Color = Color::Magenta;
    const FULL: Color = Color::Green;
    const PARTIAL: Color = Color::Yellow;
    const ZERO: Color = Color::Red;
    const DIM: Color = Color::DarkGrey;
}

/// Widest answer excerpt shown in the table.
const EXCERPT_CHARS: usize = 40;

/// Prints gradebooks and segmentation output to stdout.
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Self
    }

    /// Print a graded report as an aligned table with totals.
    pub fn print_report(&self, report: &GradeReport) -> Result<()> {
        let mut stdout = io::stdout();

        queue!(
            stdout,
            SetForegroundColor(Colors::HEADER),
            Print(format!("Roll Number: {}", report.roll_number)),
            ResetColor,
        )?;
        if let Some(subject) = &report.subject {
            queue!(stdout, Print(format!("  Subject: {}", subject)))?;
        }
        queue!(
            stdout,
            Print("\n"),
            SetForegroundColor(Colors::DIM),
            Print(format!(
                "{:<8} {:<40} {:>10} {:>8}\n",
                "Question", "Answer", "Similarity", "Marks"
            )),
            ResetColor,
        )?;

        for row in &report.scored {
            let color = if row.awarded_marks >= row.max_marks && row.max_marks > 0.0 {
                Colors::FULL
            } else if row.awarded_marks > 0.0 {
                Colors::PARTIAL
            } else {
                Colors::ZERO
            };
            queue!(
                stdout,
                Print(format!(
                    "{:<8} {:<40} {:>10} ",
                    row.question_number,
                    excerpt(&row.student_answer),
                    row.similarity
                )),
                SetForegroundColor(color),
                Print(format!("{:>8}\n", format!("{}/{}", row.awarded_marks, row.max_marks))),
                ResetColor,
            )?;
        }

        for row in &report.unmatched {
            queue!(
                stdout,
                SetForegroundColor(Colors::DIM),
                Print(format!(
                    "{:<8} {:<40} {:>10} {:>8}\n",
                    row.question_number.as_deref().unwrap_or("-"),
                    excerpt(&row.answer_text),
                    row.reason.as_str(),
                    "-"
                )),
                ResetColor,
            )?;
        }

        queue!(
            stdout,
            SetForegroundColor(Colors::HEADER),
            Print(format!(
                "Total: {}/{} ({:.1}%)\n",
                report.total_obtained,
                report.total_possible,
                report.percentage()
            )),
            ResetColor,
        )?;
        if !report.defaulted_keys.is_empty() {
            queue!(
                stdout,
                SetForegroundColor(Colors::DIM),
                Print(format!(
                    "Key rows without marks (counted as 0): {}\n",
                    report.defaulted_keys.join(", ")
                )),
                ResetColor,
            )?;
        }

        stdout.flush()?;
        Ok(())
    }

    /// Print normalized answers, one block per question.
    pub fn print_answers(&self, roll_number: &str, answers: &[NormalizedAnswer]) -> Result<()> {
        let mut stdout = io::stdout();
        queue!(
            stdout,
            SetForegroundColor(Colors::HEADER),
            Print(format!("Roll Number: {} ({} answers)\n", roll_number, answers.len())),
            ResetColor,
        )?;
        for answer in answers {
            queue!(
                stdout,
                SetForegroundColor(Colors::FULL),
                Print(answer.question_number.as_deref().unwrap_or("(no number)")),
                ResetColor,
                Print(format!(" {}\n", answer.question_text)),
                SetForegroundColor(Colors::DIM),
                Print(format!("  {}\n", answer.answer_text)),
                ResetColor,
            )?;
        }
        stdout.flush()?;
        Ok(())
    }
}

/// First `EXCERPT_CHARS` characters, with an ellipsis when cut.
fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(EXCERPT_CHARS - 3).collect();
    format!("{cut}...")
}
