// src/utils/format.rs
use console::Style;

const METER_SEGMENTS: i8 = 4;

// Style for a given strength score
pub fn score_style(score: i8) -> Style {
    match score {
        0 => Style::new().red(),
        1 => Style::new().red().bright(),
        2 => Style::new().yellow(),
        3 => Style::new().green(),
        4 => Style::new().green().bright(),
        _ => Style::new().dim(),
    }
}

// Render a 4-segment strength meter, filled up to the score
pub fn strength_meter(score: i8) -> String {
    let filled = score.clamp(0, METER_SEGMENTS);
    let bar: String = (0..METER_SEGMENTS)
        .map(|i| if i < filled { '█' } else { '░' })
        .collect();
    score_style(score).apply_to(bar).to_string()
}

// Checkmark / cross for checklist lines
pub fn check_mark(met: bool) -> &'static str {
    if met {
        "✅"
    } else {
        "❌"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    #[test]
    fn meter_fills_with_score() {
        assert_eq!(strip_ansi_codes(&strength_meter(-1)), "░░░░");
        assert_eq!(strip_ansi_codes(&strength_meter(0)), "░░░░");
        assert_eq!(strip_ansi_codes(&strength_meter(2)), "██░░");
        assert_eq!(strip_ansi_codes(&strength_meter(4)), "████");
    }

    #[test]
    fn marks_reflect_state() {
        assert_eq!(check_mark(true), "✅");
        assert_eq!(check_mark(false), "❌");
    }
}
