use crate::models::Salary;

/// Resolve the offered salary figure
///
/// Ranges resolve to their midpoint. Text is parsed with [`parse_salary_text`].
pub fn offered_salary(salary: &Salary) -> Option<f64> {
    let figure = match salary {
        Salary::Amount(amount) => Some(*amount),
        Salary::Range { min, max } => Some((min + max) / 2.0),
        Salary::Text(text) => parse_salary_text(text),
    };

    figure.filter(|v| v.is_finite() && *v >= 0.0)
}

/// Parse salary text such as `"$90k - $120k"`, `"$85,000"` or `"2M"`
///
/// The first `$` figure is the offer, or the first figure when none carries
/// a `$`. A following figure joined by a range separator (`-`, `to`) makes a
/// range resolved to its midpoint; other figures are ignored.
pub fn parse_salary_text(text: &str) -> Option<f64> {
    let figures = extract_figures(text);

    let start = figures.iter().position(|f| f.dollar).unwrap_or(0);
    let first = figures.get(start)?;

    match figures.get(start + 1) {
        Some(next) if next.joined => Some((first.value + next.value) / 2.0),
        _ => Some(first.value),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Figure {
    value: f64,
    /// Preceded by a `$`
    dollar: bool,
    /// Joined to the previous figure by a range separator
    joined: bool,
}

/// Pull numeric figures out of text, honouring `k`/`m` suffixes and digit grouping
fn extract_figures(text: &str) -> Vec<Figure> {
    let mut figures: Vec<Figure> = Vec::new();
    let mut gap = String::new();
    let mut chars = text.chars().peekable();

    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            gap.push(c);
            chars.next();
            continue;
        }

        let mut digits = String::new();
        while let Some(&d) = chars.peek() {
            match d {
                '0'..='9' | '.' => digits.push(d),
                ',' | '_' => {}
                _ => break,
            }
            chars.next();
        }

        let multiplier = match chars.peek() {
            Some('k') | Some('K') => 1_000.0,
            Some('m') | Some('M') => 1_000_000.0,
            _ => 1.0,
        };
        if multiplier > 1.0 {
            chars.next();
        }

        if let Ok(value) = digits.trim_end_matches('.').parse::<f64>() {
            figures.push(Figure {
                value: value * multiplier,
                dollar: gap.trim_end().ends_with('$'),
                joined: !figures.is_empty() && is_range_separator(&gap),
            });
        }
        gap.clear();
    }

    figures
}

#[inline]
fn is_range_separator(gap: &str) -> bool {
    let sep = gap.trim().trim_end_matches('$').trim().to_lowercase();
    matches!(sep.as_str(), "-" | "–" | "—" | "to")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range_with_suffix() {
        assert_eq!(parse_salary_text("$90k - $120k"), Some(105_000.0));
        assert_eq!(parse_salary_text("$85K-$110K"), Some(97_500.0));
    }

    #[test]
    fn test_parse_grouped_figure() {
        assert_eq!(parse_salary_text("$85,000"), Some(85_000.0));
        assert_eq!(parse_salary_text("120000 USD"), Some(120_000.0));
    }

    #[test]
    fn test_parse_millions() {
        assert_eq!(parse_salary_text("2M"), Some(2_000_000.0));
        assert_eq!(parse_salary_text("1.5k"), Some(1_500.0));
    }

    #[test]
    fn test_word_range_separator() {
        assert_eq!(parse_salary_text("90,000 to 120,000"), Some(105_000.0));
        assert_eq!(parse_salary_text("$90k – $110k"), Some(100_000.0));
    }

    #[test]
    fn test_unrelated_figures_ignored() {
        assert_eq!(parse_salary_text("Up to $120k plus 401k match"), Some(120_000.0));
        assert_eq!(parse_salary_text("3 days onsite, $95k"), Some(95_000.0));
        assert_eq!(parse_salary_text("$100k, 20 days PTO"), Some(100_000.0));
    }

    #[test]
    fn test_unparsable_text() {
        assert_eq!(parse_salary_text("Competitive"), None);
        assert_eq!(parse_salary_text(""), None);
    }

    #[test]
    fn test_offered_salary_variants() {
        assert_eq!(offered_salary(&Salary::Amount(100_000.0)), Some(100_000.0));
        assert_eq!(
            offered_salary(&Salary::Range { min: 80_000.0, max: 120_000.0 }),
            Some(100_000.0)
        );
        assert_eq!(offered_salary(&Salary::Amount(f64::NAN)), None);
        assert_eq!(offered_salary(&Salary::Amount(-5.0)), None);
    }
}
