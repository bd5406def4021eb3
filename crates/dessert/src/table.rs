use dessert_core::{Validator, ValidatorKind};

fn kind_label(kind: ValidatorKind) -> &'static str {
    match kind {
        ValidatorKind::Builtin => "built-in",
        ValidatorKind::Custom => "custom",
    }
}

/// Print a formatted table of validators
pub fn print_validators_table(validators: &[Validator]) {
    let name_width = validators
        .iter()
        .map(|v| v.name().chars().count())
        .max()
        .unwrap_or(4)
        .clamp(4, 40);
    let kind_width = 8; // "built-in"

    println!(
        "┌{}┬{}┐",
        "─".repeat(name_width + 2),
        "─".repeat(kind_width + 2),
    );
    println!(
        "│ {:<name_width$} │ {:<kind_width$} │",
        "Name",
        "Kind",
        name_width = name_width,
        kind_width = kind_width,
    );
    println!(
        "├{}┼{}┤",
        "─".repeat(name_width + 2),
        "─".repeat(kind_width + 2),
    );

    for validator in validators {
        println!(
            "│ {:<name_width$} │ {:<kind_width$} │",
            truncate(validator.name(), name_width),
            kind_label(validator.kind()),
            name_width = name_width,
            kind_width = kind_width,
        );
    }

    println!(
        "└{}┴{}┘",
        "─".repeat(name_width + 2),
        "─".repeat(kind_width + 2),
    );
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
