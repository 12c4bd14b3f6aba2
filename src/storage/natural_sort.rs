use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Splits a name into alternating text and digit runs, always starting with
/// a (possibly empty) text run.
fn runs(name: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut in_digits = false;

    for (i, ch) in name.char_indices() {
        let is_digit = ch.is_ascii_digit();
        if is_digit != in_digits {
            runs.push(&name[start..i]);
            start = i;
            in_digits = is_digit;
        }
    }
    runs.push(&name[start..]);

    runs
}

fn compare_numbers(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');

    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Case-insensitive comparison where digit runs compare by value:
/// `frame_2 < frame_10`.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();
    let a_runs = runs(&a_lower);
    let b_runs = runs(&b_lower);

    for (i, (x, y)) in a_runs.iter().zip(&b_runs).enumerate() {
        let ordering = if i % 2 == 1 {
            compare_numbers(x, y)
        } else {
            x.cmp(y)
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    a_runs
        .len()
        .cmp(&b_runs.len())
        .then_with(|| a.cmp(b))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Sorts paths by file name in natural order.
pub fn sort_naturally(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| natural_cmp(&file_name(a), &file_name(b)));
}
