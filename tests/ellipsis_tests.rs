use tailtrim::ellipsis::{truncate_with_tail, TailEllipsis, Truncation};
use tailtrim::measure::{CellMeasurer, TextMeasurer};

const BRANCH: &str = "feature/create-new-text-ellipsis-component-TC2018.02";

fn compute(text: &str, tail_len: usize, available: u16) -> Truncation {
    let measured = CellMeasurer.measure(text);
    truncate_with_tail(text, tail_len, measured, available)
}

#[test]
fn test_reconstruction_invariant() {
    // prefix + hidden + tail must reproduce the source exactly, for
    // overflowing and non-overflowing widths alike.
    let texts = [
        BRANCH,
        "short.txt",
        "",
        "日本語のファイル.txt",
        "a",
        "/usr/local/share/doc/package/README.md",
    ];
    for text in texts {
        for tail_len in [0, 1, 5, 100] {
            for available in [0, 1, 2, 3, 10, 28, 200] {
                let result = compute(text, tail_len, available);
                assert_eq!(
                    result.reconstruct(),
                    text,
                    "text={:?} tail_len={} available={}",
                    text,
                    tail_len,
                    available
                );
            }
        }
    }
}

#[test]
fn test_reconstruction_sweep_over_tail_and_width() {
    // Dense sweep: every tail length and width combination reassembles the
    // source, for ASCII and multi-byte samples alike.
    for text in [BRANCH, "日本語のファイル.txt"] {
        for tail_len in 0..60 {
            for available in 0..60 {
                let result = compute(text, tail_len, available);
                assert_eq!(
                    result.reconstruct(),
                    text,
                    "tail_len={} available={}",
                    tail_len,
                    available
                );
            }
        }
    }
}

#[test]
fn test_no_overflow_returns_text_unmodified() {
    let result = compute("short.txt", 4, 20);
    assert!(!result.overflow);
    assert!(!result.is_truncated());
    assert_eq!(result.prefix, "short.txt");
    assert_eq!(result.hidden, "");
    assert_eq!(result.tail, "");
    assert_eq!(result.display(), "short.txt");
}

#[test]
fn test_exact_fit_is_not_overflow() {
    // measured == available is not an overflow; only strictly wider text is.
    let result = compute("short.txt", 4, 9);
    assert!(!result.overflow);
    assert_eq!(result.display(), "short.txt");
}

#[test]
fn test_branch_name_keeps_tail_visible() {
    // 52 chars into 28 columns with a 5-char tail: the prefix takes the
    // fitting length minus the tail minus 3 cells reserved for the glyphs.
    let result = compute(BRANCH, 5, 28);
    assert!(result.overflow);
    assert_eq!(result.prefix, "feature/create-new-t");
    assert_eq!(result.tail, "18.02");
    assert_eq!(result.display(), "feature/create-new-t...18.02");
    assert_eq!(result.reconstruct(), BRANCH);
}

#[test]
fn test_tail_zero_disables_truncation_but_reports_overflow() {
    let result = compute(BRANCH, 0, 10);
    assert!(result.overflow);
    assert!(!result.is_truncated());
    assert_eq!(result.display(), BRANCH);
}

#[test]
fn test_tail_longer_than_text_degrades_to_fitting_suffix() {
    let result = compute("abc.txt", 10, 5);
    assert!(result.overflow);
    assert_eq!(result.prefix, "");
    assert_eq!(result.hidden, "ab");
    assert_eq!(result.tail, "c.txt");
    assert_eq!(result.reconstruct(), "abc.txt");
}

#[test]
fn test_narrow_container_shrinks_the_tail() {
    // The requested tail does not fit, so the visible part shrinks to the
    // suffix that does; the literal tail count is not honored.
    let result = compute(BRANCH, 10, 6);
    assert!(result.overflow);
    assert_eq!(result.prefix, "");
    assert_eq!(result.tail.chars().count(), 6);
    assert!(BRANCH.ends_with(&result.tail));
}

#[test]
fn test_pathologically_small_widths_never_panic() {
    for available in 0..4 {
        let result = compute(BRANCH, 5, available);
        assert!(result.overflow);
        assert_eq!(result.prefix, "");
        assert_eq!(result.tail.chars().count(), available as usize);
        assert_eq!(result.reconstruct(), BRANCH);
    }
}

#[test]
fn test_empty_text_is_untouched() {
    let result = compute("", 5, 0);
    assert!(!result.overflow);
    assert_eq!(result.display(), "");
    assert_eq!(result.reconstruct(), "");
}

#[test]
fn test_wide_glyphs_split_on_char_boundaries() {
    // 12 chars measuring 20 cells: the average char width is ~1.67, so
    // only ~6 chars fit in 10 cells. The split must never land inside a
    // multi-byte character.
    let text = "日本語のファイル.txt";
    let result = compute(text, 4, 10);
    assert!(result.overflow);
    assert_eq!(result.tail, ".txt");
    assert_eq!(result.reconstruct(), text);
}

#[test]
fn test_idempotence() {
    let first = compute(BRANCH, 5, 28);
    let second = compute(BRANCH, 5, 28);
    assert_eq!(first, second);
}

#[test]
fn test_tooltip_present_only_while_overflowing() {
    let overflowing = compute(BRANCH, 5, 28);
    assert_eq!(overflowing.tooltip("A new amazing feature!"), Some("A new amazing feature!"));
    assert_eq!(overflowing.tooltip(""), None);

    let fitting = compute(BRANCH, 5, 200);
    assert_eq!(fitting.tooltip("A new amazing feature!"), None);
}

#[test]
fn test_widget_truncation_matches_free_function() {
    let widget = TailEllipsis::new(BRANCH, 5);
    assert_eq!(widget.truncation(28), compute(BRANCH, 5, 28));
}

#[test]
fn test_widget_tooltip_follows_overflow() {
    let widget = TailEllipsis::new(BRANCH, 5).title("A new amazing feature!");
    assert_eq!(widget.tooltip(28), Some("A new amazing feature!"));
    assert_eq!(widget.tooltip(200), None);

    let untitled = TailEllipsis::new(BRANCH, 5);
    assert_eq!(untitled.tooltip(28), None);
}

#[test]
fn test_widget_accepts_precomputed_measurement() {
    // A caller-supplied cached width drives the same split as measuring.
    let measured = CellMeasurer.measure(BRANCH);
    let widget = TailEllipsis::new(BRANCH, 5).measured_width(measured);
    assert_eq!(widget.truncation(28), compute(BRANCH, 5, 28));
}
