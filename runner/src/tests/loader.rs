use pretty_assertions::assert_eq;
use workload::parse;

use super::records;

#[test]
fn parses_whitespace_separated_quadruples() {
    let input = "1 24 0 3\n2 3 0 1\n3 3 0 2\n";

    assert_eq!(
        parse(input),
        records(&[(1, 24, 0, 3), (2, 3, 0, 1), (3, 3, 0, 2)])
    );
}

#[test]
fn records_do_not_need_line_alignment() {
    let input = "1 24\n0 3 2 3\n0 1";

    assert_eq!(parse(input), records(&[(1, 24, 0, 3), (2, 3, 0, 1)]));
}

#[test]
fn comment_lines_are_skipped() {
    let input = "# sample workload\n1 4 0 0\n  # indented comment\n2 2 0 0\n";

    assert_eq!(parse(input), records(&[(1, 4, 0, 0), (2, 2, 0, 0)]));
}

#[test]
fn truncated_tail_is_dropped() {
    let input = "1 4 0 0\n2 2 0";

    assert_eq!(parse(input), records(&[(1, 4, 0, 0)]));
}

#[test]
fn malformed_token_stops_the_parse() {
    let input = "1 4 0 0\n2 burst 0 0\n3 3 0 0";

    assert_eq!(parse(input), records(&[(1, 4, 0, 0)]));
}

#[test]
fn negative_burst_is_rejected() {
    let input = "1 -4 0 0\n2 2 0 0";

    assert_eq!(parse(input), records(&[]));
}

#[test]
fn negative_priority_is_allowed() {
    let input = "1 4 0 -2";

    assert_eq!(parse(input), records(&[(1, 4, 0, -2)]));
}

#[test]
fn empty_input_parses_to_nothing() {
    assert_eq!(parse(""), records(&[]));
    assert_eq!(parse("  \n\t\n"), records(&[]));
}
