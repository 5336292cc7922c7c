//! Tests for the core line-classification and extraction behaviour

use super::*;
use crate::app::models::ObservationRecord;
use crate::app::services::feed_parser::FeedParser;

#[test]
fn test_comment_and_data_lines() {
    let parser = FeedParser::new();
    let result = parser.parse("# header\n2020 414.2\n2021 416.5\n");

    assert_eq!(
        result.records,
        vec![
            ObservationRecord::new("2020", Some(414.2)),
            ObservationRecord::new("2021", Some(416.5)),
        ]
    );
    assert_eq!(result.stats.comment_lines, 1);
    assert_eq!(result.stats.records_parsed, 2);
}

#[test]
fn test_blank_lines_and_extra_tokens_ignored() {
    let parser = FeedParser::new();
    let result = parser.parse("\n\n2019  410.0 extra\n");

    assert_eq!(
        result.records,
        vec![ObservationRecord::new("2019", Some(410.0))]
    );
}

#[test]
fn test_single_token_line_yields_nothing() {
    let parser = FeedParser::new();
    let result = parser.parse("2020\n");

    assert!(result.records.is_empty());
    assert_eq!(result.stats.malformed_lines, 1);
}

#[test]
fn test_period_is_first_four_characters() {
    let parser = FeedParser::new();
    let result = parser.parse("2020abc 405.1\n");

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].period, "2020");
    assert_eq!(result.records[0].value, Some(405.1));
}

#[test]
fn test_short_first_token_passes_through_whole() {
    let parser = FeedParser::new();
    let result = parser.parse("86 350.5\n");

    assert_eq!(result.records[0].period, "86");
}

#[test]
fn test_comment_lines_never_yield_records() {
    let parser = FeedParser::new();
    let result = parser.parse("# 2020 414.2\n#2021 416.5\n");

    assert!(result.records.is_empty());
    assert_eq!(result.stats.comment_lines, 2);
}

#[test]
fn test_whitespace_only_lines_never_yield_records() {
    let parser = FeedParser::new();
    let result = parser.parse("   \n\t\n  \t  \n");

    assert!(result.records.is_empty());
    assert_eq!(result.stats.blank_lines, result.stats.total_lines);
}

#[test]
fn test_record_count_and_order_match_data_lines() {
    let parser = FeedParser::new();
    let result = parser.parse(&create_test_feed());

    let periods: Vec<&str> = result.records.iter().map(|r| r.period.as_str()).collect();
    assert_eq!(periods, vec!["2019", "2019", "2020", "2020", "2021"]);
    assert_eq!(result.stats.records_parsed, 5);
    assert_eq!(result.stats.comment_lines, 4);
}

#[test]
fn test_parse_is_idempotent() {
    let parser = FeedParser::new();
    let text = create_test_feed();

    assert_eq!(parser.parse(&text), parser.parse(&text));
}

#[test]
fn test_commentary_only_feed_is_empty() {
    let parser = FeedParser::new();
    let result = parser.parse(&create_commentary_only_feed());

    assert!(result.records.is_empty());
    assert_eq!(result.stats.data_lines(), 0);
}

#[test]
fn test_empty_payload() {
    let parser = FeedParser::new();
    let result = parser.parse("");

    assert!(result.records.is_empty());
    // An empty string still splits into one (blank) line
    assert_eq!(result.stats.total_lines, 1);
    assert_eq!(result.stats.blank_lines, 1);
}

#[test]
fn test_negative_and_sentinel_numerics_parse() {
    // No plausibility validation: any numeric string becomes a value
    let parser = FeedParser::new();
    let result = parser.parse("2020-01-01 -999.99\n");

    assert_eq!(result.records[0].value, Some(-999.99));
}

#[test]
fn test_crlf_payload() {
    let parser = FeedParser::new();
    let result = parser.parse("# header\r\n2020 414.2\r\n");

    assert_eq!(
        result.records,
        vec![ObservationRecord::new("2020", Some(414.2))]
    );
}
