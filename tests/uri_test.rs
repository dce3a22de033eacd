use chrono::NaiveDate;
use spotrip::uri::*;

#[test]
fn test_parse_entity_uri() {
    let uri = SpotifyUri::parse("spotify:album:6akEvsycLGftJxYudPjmqK").unwrap();
    assert_eq!(uri.scheme, "spotify");
    assert_eq!(uri.kind, "album");
    assert_eq!(uri.id, "6akEvsycLGftJxYudPjmqK");
    assert_eq!(uri.to_string(), "spotify:album:6akEvsycLGftJxYudPjmqK");
}

#[test]
fn test_parse_entity_uri_wrong_token_count() {
    for bad in ["spotify:album", "spotify:user:me:playlist:x", "", "6akEvsycLGftJxYudPjmqK"] {
        let err = SpotifyUri::parse(bad).unwrap_err();
        assert!(matches!(err, UriError::TokenCount { expected: 3, .. }), "{}", bad);
    }
}

#[test]
fn test_parse_chart_query() {
    let query = ChartQuery::parse("spotify:charts:regional:us:weekly:2020-01-01").unwrap();
    assert_eq!(query.metric, Metric::Regional);
    assert_eq!(query.region.code(), "us");
    assert_eq!(query.window, Window::Weekly);
    assert_eq!(
        query.date,
        ChartDate::Day(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
    );
    assert_eq!(query.download_path(), "regional/us/weekly/2020-01-01/download");
}

#[test]
fn test_parse_chart_query_latest_viral_global() {
    let query = ChartQuery::parse("spotify:charts:viral:global:daily:latest").unwrap();
    assert_eq!(query.metric, Metric::Viral);
    assert_eq!(query.region.code(), "global");
    assert_eq!(query.window, Window::Daily);
    assert_eq!(query.date, ChartDate::Latest);
    assert_eq!(query.download_path(), "viral/global/daily/latest/download");
}

#[test]
fn test_parse_chart_query_rejects_each_parameter() {
    let cases = [
        ("spotify:charts:popular:us:weekly:latest", "popular"),
        ("spotify:charts:regional:zz:weekly:latest", "zz"),
        ("spotify:charts:regional:us:monthly:latest", "monthly"),
        ("spotify:charts:regional:us:weekly:yesterday", "yesterday"),
        ("spotify:charts:regional:us:weekly:2020-1-01", "2020-1-01"),
        ("spotify:charts:regional:us:weekly:2020-02-30", "2020-02-30"),
    ];

    for (uri, offending) in cases {
        match ChartQuery::parse(uri) {
            Err(UriError::ChartParameter { value, .. }) => assert_eq!(value, offending),
            other => panic!("{} parsed as {:?}", uri, other),
        }
    }
}

#[test]
fn test_chart_parameter_error_lists_valid_options() {
    let err = ChartQuery::parse("spotify:charts:regional:zz:weekly:latest").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("zz"));
    assert!(message.contains("global"));
    assert!(message.contains("us, gb"));

    let err = ChartQuery::parse("spotify:charts:regional:us:weekly:soon").unwrap_err();
    assert!(err.to_string().contains("'latest'"));
}

#[test]
fn test_parse_chart_query_wrong_token_count() {
    let err = ChartQuery::parse("spotify:charts:regional:us:weekly").unwrap_err();
    assert_eq!(
        err,
        UriError::TokenCount {
            uri: "spotify:charts:regional:us:weekly".to_string(),
            expected: 6,
            found: 5,
        }
    );
}

#[test]
fn test_valid_regions() {
    assert_eq!(VALID_REGIONS.len(), 58);
    for region in VALID_REGIONS {
        assert_eq!(Region::parse(region).unwrap().code(), region);
    }
    assert!(Region::parse("US").is_err());
}
