use du_barchart::{ChartError, ChartProcessor, Config, FractionMode, SizeParser};
use proptest::prelude::*;

fn parser() -> SizeParser {
    SizeParser::new(&Config::default()).unwrap()
}

#[test]
fn du_style_lines() {
    let p = parser();
    assert_eq!(p.parse("4\t./src\n", 1).unwrap(), 4.0);
    assert_eq!(p.parse("  128 ./target\n", 1).unwrap(), 128.0);
    assert_eq!(p.parse("12K\t./docs\n", 1).unwrap(), 12.0 * 1024.0);
    assert_eq!(p.parse("3M\t.\n", 1).unwrap(), 3.0 * 1024.0 * 1024.0);
    assert_eq!(p.parse("0\t./empty\n", 1).unwrap(), 0.0);
}

#[test]
fn fraction_is_added_as_written() {
    let p = parser();
    assert_eq!(p.parse("1.5 x", 1).unwrap(), 6.0);
    assert_eq!(p.parse("1.05 x", 1).unwrap(), 6.0);
    assert_eq!(p.parse("2.25G x", 1).unwrap(), 27.0 * 1024f64.powi(3));
}

#[test]
fn positional_mode_reads_real_decimals() {
    let cfg = Config::builder()
        .decimal_marker(',')
        .fraction(FractionMode::Positional)
        .build()
        .unwrap();
    let p = SizeParser::new(&cfg).unwrap();
    assert!((p.parse("2,5M x", 1).unwrap() - 2.5 * 1024.0 * 1024.0).abs() < 1e-6);
    assert!((p.parse("1,05 x", 1).unwrap() - 1.05).abs() < 1e-12);
}

#[test]
fn rejects_lines_without_a_leading_size() {
    let p = parser();
    for (line, ordinal) in [("", 1), ("\n", 2), ("x 12\n", 3), (".5 x", 4), ("-3 x", 5)] {
        match p.parse(line, ordinal) {
            Err(ChartError::ImproperLine { line }) => assert_eq!(line, ordinal),
            other => panic!("{line:?} parsed as {other:?}"),
        }
    }
}

#[test]
fn failed_feed_leaves_buffer_alone_but_counts_the_line() {
    let mut chart = ChartProcessor::new(Config::default()).unwrap();
    chart.feed("10 a\n").unwrap();
    let err = chart.feed("oops\n").unwrap_err();
    assert!(matches!(err, ChartError::ImproperLine { line: 2 }));
    assert_eq!(chart.len(), 1);

    chart.feed("20 b\n").unwrap();
    assert_eq!(chart.entries()[1].ordinal, 3);
    assert!(matches!(
        chart.feed("?\n"),
        Err(ChartError::ImproperLine { line: 4 })
    ));
}

#[test]
fn error_message_names_the_line() {
    let msg = parser().parse("nope", 7).unwrap_err().to_string();
    assert!(msg.contains("line 7"), "{msg}");
}

proptest! {
    #[test]
    fn plain_integers(n in 0u64..1_000_000_000_000, name in "[a-zA-Z0-9/._-]{0,16}") {
        let line = format!("{n}\t{name}\n");
        prop_assert_eq!(parser().parse(&line, 1).unwrap(), n as f64);
    }

    #[test]
    fn literal_fraction(n in 0u64..1_000_000, d in "[0-9]{1,9}", name in "[a-z ]{0,8}") {
        let line = format!("{n}.{d} {name}");
        let expected = n as f64 + d.parse::<u64>().unwrap() as f64;
        prop_assert_eq!(parser().parse(&line, 1).unwrap(), expected);
    }

    #[test]
    fn unit_suffixes(n in 0u64..1_000_000, idx in 0usize..8, name in "[a-z/]{0,8}") {
        let unit = ['k', 'K', 'm', 'M', 'g', 'G', 't', 'T'][idx];
        let exp = i32::try_from(idx / 2 + 1).unwrap();
        let line = format!("{n}{unit}\t{name}\n");
        prop_assert_eq!(parser().parse(&line, 1).unwrap(), n as f64 * 1024f64.powi(exp));
    }

    #[test]
    fn non_digit_start_is_improper(
        ws in "[ \t]{0,3}",
        head in "[a-zA-Z/._=#-]",
        rest in "[a-z0-9 ]{0,8}",
        ordinal in 1usize..10_000,
    ) {
        let line = format!("{ws}{head}{rest}\n");
        let res = parser().parse(&line, ordinal);
        prop_assert!(
            matches!(res, Err(ChartError::ImproperLine { line }) if line == ordinal),
            "{:?} parsed as {:?}",
            line,
            res
        );
    }
}
