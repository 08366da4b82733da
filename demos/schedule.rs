use cadence::{is_match, parse, Frequency, MatchContext, RuleBuilder, Weekday};
use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let today = NaiveDate::from_ymd_opt(2024, 3, 8).expect("valid date");

    // Rules as a host application would store them.
    let stored = [
        "FREQ=DAILY",
        "FREQ=WEEKLY;BYDAY=MO,WE,FR",
        "FREQ=MONTHLY;BYDAY=2FR",
        "FREQ=MONTHLY;BYDAY=-1FR",
        "FREQ=MONTHLY;BYMONTHDAY=1,15",
        "BYDAY=MO",
    ];

    println!("Due on {today}:");
    for text in stored {
        match parse(text) {
            Ok(rule) => println!("  {:<32} {}", rule.to_string(), is_match(&rule, today, None)),
            Err(err) => println!("  {text:<32} inactive ({err})"),
        }
    }

    // Completing a ritual today suppresses it until tomorrow.
    let daily = parse("FREQ=DAILY").expect("valid rule");
    println!(
        "\nDaily rule after completing it today: {}",
        is_match(&daily, today, Some(today))
    );

    // Every other week, counted from the day the schedule started.
    let biweekly = RuleBuilder::new(Frequency::Weekly)
        .interval(2)
        .on(Weekday::Friday)
        .build();
    let started = NaiveDate::from_ymd_opt(2024, 2, 23).expect("valid date");
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
    let end = NaiveDate::from_ymd_opt(2024, 4, 30).expect("valid date");
    println!("\n{biweekly} since {started}:");
    for date in biweekly.occurrences(start..=end, Some(started)) {
        println!("  {date}");
    }

    let ctx = MatchContext::new(today).anchor(started);
    println!("\nDue today? {}", biweekly.matches(&ctx));
}
