mod common;

use common::{date, draft, temp_journal};

use trade_planner::core::history::{DayResult, DEFAULT_WINDOW};
use trade_planner::error::Error;
use trade_planner::journal::Journal;
use trade_planner::models::{Direction, Outcome};

#[test]
fn plans_survive_a_restart() {
    let (dir, journal) = temp_journal();
    let day = date("2024-03-10");

    // 1. Record two plans through the facade
    journal
        .add_plan(day, draft("morning long", Direction::Buy, 120.0, 100.0, "london open"))
        .unwrap();
    journal
        .add_plan(day, draft("afternoon fade", Direction::Sell, 95.0, 110.0, ""))
        .unwrap();

    // 2. Open a second journal on the same file. Nothing is cached in
    //    memory, so this is a process restart as far as the store cares
    let reopened = Journal::open(dir.path().join("planner_data.json"));
    let plans = reopened.plans_for(day).unwrap();

    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].name, "morning long");
    assert_eq!(plans[0].result, Outcome::Win);
    assert_eq!(plans[0].note, "london open");
    assert_eq!(plans[1].name, "afternoon fade");
    assert_eq!(plans[1].result, Outcome::Loss);

    // 3. Appending through the second journal keeps the first two in order
    reopened
        .add_plan(day, draft("", Direction::Unset, 0.0, 0.0, ""))
        .unwrap();
    let plans = reopened.plans_for(day).unwrap();
    assert_eq!(plans.len(), 3);
    assert_eq!(plans[0].name, "morning long");
    assert_eq!(plans[2].display_name(), "Unnamed Plan");
    assert_eq!(plans[2].result, Outcome::Breakeven);
}

#[test]
fn history_window_and_divergent_policies() {
    let (_dir, journal) = temp_journal();
    let reference = date("2024-03-10");

    // Day with one clear win
    journal
        .add_plan(date("2024-03-09"), draft("a", Direction::Buy, 50.0, 10.0, ""))
        .unwrap();
    // Day whose plans classify Win and Loss individually but net to zero
    journal
        .add_plan(reference, draft("b", Direction::Buy, 20.0, 5.0, ""))
        .unwrap();
    journal
        .add_plan(reference, draft("c", Direction::Sell, 5.0, 20.0, ""))
        .unwrap();
    // Day present in the window but never written: stays absent

    let summaries = journal.history(reference, DEFAULT_WINDOW).unwrap();
    assert_eq!(summaries.len(), DEFAULT_WINDOW);

    // Newest first: reference date leads the window
    assert_eq!(summaries[0].date, reference);
    assert_eq!(summaries[4].date, date("2024-03-06"));

    // Per-trade margin rule says Win + Loss; the day aggregate nets to
    // Breakeven under the zero-threshold rule
    let plans = journal.plans_for(reference).unwrap();
    assert_eq!(plans[0].outcome(), Outcome::Win);
    assert_eq!(plans[1].outcome(), Outcome::Loss);
    assert_eq!(
        summaries[0].result,
        DayResult::Net {
            net_result: 0.0,
            status: Outcome::Breakeven,
        }
    );

    assert_eq!(
        summaries[1].result,
        DayResult::Net {
            net_result: 40.0,
            status: Outcome::Win,
        }
    );
    assert_eq!(summaries[2].result, DayResult::NoData);
    assert_eq!(summaries[3].result, DayResult::NoData);
    assert_eq!(summaries[4].result, DayResult::NoData);
}

#[test]
fn rejected_input_leaves_the_ledger_untouched() {
    let (_dir, journal) = temp_journal();
    let day = date("2024-03-10");

    let err = journal
        .add_plan(day, draft("bad", Direction::Buy, f64::NAN, 5.0, ""))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidNumber { field: "tp", .. }));

    assert!(journal.plans_for(day).unwrap().is_empty());
    let summaries = journal.history(day, 1).unwrap();
    assert_eq!(summaries[0].result, DayResult::NoData);
}

#[test]
fn hand_edited_file_reads_leniently() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("planner_data.json");

    // A file the user edited by hand: one day with an empty trade list,
    // one day whose record omits most fields
    std::fs::write(
        &path,
        r#"{
  "2024-03-09": { "trades": [] },
  "2024-03-10": { "trades": [{ "tp": 50.0 }] }
}"#,
    )
    .unwrap();

    let journal = Journal::open(&path);

    // Present-but-empty behaves exactly like absent
    assert!(journal.plans_for(date("2024-03-09")).unwrap().is_empty());
    let summaries = journal.history(date("2024-03-10"), 2).unwrap();
    assert_eq!(summaries[1].result, DayResult::NoData);

    // The sparse record filled in defaults; its outcome comes from tp/sl
    let plans = journal.plans_for(date("2024-03-10")).unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].display_name(), "Unnamed Plan");
    assert_eq!(plans[0].direction, Direction::Unset);
    assert_eq!(plans[0].sl, 0.0);
    assert_eq!(plans[0].outcome(), Outcome::Win);
    assert_eq!(
        summaries[0].result,
        DayResult::Net {
            net_result: 50.0,
            status: Outcome::Win,
        }
    );
}

#[test]
fn ledger_file_stays_human_readable() {
    let (dir, journal) = temp_journal();
    journal
        .add_plan(
            date("2024-03-10"),
            draft("readable", Direction::Buy, 20.0, 5.0, "check the file"),
        )
        .unwrap();

    let content = std::fs::read_to_string(dir.path().join("planner_data.json")).unwrap();
    assert!(content.contains("\"2024-03-10\""));
    assert!(content.contains("\"name\": \"readable\""));
    assert!(content.contains("\"result\": \"Win\""));
    // pretty-printed, one field per line
    assert!(content.lines().count() > 5);
}
