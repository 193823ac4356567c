use chrono::{Datelike, NaiveDate, Weekday};
use monthgrid::calendar::{generate_on, month_days_on};
use monthgrid::grid::{build_body, days_after_last, days_before_first};
use monthgrid::{days_in_month, CalendarError, Cell, EventEntry, EventMap, GridOptions};
use serde_json::json;

const WEEK_STARTS: [Weekday; 7] = [
    Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu,
    Weekday::Fri, Weekday::Sat, Weekday::Sun,
];

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 14).unwrap()
}

fn months() -> impl Iterator<Item = (i32, u32)> {
    (1890..=2110).flat_map(|y| (1..=12).map(move |m| (y, m)))
}

#[test]
fn month_days_are_the_whole_month_in_order() {
    for (year, month) in months() {
        let days = month_days_on(year, month, today());
        assert_eq!(days.len() as u32, days_in_month(year, month), "{year}-{month}");
        assert_eq!(days[0].day(), 1);
        assert_eq!(days[days.len() - 1].day(), days_in_month(year, month));
        assert!(days.windows(2).all(|w| w[0].date().succ_opt() == Some(w[1].date())));
        assert!(days.iter().all(|d| d.year() == year && d.month() == month));
    }
}

#[test]
fn padding_always_closes_the_last_week() {
    for (year, month) in months() {
        let days = month_days_on(year, month, today());
        for week_start in WEEK_STARTS {
            let before = days_before_first(&days[0], week_start);
            let after  = days_after_last(&days[days.len() - 1], week_start);
            assert!(before < 7 && after < 7);
            assert_eq!((before + days.len() + after) % 7, 0, "{year}-{month} from {week_start}");
        }
    }
}

#[test]
fn body_has_one_real_cell_per_day() {
    let events = EventMap::<()>::new();
    for (year, month) in months().filter(|(y, _)| y % 7 == 0) {
        let days = month_days_on(year, month, today());
        for week_start in WEEK_STARTS {
            let body = build_body(&days, &events, week_start);
            assert!(body.rows().iter().all(|r| r.cells().len() == 7));
            assert_eq!(body.cells().filter(|c| !c.is_filler()).count(), days.len());
            assert!(body.cells().filter(|c| c.is_filler()).all(|c| c.day().is_none() && c.events().is_empty()));

            let first_row = &body.rows()[0];
            assert!(first_row.cells().iter().any(|c| c.day().map(|d| d.day()) == Some(1)));
            let last_row = &body.rows()[body.rows().len() - 1];
            assert!(last_row.cells().iter().any(|c| c.day().map(|d| d.day()) == Some(days.len() as u32)));

            for (idx, cell) in body.cells().enumerate() {
                if let Some(day) = cell.day() {
                    assert_eq!(idx % 7, day.days_from_week_start(week_start) as usize);
                }
            }
        }
    }
}

#[test]
fn february_scenarios() {
    let leap = generate_on(2024, 2, EventMap::<()>::new(), today()).unwrap();
    assert_eq!(leap.days().len(), 29);
    assert_eq!(leap.first_day().weekday(), Weekday::Thu);
    assert_eq!(leap.last_day().weekday(), Weekday::Thu);
    assert_eq!(days_before_first(leap.first_day(), Weekday::Mon), 3);
    assert_eq!(days_after_last(leap.last_day(), Weekday::Mon), 3);
    assert_eq!(leap.month_view(&GridOptions::default()).body.cells().count(), 35);

    let common = generate_on(2023, 2, EventMap::<()>::new(), today()).unwrap();
    assert_eq!(common.days().len(), 28);
    assert_eq!(common.first_day().weekday(), Weekday::Wed);
    assert_eq!(common.last_day().weekday(), Weekday::Tue);
    assert_eq!(days_before_first(common.first_day(), Weekday::Mon), 2);
    assert_eq!(days_after_last(common.last_day(), Weekday::Mon), 5);
    assert_eq!(common.month_view(&GridOptions::default()).body.cells().count(), 35);
}

#[test]
fn february_2015_fits_four_rows() {
    // Feb 1 2015 is a Sunday.
    let cal  = generate_on(2015, 2, EventMap::<()>::new(), today()).unwrap();
    let opts = GridOptions { week_start: Weekday::Sun, ..GridOptions::default() };
    assert_eq!(cal.month_view(&opts).body.rows().len(), 4);
    assert_eq!(cal.month_view(&GridOptions::default()).body.rows().len(), 5);
}

#[test]
fn validation_failures() {
    let none = EventMap::<()>::new;
    assert!(matches!(generate_on(0, 5, none(), today()), Err(CalendarError::InvalidYear(_))));
    assert!(matches!(generate_on(2024, 13, none(), today()), Err(CalendarError::InvalidMonth(_))));
    assert!(matches!(
        monthgrid::generate_from_value(Some(&json!(2024)), Some(&json!(5)), Some(&json!("not-a-map"))),
        Err(CalendarError::InvalidEvents(_))
    ));
}

#[test]
fn navigation_links_wrap_years() {
    for year in [1, 1999, 2024, 9999] {
        let jan = generate_on(year, 1, EventMap::<()>::new(), today()).unwrap();
        let header = jan.month_view(&GridOptions::default()).header;
        assert_eq!((header.prev.year, header.prev.month), (year - 1, 12));
        assert_eq!((header.next.year, header.next.month), (year, 2));

        let dec = generate_on(year, 12, EventMap::<()>::new(), today()).unwrap();
        let header = dec.month_view(&GridOptions::default()).header;
        assert_eq!((header.prev.year, header.prev.month), (year, 11));
        assert_eq!((header.next.year, header.next.month), (year + 1, 1));
        assert_eq!(header.next.href(), format!("?year={}&month=1", year + 1));
    }
}

#[test]
fn same_input_same_output() {
    let events: EventMap<String> = [(3, "a".to_owned()), (3, "b".to_owned())].into_iter().collect();
    let a = generate_on(2031, 7, events.clone(), today()).unwrap();
    let b = generate_on(2031, 7, events, today()).unwrap();
    assert_eq!(a, b);
    let opts = GridOptions::default();
    assert_eq!(a.month_view(&opts), b.month_view(&opts));
    assert_eq!(
        serde_json::to_string(&a.month_view(&opts)).unwrap(),
        serde_json::to_string(&b.month_view(&opts)).unwrap()
    );
}

#[test]
fn events_are_normalized_per_day() {
    let mut events = EventMap::new();
    events.set(5, EventEntry::One(json!({"title": "dentist"})));
    events.set(6, EventEntry::Many(vec![json!("gym"), json!("groceries")]));
    events.set(31, EventEntry::One(json!("never shown in june")));

    let cal  = generate_on(2024, 6, events, today()).unwrap();
    let view = cal.month_view(&GridOptions::default());
    let on = |day: u32| view.body.cells().find(|c| c.day().map(|d| d.day()) == Some(day)).unwrap().events();

    assert_eq!(on(5), &[json!({"title": "dentist"})]);
    assert_eq!(on(6), &[json!("gym"), json!("groceries")]);
    assert!(on(7).is_empty());
    assert_eq!(view.body.cells().filter(|c| !c.events().is_empty()).count(), 2);
}

#[test]
fn today_is_marked_once_and_only_in_its_month() {
    let cal  = generate_on(2024, 2, EventMap::<()>::new(), today()).unwrap();
    let view = cal.month_view(&GridOptions::default());
    let marked: Vec<u32> = view.body.cells()
        .filter_map(|c| match c { Cell::Today(d) => Some(d.day.day()), _ => None })
        .collect();
    assert_eq!(marked, vec![today().day()]);

    let other = generate_on(2024, 3, EventMap::<()>::new(), today()).unwrap();
    assert!(other.month_view(&GridOptions::default()).body.cells().all(|c| !matches!(c, Cell::Today(_))));
}
