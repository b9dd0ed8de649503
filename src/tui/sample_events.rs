use chrono::Local;
use gridcal::{app::AppState, calendar::Event};

pub fn add_sample_events(app: &mut AppState) {
    let today = Local::now().date_naive();

    let Some(tomorrow) = today.succ_opt() else { return };
    let Some(yesterday) = today.pred_opt() else { return };

    let events = [
        ("Morning Standup", today),
        ("Team Sync", today),
        ("Code Review", tomorrow),
        ("Sprint Planning", tomorrow),
        ("Lunch with Team", yesterday),
    ];

    for (title, date) in events {
        app.add_event(Event::new(title, date));
    }

    tracing::info!("Seeded {} sample events", app.events.len());
}
